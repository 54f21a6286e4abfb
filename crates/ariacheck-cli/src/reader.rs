use std::fs;
use std::path::{Path, PathBuf};

use ariacheck_core::{ElementDescriptor, KnownAttributeSet};
use serde::Deserialize;

/// Name of the optional config file looked up in the input directory.
pub const CONFIG_FILE: &str = "ariacheck.config.yaml";

/// A descriptor file with the elements it declares.
pub struct ElementFile {
    pub path: String,
    pub elements: Vec<ElementDescriptor>,
}

/// Project configuration from ariacheck.config.yaml.
#[derive(Debug, Default, Deserialize)]
pub struct AriaCheckConfig {
    /// Additional canonical attribute names to accept.
    #[serde(default)]
    pub extra_attributes: Vec<String>,
    /// Glob patterns (relative to the config file) replacing the default scan.
    pub sources: Option<Vec<String>>,
}

impl AriaCheckConfig {
    pub fn known_attributes(&self) -> Result<KnownAttributeSet, String> {
        KnownAttributeSet::with_extra(&self.extra_attributes)
            .map_err(|e| format!("Invalid {CONFIG_FILE}: {e}"))
    }
}

/// Read the config next to the input (the directory itself, or a file's parent).
pub fn read_config(input_path: &Path) -> Result<AriaCheckConfig, String> {
    let dir = if input_path.is_dir() {
        input_path
    } else {
        match input_path.parent() {
            Some(parent) => parent,
            None => return Ok(AriaCheckConfig::default()),
        }
    };

    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(AriaCheckConfig::default());
    }

    let content =
        fs::read_to_string(&config_path).map_err(|e| format!("Failed to read config: {}", e))?;
    serde_yaml::from_str(&content).map_err(|e| format!("Invalid YAML config: {}", e))
}

/// Read descriptor files from a path (file or directory).
pub fn read_element_files(
    input_path: &Path,
    config: &AriaCheckConfig,
) -> Result<Vec<ElementFile>, String> {
    if !input_path.exists() {
        return Err(format!("Path does not exist: {}", input_path.display()));
    }

    if input_path.is_file() {
        return Ok(vec![read_element_file(input_path)?]);
    }

    if input_path.is_dir() {
        let patterns = match config.sources {
            Some(ref s) if !s.is_empty() => s.clone(),
            _ => vec![
                "**/*.elements.json".to_string(),
                "**/*.elements.yaml".to_string(),
                "**/*.elements.yml".to_string(),
            ],
        };
        let mut files = Vec::new();
        for path in glob_paths(input_path, &patterns)? {
            files.push(read_element_file(&path)?);
        }
        return Ok(files);
    }

    Err(format!(
        "Path is neither a file nor a directory: {}",
        input_path.display()
    ))
}

fn glob_paths(base_dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, String> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let full_pattern = base_dir.join(pattern);
        let pattern_str = full_pattern.to_string_lossy().replace('\\', "/");
        let entries = glob::glob(&pattern_str)
            .map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))?;

        for entry in entries {
            match entry {
                Ok(path) => {
                    if path.is_file() && !paths.contains(&path) {
                        paths.push(path);
                    }
                }
                Err(e) => return Err(format!("Glob error: {}", e)),
            }
        }
    }

    paths.sort();
    Ok(paths)
}

/// Parse one descriptor file: a list of elements, or a single element.
fn read_element_file(path: &Path) -> Result<ElementFile, String> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Document {
        Many(Vec<ElementDescriptor>),
        One(ElementDescriptor),
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let is_yaml = path
        .extension()
        .is_some_and(|e| e == "yaml" || e == "yml");
    let document: Document = if is_yaml {
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Invalid YAML in {}: {}", path.display(), e))?
    } else {
        serde_json::from_str(&content)
            .map_err(|e| format!("Invalid JSON in {}: {}", path.display(), e))?
    };

    let elements = match document {
        Document::Many(v) => v,
        Document::One(e) => vec![e],
    };

    Ok(ElementFile {
        path: path.to_string_lossy().to_string(),
        elements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config: AriaCheckConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.extra_attributes.is_empty());
        assert!(config.sources.is_none());
    }

    #[test]
    fn config_rejects_bad_extra() {
        let config: AriaCheckConfig =
            serde_yaml::from_str("extra_attributes:\n  - data-foo\n").unwrap();
        let err = config.known_attributes().unwrap_err();
        assert!(err.contains("aria-<word>"), "{err}");
    }

    #[test]
    fn missing_path_is_error() {
        let err = read_element_files(
            Path::new("definitely/not/here.elements.json"),
            &AriaCheckConfig::default(),
        )
        .err()
        .unwrap();
        assert!(err.contains("Path does not exist"));
    }
}
