use std::path::Path;

use ariacheck_core::{AttributeNameValidator, CollectingSink, DiagnosticEvent, DiagnosticKind};
use serde::Serialize;

use crate::reader::{read_config, read_element_files};

/// A diagnostic tied back to the descriptor it came from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiagnostic {
    pub file: String,
    /// Zero-based position of the element within its file.
    pub element: usize,
    #[serde(flatten)]
    pub event: DiagnosticEvent,
}

pub struct CheckReport {
    pub output: String,
    pub diagnostic_count: usize,
}

pub fn run_check(input_path: &Path, format: &str) -> Result<CheckReport, String> {
    let config = read_config(input_path)?;
    let known = config.known_attributes()?;
    let files = read_element_files(input_path, &config)?;

    if files.is_empty() {
        return Err(format!(
            "No element files (*.elements.json, *.elements.yaml) found at: {}",
            input_path.display()
        ));
    }

    // One validator for the whole run: a name is reported once, like a render loop would.
    let validator = AttributeNameValidator::new(CollectingSink::new()).with_known(known);
    let mut results: Vec<FileDiagnostic> = Vec::new();
    for file in &files {
        for (index, element) in file.elements.iter().enumerate() {
            validator.validate_element(element);
            for event in validator.sink().take() {
                results.push(FileDiagnostic {
                    file: file.path.clone(),
                    element: index,
                    event,
                });
            }
        }
    }

    let element_count: usize = files.iter().map(|f| f.elements.len()).sum();
    let output = match format {
        "json" => serde_json::to_string_pretty(&serde_json::json!({
            "diagnostics": results,
            "summary": {
                "count": results.len(),
                "elements": element_count,
                "files": files.len(),
            }
        }))
        .map_err(|e| format!("JSON serialization error: {e}"))?,
        "sarif" => serde_json::to_string_pretty(&build_sarif(&results))
            .map_err(|e| format!("SARIF serialization error: {e}"))?,
        _ => render_human(&results, files.len()),
    };

    Ok(CheckReport {
        output,
        diagnostic_count: results.len(),
    })
}

fn render_human(results: &[FileDiagnostic], file_count: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    for d in results {
        lines.push(format!(
            "{}:{} <{}> warning[{}]: {}",
            d.file,
            d.element,
            d.event.tag,
            d.event.kind,
            d.event.render()
        ));
    }

    let count = results.len();
    let diagnostic_word = if count == 1 { "diagnostic" } else { "diagnostics" };
    let file_word = if file_count == 1 { "file" } else { "files" };
    lines.push(format!(
        "{count} {diagnostic_word} in {file_count} {file_word}."
    ));

    lines.join("\n")
}

fn build_sarif(results: &[FileDiagnostic]) -> serde_json::Value {
    let rule_descriptors: Vec<serde_json::Value> = DiagnosticKind::ALL
        .iter()
        .map(|kind| {
            serde_json::json!({
                "id": kind.as_str(),
                "shortDescription": { "text": kind.description() },
                "defaultConfiguration": { "level": "warning" }
            })
        })
        .collect();

    let sarif_results: Vec<serde_json::Value> = results
        .iter()
        .map(|d| {
            serde_json::json!({
                "ruleId": d.event.kind.as_str(),
                "level": "warning",
                "message": { "text": d.event.message },
                "locations": [{
                    "physicalLocation": {
                        "artifactLocation": { "uri": d.file }
                    },
                    "logicalLocations": [{
                        "name": d.event.tag,
                        "index": d.element,
                        "kind": "element"
                    }]
                }]
            })
        })
        .collect();

    serde_json::json!({
        "$schema": "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json",
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "ariacheck",
                    "version": env!("CARGO_PKG_VERSION"),
                    "rules": rule_descriptors
                }
            },
            "results": sarif_results
        }]
    })
}
