use std::path::Path;

use crate::reader::read_config;

/// List the accepted vocabulary, including config extras, one per line.
pub fn run_known(config_dir: &Path) -> Result<String, String> {
    let known = read_config(config_dir)?.known_attributes()?;
    if known.is_empty() {
        return Err("No known attributes (built without dev-checks)".to_string());
    }
    Ok(known.iter().collect::<Vec<_>>().join("\n"))
}
