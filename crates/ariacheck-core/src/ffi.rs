//! FFI-oriented JSON API for cross-language bindings.
//!
//! All functions take string inputs and return JSON strings,
//! minimizing the FFI surface area.

use serde::{Deserialize, Serialize};

use crate::catalogs::KnownAttributeSet;
use crate::sink::CollectingSink;
use crate::types::*;
use crate::validator::AttributeNameValidator;

// ---------------------------------------------------------------------------
// Input / result types
// ---------------------------------------------------------------------------

/// Either one element or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ElementsInput {
    Many(Vec<ElementDescriptor>),
    One(ElementDescriptor),
}

#[derive(Debug, Serialize)]
pub struct FfiResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub diagnostics: Vec<DiagnosticEvent>,
}

fn failure(message: String) -> String {
    serde_json::to_string(&FfiResult::<()> {
        success: false,
        data: None,
        error: Some(message),
    })
    .unwrap_or_else(|_| r#"{"success":false}"#.to_string())
}

fn success<T: Serialize>(data: T) -> String {
    serde_json::to_string(&FfiResult {
        success: true,
        data: Some(data),
        error: None,
    })
    .unwrap_or_else(|e| failure(format!("JSON serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// Public FFI functions
// ---------------------------------------------------------------------------

/// Validate element descriptors and return the diagnostics as JSON.
///
/// Input: a JSON object `{ "tag": "...", "props": {...}, "locator": "..." }`
/// or an array of them. All elements share one warned-name cache, in order.
/// Output: `{ success, data?: { diagnostics: [...] }, error? }`
pub fn validate_to_json(elements_json: &str) -> String {
    let elements = match serde_json::from_str::<ElementsInput>(elements_json) {
        Ok(ElementsInput::Many(v)) => v,
        Ok(ElementsInput::One(e)) => vec![e],
        Err(e) => return failure(format!("Invalid input JSON: {e}")),
    };

    let result = std::panic::catch_unwind(|| {
        let validator = AttributeNameValidator::new(CollectingSink::new());
        for element in &elements {
            validator.validate_element(element);
        }
        validator.sink().take()
    });

    match result {
        Ok(diagnostics) => success(ValidateOutput { diagnostics }),
        Err(_) => failure("Internal validator panic".to_string()),
    }
}

/// The built-in vocabulary as a sorted JSON array.
pub fn known_attributes_json() -> String {
    let known = KnownAttributeSet::builtin();
    let names: Vec<&str> = known.iter().collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}
