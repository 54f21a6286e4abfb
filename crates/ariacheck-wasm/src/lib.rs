//! ariacheck WASM bindings.
//!
//! Provides JavaScript-callable functions via wasm-bindgen for renderers
//! running in the browser. The warned-name cache lives for the lifetime of
//! the module instance (one per thread).

use ariacheck_core::{
    known_attributes_json, AttributeNameValidator, CollectingSink, Locator, Properties,
};
use wasm_bindgen::prelude::*;

thread_local! {
    static VALIDATOR: AttributeNameValidator<CollectingSink> =
        AttributeNameValidator::new(CollectingSink::new());
}

/// Validate the attribute names of one element.
///
/// @param tag - Element tag name
/// @param props_json - JSON object of the element's properties
/// @param locator - Optional component stack used for the diagnostic addendum
/// @returns JSON array of diagnostics (empty when nothing is wrong or the
///   props are not a JSON object)
#[wasm_bindgen(js_name = "validate")]
pub fn wasm_validate(tag: &str, props_json: &str, locator: Option<String>) -> String {
    let props: Properties = match serde_json::from_str(props_json) {
        Ok(p) => p,
        Err(_) => return "[]".to_string(),
    };
    let locator = locator.map(Locator::new);

    let events = VALIDATOR.with(|v| {
        v.validate(tag, &props, locator.as_ref());
        v.sink().take()
    });
    serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
}

/// Forget every name reported so far.
#[wasm_bindgen(js_name = "reset")]
pub fn wasm_reset() {
    VALIDATOR.with(|v| v.reset());
}

/// The known ARIA attribute names as a sorted JSON array.
#[wasm_bindgen(js_name = "knownAttributes")]
pub fn wasm_known_attributes() -> String {
    known_attributes_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_dedupes_per_thread() {
        wasm_reset();
        let first = wasm_validate("div", r#"{ "aria-foo": 1 }"#, Some("App".into()));
        let second = wasm_validate("div", r#"{ "aria-foo": 1 }"#, None);

        let first: serde_json::Value = serde_json::from_str(&first).unwrap();
        assert_eq!(first.as_array().unwrap().len(), 1);
        assert_eq!(first[0]["addendum"], "\n    in App");
        assert_eq!(second, "[]");
    }

    #[test]
    fn malformed_props_are_ignored() {
        assert_eq!(wasm_validate("div", "not json", None), "[]");
        assert_eq!(wasm_validate("div", "[1, 2]", None), "[]");
    }

    #[test]
    fn reset_rewarns() {
        wasm_reset();
        let a = wasm_validate("div", r#"{ "ariaHidden": true }"#, None);
        wasm_reset();
        let b = wasm_validate("div", r#"{ "ariaHidden": true }"#, None);
        assert_eq!(a, b);
        assert_ne!(a, "[]");
    }
}
