use crate::types::Properties;

/// Hyphenated names reserved by SVG and MathML. These are standard elements.
static RESERVED_HYPHENATED_TAGS: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Decides whether an element is author-defined and therefore exempt.
pub trait CustomElementClassifier {
    fn is_custom_element(&self, tag: &str, props: &Properties) -> bool;
}

impl<F> CustomElementClassifier for F
where
    F: Fn(&str, &Properties) -> bool,
{
    fn is_custom_element(&self, tag: &str, props: &Properties) -> bool {
        self(tag, props)
    }
}

/// HTML custom element rules.
///
/// A tag with a hyphen is custom unless it is one of the reserved SVG/MathML
/// names. A tag without a hyphen is custom only when it is a customized
/// built-in, i.e. it carries a string `is` property.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardClassifier;

impl CustomElementClassifier for StandardClassifier {
    fn is_custom_element(&self, tag: &str, props: &Properties) -> bool {
        if !tag.contains('-') {
            return props.get("is").is_some_and(|v| v.is_string());
        }
        !RESERVED_HYPHENATED_TAGS.contains(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: serde_json::Value) -> Properties {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn hyphenated_tags_are_custom() {
        let c = StandardClassifier;
        assert!(c.is_custom_element("my-button", &Properties::new()));
        assert!(c.is_custom_element("x-foo-bar", &Properties::new()));
    }

    #[test]
    fn reserved_hyphenated_tags_are_standard() {
        let c = StandardClassifier;
        assert!(!c.is_custom_element("font-face", &Properties::new()));
        assert!(!c.is_custom_element("annotation-xml", &Properties::new()));
    }

    #[test]
    fn plain_tags_are_standard() {
        let c = StandardClassifier;
        assert!(!c.is_custom_element("div", &Properties::new()));
        assert!(!c.is_custom_element("button", &props(json!({ "is": 3 }))));
    }

    #[test]
    fn is_property_marks_customized_builtin() {
        let c = StandardClassifier;
        assert!(c.is_custom_element("button", &props(json!({ "is": "fancy-button" }))));
    }

    #[test]
    fn closures_classify() {
        let never = |_: &str, _: &Properties| false;
        assert!(!never.is_custom_element("my-button", &Properties::new()));
    }
}
