use std::sync::{LazyLock, Mutex};

use crate::cache::WarnedCache;
use crate::catalogs::KnownAttributeSet;
use crate::classifier::{CustomElementClassifier, StandardClassifier};
#[cfg(feature = "dev-checks")]
use crate::conventions::ConventionOutcome;
use crate::conventions::{builtin_conventions, Convention};
use crate::sink::{DiagnosticSink, LogSink};
#[cfg(feature = "dev-checks")]
use crate::types::{DiagnosticEvent, DiagnosticKind};
use crate::types::{ElementDescriptor, Locator, Properties};

/// Where the batched report points readers for the list of valid attributes.
pub const ARIA_REFERENCE_URL: &str = "https://www.w3.org/TR/wai-aria-1.2/#state_prop_def";

static SHARED: LazyLock<AttributeNameValidator<LogSink>> =
    LazyLock::new(|| AttributeNameValidator::new(LogSink));

/// Process-wide validator reporting through the `log` facade.
pub fn shared() -> &'static AttributeNameValidator<LogSink> {
    &SHARED
}

/// Validate one element against the process-wide validator.
pub fn validate_properties(tag: &str, props: &Properties, locator: Option<&Locator>) {
    shared().validate(tag, props, locator);
}

/// Checks accessibility attribute names and reports each distinct problem once.
///
/// The warned-name cache lives as long as the validator. Every call to
/// [`validate`](Self::validate) holds the cache lock for the whole
/// check-and-mark sequence, so concurrent callers never report a name twice.
#[cfg_attr(not(feature = "dev-checks"), allow(dead_code))]
pub struct AttributeNameValidator<S, C = StandardClassifier> {
    sink: S,
    classifier: C,
    known: KnownAttributeSet,
    conventions: Vec<Box<dyn Convention>>,
    warned: Mutex<WarnedCache>,
}

impl<S: DiagnosticSink> AttributeNameValidator<S> {
    /// Validator with the built-in vocabulary and HTML custom element rules.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            classifier: StandardClassifier,
            known: KnownAttributeSet::builtin(),
            conventions: builtin_conventions(),
            warned: Mutex::new(WarnedCache::new()),
        }
    }
}

impl<S: DiagnosticSink, C: CustomElementClassifier> AttributeNameValidator<S, C> {
    /// Replace the vocabulary.
    pub fn with_known(mut self, known: KnownAttributeSet) -> Self {
        self.known = known;
        self
    }

    /// Replace the custom element classifier.
    pub fn with_classifier<C2: CustomElementClassifier>(
        self,
        classifier: C2,
    ) -> AttributeNameValidator<S, C2> {
        AttributeNameValidator {
            sink: self.sink,
            classifier,
            known: self.known,
            conventions: self.conventions,
            warned: self.warned,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn known(&self) -> &KnownAttributeSet {
        &self.known
    }

    /// Number of distinct names reported so far.
    pub fn warned_count(&self) -> usize {
        self.lock_warned().len()
    }

    /// Forget every name reported so far.
    pub fn reset(&self) {
        self.lock_warned().clear();
    }

    pub fn validate_element(&self, element: &ElementDescriptor) {
        self.validate(&element.tag, &element.props, element.locator.as_ref());
    }

    /// Check the attribute names of one element.
    ///
    /// Never fails and never touches `props`; the only effect is zero or more
    /// events on the sink.
    #[cfg(feature = "dev-checks")]
    pub fn validate(&self, tag: &str, props: &Properties, locator: Option<&Locator>) {
        if self.classifier.is_custom_element(tag, props) {
            log::debug!(target: "ariacheck", "skipping custom element <{tag}>");
            return;
        }

        let mut pending: Vec<(DiagnosticKind, Vec<String>, String)> = Vec::new();
        {
            let mut warned = self.lock_warned();
            let mut unknown: Vec<&str> = Vec::new();

            for name in props.keys() {
                if warned.is_warned(name) {
                    continue;
                }

                for convention in &self.conventions {
                    match convention.evaluate(name, &self.known) {
                        ConventionOutcome::Unmatched => continue,
                        ConventionOutcome::Valid => {}
                        ConventionOutcome::Invalid { message } => {
                            warned.mark(name);
                            pending.push((
                                DiagnosticKind::InvalidAttribute,
                                vec![name.clone()],
                                message,
                            ));
                        }
                        ConventionOutcome::Suggestion { kind, message, .. } => {
                            warned.mark(name);
                            pending.push((kind, vec![name.clone()], message));
                        }
                        ConventionOutcome::DeferredToBatch => unknown.push(name),
                    }
                    break;
                }
            }

            if !unknown.is_empty() {
                for name in &unknown {
                    warned.mark(name);
                }
                let message = unknown_attributes_message(&unknown, tag);
                pending.push((
                    DiagnosticKind::UnknownAttributes,
                    unknown.iter().map(|n| n.to_string()).collect(),
                    message,
                ));
            }
        }

        // Emit outside the lock so a sink may call back into the validator.
        for (kind, attributes, message) in pending {
            let addendum = locator
                .map(|l| self.sink.addendum(l))
                .filter(|a| !a.is_empty());
            self.sink.emit(DiagnosticEvent {
                kind,
                attributes,
                tag: tag.to_string(),
                message,
                addendum,
            });
        }
    }

    /// Compiled out: validation is a development aid only.
    #[cfg(not(feature = "dev-checks"))]
    #[inline(always)]
    pub fn validate(&self, _tag: &str, _props: &Properties, _locator: Option<&Locator>) {}

    fn lock_warned(&self) -> std::sync::MutexGuard<'_, WarnedCache> {
        self.warned.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg_attr(not(feature = "dev-checks"), allow(dead_code))]
fn unknown_attributes_message(names: &[&str], tag: &str) -> String {
    let list = names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() == 1 {
        format!("Invalid aria prop {list} on <{tag}> tag. For details, see {ARIA_REFERENCE_URL}")
    } else {
        format!("Invalid aria props {list} on <{tag}> tag. For details, see {ARIA_REFERENCE_URL}")
    }
}

#[cfg(all(test, feature = "dev-checks"))]
mod tests {
    use super::*;
    use crate::sink::CollectingSink;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn props(value: serde_json::Value) -> Properties {
        value.as_object().cloned().unwrap_or_default()
    }

    fn validator() -> AttributeNameValidator<CollectingSink> {
        AttributeNameValidator::new(CollectingSink::new())
    }

    #[test]
    fn canonical_names_are_silent() {
        let v = validator();
        v.validate(
            "div",
            &props(json!({ "aria-hidden": true, "aria-label": "Close" })),
            None,
        );
        assert!(v.sink().is_empty());
        assert_eq!(v.warned_count(), 0);
    }

    #[test]
    fn non_aria_names_are_ignored() {
        let v = validator();
        v.validate(
            "div",
            &props(json!({ "className": "x", "data-aria-foo": 1, "role": "button", "Aria-foo": 1 })),
            None,
        );
        assert!(v.sink().is_empty());
    }

    #[test]
    fn camel_unknown_reports_invalid() {
        let v = validator();
        v.validate("div", &props(json!({ "ariaFooBar": 1 })), None);
        let events = v.sink().take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, DiagnosticKind::InvalidAttribute);
        assert_eq!(events[0].attributes, vec!["ariaFooBar".to_string()]);
        assert!(events[0]
            .message
            .starts_with("Invalid ARIA attribute `ariaFooBar`."));
    }

    #[test]
    fn camel_known_suggests_hyphenated() {
        let v = validator();
        v.validate("div", &props(json!({ "ariaHidden": true })), None);
        let events = v.sink().take();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].message,
            "Invalid ARIA attribute `ariaHidden`. Did you mean `aria-hidden`?"
        );
    }

    #[test]
    fn wrong_case_suggests_lowercase() {
        let v = validator();
        v.validate("div", &props(json!({ "aria-Hidden": true })), None);
        let events = v.sink().take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, DiagnosticKind::CaseSuggestion);
        assert!(events[0].message.contains("Did you mean `aria-hidden`?"));
    }

    #[test]
    fn single_unknown_uses_singular_phrasing() {
        let v = validator();
        v.validate("span", &props(json!({ "aria-foo": 1 })), None);
        let events = v.sink().take();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].message,
            format!("Invalid aria prop `aria-foo` on <span> tag. For details, see {ARIA_REFERENCE_URL}")
        );
    }

    #[test]
    fn multiple_unknown_are_batched_in_authored_order() {
        let v = validator();
        v.validate("div", &props(json!({ "aria-foo": 1, "aria-bar": 2 })), None);
        let events = v.sink().take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, DiagnosticKind::UnknownAttributes);
        assert_eq!(
            events[0].attributes,
            vec!["aria-foo".to_string(), "aria-bar".to_string()]
        );
        assert!(events[0]
            .message
            .starts_with("Invalid aria props `aria-foo`, `aria-bar` on <div> tag."));

        v.validate("div", &props(json!({ "aria-foo": 1 })), None);
        v.validate("p", &props(json!({ "aria-bar": 1 })), None);
        assert!(v.sink().is_empty());
    }

    #[test]
    fn repeated_calls_warn_once() {
        let v = validator();
        let p = props(json!({ "ariaFooBar": 1, "aria-Label": "x" }));
        for _ in 0..1000 {
            v.validate("div", &p, None);
        }
        assert_eq!(v.sink().len(), 2);
        assert_eq!(v.warned_count(), 2);
    }

    #[test]
    fn custom_elements_are_skipped() {
        let v = validator();
        v.validate(
            "my-widget",
            &props(json!({ "ariaFooBar": 1, "aria-foo": 1, "aria-Hidden": true })),
            None,
        );
        assert!(v.sink().is_empty());
        assert_eq!(v.warned_count(), 0);
    }

    #[test]
    fn custom_classifier_is_used() {
        let v = validator().with_classifier(|tag: &str, _: &Properties| tag == "div");
        v.validate("div", &props(json!({ "aria-foo": 1 })), None);
        assert!(v.sink().is_empty());
        v.validate("my-widget", &props(json!({ "aria-foo": 1 })), None);
        assert_eq!(v.sink().len(), 1);
    }

    #[test]
    fn locator_becomes_addendum() {
        let v = validator();
        let locator = Locator::new("App > Dialog");
        v.validate("div", &props(json!({ "aria-foo": 1 })), Some(&locator));
        v.validate("div", &props(json!({ "ariaHidden": 1 })), Some(&Locator::new("")));
        let events = v.sink().take();
        assert_eq!(events[0].addendum.as_deref(), Some("\n    in App > Dialog"));
        assert_eq!(events[1].addendum, None);
    }

    #[test]
    fn reset_allows_rewarning() {
        let v = validator();
        let p = props(json!({ "aria-foo": 1 }));
        v.validate("div", &p, None);
        v.reset();
        v.validate("div", &p, None);
        assert_eq!(v.sink().len(), 2);
    }

    #[test]
    fn extra_vocabulary_is_respected() {
        let known = KnownAttributeSet::with_extra(["aria-widget"]).unwrap();
        let v = validator().with_known(known);
        v.validate("div", &props(json!({ "aria-widget": 1, "ariaWidget": 1 })), None);
        let events = v.sink().take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, DiagnosticKind::CamelCaseSuggestion);
    }

    #[test]
    fn props_are_not_mutated() {
        let v = validator();
        let p = props(json!({ "aria-foo": 1, "ariaHidden": true }));
        let before = p.clone();
        v.validate("div", &p, None);
        assert_eq!(p, before);
    }

    #[test]
    fn shared_validator_is_process_wide() {
        assert!(std::ptr::eq(shared(), shared()));
        validate_properties("div", &props(json!({ "aria-label": "ok" })), None);
    }
}
