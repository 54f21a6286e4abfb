//! ARIA naming conventions.
//!
//! Each convention recognizes one spelling style of accessibility attribute
//! and decides what, if anything, is wrong with a given name. The validator
//! walks [`builtin_conventions`] in order and stops at the first convention
//! that does not return [`ConventionOutcome::Unmatched`].

use std::sync::LazyLock;

use regex::Regex;

use crate::catalogs::KnownAttributeSet;
use crate::types::DiagnosticKind;

/// XML/HTML attribute-name start characters.
const ATTRIBUTE_NAME_START_CHAR: &str = r"A-Z_a-z:\x{C0}-\x{D6}\x{D8}-\x{F6}\x{F8}-\x{2FF}\x{370}-\x{37D}\x{37F}-\x{1FFF}\x{200C}-\x{200D}\x{2070}-\x{218F}\x{2C00}-\x{2FEF}\x{3001}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFFD}";

/// Characters allowed after the first one.
const ATTRIBUTE_NAME_EXTRA_CHAR: &str = r"\-.0-9\x{B7}\x{300}-\x{36F}\x{203F}-\x{2040}";

/// `aria` + uppercase letter + name chars, e.g. `ariaHidden`.
static RE_ARIA_CAMEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^aria[A-Z][{ATTRIBUTE_NAME_START_CHAR}{ATTRIBUTE_NAME_EXTRA_CHAR}]*$"
    ))
    .unwrap()
});

/// `aria-` + name chars, e.g. `aria-hidden`.
static RE_ARIA_HYPHEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^aria-[{ATTRIBUTE_NAME_START_CHAR}{ATTRIBUTE_NAME_EXTRA_CHAR}]*$"
    ))
    .unwrap()
});

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ConventionOutcome {
    /// The name does not use this convention; try the next one.
    Unmatched,
    /// Exact canonical spelling.
    Valid,
    /// Not an ARIA attribute under any spelling; report immediately.
    Invalid { message: String },
    /// A known attribute misspelled; report immediately with the fix.
    Suggestion {
        kind: DiagnosticKind,
        canonical: String,
        message: String,
    },
    /// Unknown name; collected into the element's batched report.
    DeferredToBatch,
}

/// One naming convention for accessibility attributes.
pub trait Convention: Send + Sync {
    /// Unique identifier (e.g., "camel-case").
    fn id(&self) -> &str;

    fn evaluate(&self, name: &str, known: &KnownAttributeSet) -> ConventionOutcome;
}

/// The conventions in precedence order: camel-case before hyphenated.
pub fn builtin_conventions() -> Vec<Box<dyn Convention>> {
    vec![Box::new(CamelCaseConvention), Box::new(HyphenatedConvention)]
}

// ---------------------------------------------------------------------------
// Camel case
// ---------------------------------------------------------------------------

pub struct CamelCaseConvention;

impl Convention for CamelCaseConvention {
    fn id(&self) -> &str {
        "camel-case"
    }

    fn evaluate(&self, name: &str, known: &KnownAttributeSet) -> ConventionOutcome {
        if !RE_ARIA_CAMEL.is_match(name) {
            return ConventionOutcome::Unmatched;
        }

        let canonical = hyphenate(name);
        if !known.contains(&canonical) {
            return ConventionOutcome::Invalid {
                message: format!(
                    "Invalid ARIA attribute `{name}`. ARIA attributes follow the pattern aria-* and must be lowercase."
                ),
            };
        }
        if canonical != name {
            return ConventionOutcome::Suggestion {
                kind: DiagnosticKind::CamelCaseSuggestion,
                message: format!("Invalid ARIA attribute `{name}`. Did you mean `{canonical}`?"),
                canonical,
            };
        }
        ConventionOutcome::Valid
    }
}

/// `ariaFooBar` -> `aria-foobar`.
fn hyphenate(name: &str) -> String {
    // The camel pattern guarantees an ASCII `aria` prefix.
    format!("aria-{}", name[4..].to_lowercase())
}

// ---------------------------------------------------------------------------
// Hyphenated
// ---------------------------------------------------------------------------

pub struct HyphenatedConvention;

impl Convention for HyphenatedConvention {
    fn id(&self) -> &str {
        "hyphenated"
    }

    fn evaluate(&self, name: &str, known: &KnownAttributeSet) -> ConventionOutcome {
        if !RE_ARIA_HYPHEN.is_match(name) {
            return ConventionOutcome::Unmatched;
        }

        let lower = name.to_lowercase();
        if !known.contains(&lower) {
            return ConventionOutcome::DeferredToBatch;
        }
        if lower != name {
            return ConventionOutcome::Suggestion {
                kind: DiagnosticKind::CaseSuggestion,
                message: format!("Unknown ARIA attribute `{name}`. Did you mean `{lower}`?"),
                canonical: lower,
            };
        }
        ConventionOutcome::Valid
    }
}
