use serde::{Deserialize, Serialize};
use std::fmt;

/// Property mapping of an element, keyed by attribute name as authored.
///
/// Insertion order is preserved (`serde_json/preserve_order`), so batched
/// reports list names in the order they were written.
pub type Properties = serde_json::Map<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Locator
// ---------------------------------------------------------------------------

/// Opaque "where did this happen" token supplied by the caller.
///
/// The validator never inspects it; it is handed to the sink, which turns it
/// into an addendum string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(pub String);

impl Locator {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Element descriptor
// ---------------------------------------------------------------------------

/// One element as the renderer is about to mount or update it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub tag: String,
    #[serde(default)]
    pub props: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locator: Option<Locator>,
}

// ---------------------------------------------------------------------------
// Diagnostic event
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Camel-cased name with no known hyphenated counterpart.
    InvalidAttribute,
    /// Camel-cased name whose hyphenated form is known.
    CamelCaseSuggestion,
    /// Hyphenated name that is known once lowercased.
    CaseSuggestion,
    /// Batched report of hyphenated names that are not known at all.
    UnknownAttributes,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidAttribute => "invalid-attribute",
            DiagnosticKind::CamelCaseSuggestion => "camel-case-suggestion",
            DiagnosticKind::CaseSuggestion => "case-suggestion",
            DiagnosticKind::UnknownAttributes => "unknown-attributes",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidAttribute => {
                "ARIA attributes follow the pattern aria-* and must be lowercase"
            }
            DiagnosticKind::CamelCaseSuggestion => {
                "Camel-cased ARIA attribute should use its hyphenated spelling"
            }
            DiagnosticKind::CaseSuggestion => "ARIA attribute names must be lowercase",
            DiagnosticKind::UnknownAttributes => "Attribute is not a known ARIA state or property",
        }
    }

    pub const ALL: [DiagnosticKind; 4] = [
        DiagnosticKind::InvalidAttribute,
        DiagnosticKind::CamelCaseSuggestion,
        DiagnosticKind::CaseSuggestion,
        DiagnosticKind::UnknownAttributes,
    ];
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A developer-facing advisory message. Carries no severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticEvent {
    pub kind: DiagnosticKind,
    /// Attribute names as authored that this event is about.
    pub attributes: Vec<String>,
    pub tag: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addendum: Option<String>,
}

impl DiagnosticEvent {
    /// Message followed by the addendum, as it would appear on a console.
    pub fn render(&self) -> String {
        match &self.addendum {
            Some(addendum) => format!("{}{}", self.message, addendum),
            None => self.message.clone(),
        }
    }
}
