use std::collections::HashSet;
use std::sync::Arc;
#[cfg(feature = "dev-checks")]
use std::sync::LazyLock;

/// WAI-ARIA 1.2 states and properties (plus the ARIA 1.3 drafts browsers ship).
#[cfg(feature = "dev-checks")]
static ARIA_ATTRIBUTES: &[&str] = &[
    // Global attributes
    "aria-current",
    "aria-description",
    "aria-details",
    "aria-disabled",
    "aria-hidden",
    "aria-invalid",
    "aria-keyshortcuts",
    "aria-label",
    "aria-roledescription",
    // Widget attributes
    "aria-autocomplete",
    "aria-checked",
    "aria-expanded",
    "aria-haspopup",
    "aria-level",
    "aria-modal",
    "aria-multiline",
    "aria-multiselectable",
    "aria-orientation",
    "aria-placeholder",
    "aria-pressed",
    "aria-readonly",
    "aria-required",
    "aria-selected",
    "aria-sort",
    "aria-valuemax",
    "aria-valuemin",
    "aria-valuenow",
    "aria-valuetext",
    // Live region attributes
    "aria-atomic",
    "aria-busy",
    "aria-live",
    "aria-relevant",
    // Drag-and-drop attributes (deprecated, still recognized)
    "aria-dropeffect",
    "aria-grabbed",
    // Relationship attributes
    "aria-activedescendant",
    "aria-colcount",
    "aria-colindex",
    "aria-colindextext",
    "aria-colspan",
    "aria-controls",
    "aria-describedby",
    "aria-errormessage",
    "aria-flowto",
    "aria-labelledby",
    "aria-owns",
    "aria-posinset",
    "aria-rowcount",
    "aria-rowindex",
    "aria-rowindextext",
    "aria-rowspan",
    "aria-setsize",
    // Braille
    "aria-braillelabel",
    "aria-brailleroledescription",
];

#[cfg(feature = "dev-checks")]
static BUILTIN: LazyLock<KnownAttributeSet> = LazyLock::new(|| KnownAttributeSet {
    names: Arc::new(ARIA_ATTRIBUTES.iter().map(|s| s.to_string()).collect()),
});

/// Immutable set of canonical (`aria-<word>`, lowercase) attribute names.
///
/// Clones share the underlying set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnownAttributeSet {
    names: Arc<HashSet<String>>,
}

impl KnownAttributeSet {
    /// The built-in ARIA vocabulary, shared with every other caller.
    ///
    /// Empty when `dev-checks` is disabled.
    pub fn builtin() -> Self {
        #[cfg(feature = "dev-checks")]
        {
            BUILTIN.clone()
        }
        #[cfg(not(feature = "dev-checks"))]
        {
            Self::default()
        }
    }

    /// Extend the built-in vocabulary with names from configuration.
    ///
    /// Names are lowercased. Anything not shaped like `aria-<word>` is rejected.
    pub fn with_extra<I, T>(extra: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut set = Self::builtin();
        for name in extra {
            let lower = name.as_ref().trim().to_lowercase();
            if !is_canonical_shape(&lower) {
                return Err(format!(
                    "Extra attribute \"{}\" must follow the pattern aria-<word>",
                    name.as_ref()
                ));
            }
            Arc::make_mut(&mut set.names).insert(lower);
        }
        Ok(set)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names, sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names.into_iter()
    }
}

/// `aria-` followed by at least one lowercase letter or digit, nothing else.
fn is_canonical_shape(name: &str) -> bool {
    match name.strip_prefix("aria-") {
        Some(word) => {
            !word.is_empty()
                && word
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        }
        None => false,
    }
}
