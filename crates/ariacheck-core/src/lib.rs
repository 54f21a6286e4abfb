//! ARIA attribute name validation.
//!
//! Checks the accessibility attribute names an element is about to be
//! rendered with against the known WAI-ARIA vocabulary and reports each
//! distinct problem once per validator lifetime.

pub mod cache;
pub mod catalogs;
pub mod classifier;
pub mod conventions;
pub mod ffi;
pub mod sink;
pub mod types;
pub mod validator;

pub use cache::WarnedCache;
pub use catalogs::KnownAttributeSet;
pub use classifier::{CustomElementClassifier, StandardClassifier};
pub use conventions::{builtin_conventions, Convention, ConventionOutcome};
pub use ffi::{known_attributes_json, validate_to_json};
pub use sink::{CollectingSink, DiagnosticSink, LogSink};
pub use types::*;
pub use validator::{shared, validate_properties, AttributeNameValidator, ARIA_REFERENCE_URL};
