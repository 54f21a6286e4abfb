use std::collections::HashSet;

/// Names already reported, keyed by the raw authored spelling.
///
/// Grows monotonically; only [`WarnedCache::clear`] shrinks it.
#[derive(Debug, Clone, Default)]
pub struct WarnedCache {
    names: HashSet<String>,
}

impl WarnedCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_warned(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn mark(&mut self, name: &str) {
        if !self.names.contains(name) {
            self.names.insert(name.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}
