/// A single named toggle modifying how the composed request should be
/// interpreted downstream (e.g. "deep" for deep thinking, "search" for web
/// search).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub name: String,
    pub label: String,
    pub active: bool,
}

impl Filter {
    pub fn new(name: impl Into<String>, label: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            active,
        }
    }
}

/// Closed set of filter toggles
///
/// Keys are fixed at construction and never added or removed at runtime;
/// only the boolean values flip. Multiple filters may be active at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    entries: Vec<Filter>,
}

impl FilterSet {
    pub fn new(entries: Vec<Filter>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate filters in their fixed declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Filter> {
        self.entries.get(index)
    }

    /// Whether the named filter is active; false for unknown names
    pub fn is_active(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|filter| filter.name == name && filter.active)
    }

    /// Flip the named filter's value
    ///
    /// Returns true if the name was known. An unknown name is a no-op: the
    /// closed-set invariant means a key is never inserted here.
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.entries.iter_mut().find(|filter| filter.name == name) {
            Some(filter) => {
                filter.active = !filter.active;
                true
            }
            None => {
                log::warn!("Ignoring toggle for unknown filter {name:?}");
                false
            }
        }
    }

    /// Flip the filter at a chip position (binding-layer path)
    ///
    /// Same flip as `toggle`; an out-of-range index is a no-op.
    pub fn toggle_at(&mut self, index: usize) -> bool {
        match self.entries.get_mut(index) {
            Some(filter) => {
                filter.active = !filter.active;
                true
            }
            None => {
                log::debug!("Ignoring toggle for out-of-range chip index {index}");
                false
            }
        }
    }
}
