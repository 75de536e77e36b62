/// Model selection over a fixed, ordered, non-empty catalog
///
/// The selection is stored as an index into the catalog, so the current
/// selection is a catalog member by construction. The catalog itself is
/// injected configuration and never changes after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPicker {
    catalog: Vec<String>,
    selected: usize,
}

impl ModelPicker {
    /// Create a picker with the catalog's first entry selected
    ///
    /// The catalog must be non-empty; config validation enforces this before
    /// any picker is built.
    pub fn new(catalog: Vec<String>) -> Self {
        debug_assert!(!catalog.is_empty(), "model catalog must be non-empty");
        Self {
            catalog,
            selected: 0,
        }
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// The currently selected model identifier
    pub fn selected(&self) -> &str {
        &self.catalog[self.selected]
    }

    /// Replace the selection with the given catalog member
    ///
    /// Returns true if `id` is in the catalog. A non-member leaves the
    /// selection unchanged.
    pub fn select(&mut self, id: &str) -> bool {
        match self.catalog.iter().position(|model| model == id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => {
                log::warn!("Ignoring selection of unknown model {id:?}");
                false
            }
        }
    }

    /// Advance to the next catalog entry, wrapping at the end
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.catalog.len();
    }

    /// Step back to the previous catalog entry, wrapping at the start
    pub fn select_previous(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.catalog.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_picker() -> ModelPicker {
        ModelPicker::new(vec![
            "GPT 4.1 mini".to_string(),
            "GPT 4.1".to_string(),
            "GPT-4o".to_string(),
        ])
    }

    #[test]
    fn test_initial_selection_is_first_entry() {
        let picker = test_picker();
        assert_eq!(picker.selected(), "GPT 4.1 mini");
    }

    #[test]
    fn test_select_member_replaces_selection() {
        let mut picker = test_picker();

        assert!(picker.select("GPT-4o"));
        assert_eq!(picker.selected(), "GPT-4o");
    }

    #[test]
    fn test_select_non_member_leaves_selection_unchanged() {
        let mut picker = test_picker();
        picker.select("GPT 4.1");

        assert!(!picker.select("claude-opus"));
        assert_eq!(picker.selected(), "GPT 4.1");
    }

    #[test]
    fn test_select_next_wraps() {
        let mut picker = test_picker();

        picker.select_next();
        assert_eq!(picker.selected(), "GPT 4.1");
        picker.select_next();
        assert_eq!(picker.selected(), "GPT-4o");
        picker.select_next();
        assert_eq!(picker.selected(), "GPT 4.1 mini");
    }

    #[test]
    fn test_select_previous_wraps() {
        let mut picker = test_picker();

        picker.select_previous();
        assert_eq!(picker.selected(), "GPT-4o");
        picker.select_previous();
        assert_eq!(picker.selected(), "GPT 4.1");
    }

    #[test]
    fn test_single_entry_catalog_cycles_to_itself() {
        let mut picker = ModelPicker::new(vec!["only".to_string()]);

        picker.select_next();
        assert_eq!(picker.selected(), "only");
        picker.select_previous();
        assert_eq!(picker.selected(), "only");
    }

    // Catalog closure: any sequence of selections (members, non-members, and
    // cycling) always leaves the selection a catalog member.
    proptest! {
        #[test]
        fn prop_selection_is_always_a_catalog_member(
            actions in prop::collection::vec(
                prop_oneof![
                    prop::sample::select(vec!["GPT 4.1 mini", "GPT 4.1", "GPT-4o"]),
                    Just("not-a-model"),
                    Just("<next>"),
                    Just("<previous>"),
                ],
                0..30,
            ),
        ) {
            let mut picker = test_picker();
            for action in actions {
                match action {
                    "<next>" => picker.select_next(),
                    "<previous>" => picker.select_previous(),
                    id => {
                        picker.select(id);
                    }
                }
                prop_assert!(picker.catalog().contains(&picker.selected().to_string()));
            }
        }
    }
}
