//! Layout module for tracking UI component regions
//!
//! The renderer records where each interactive component landed on screen;
//! `region_at()` then maps a click position back to the component. Mouse
//! dispatch stays a pure lookup with no knowledge of layout math.

use ratatui::layout::{Position, Rect};

/// Interactive screen regions a click can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SuggestionItem(usize),
    PromptEditor,
    FilterChip(usize),
    ModelSelector,
}

/// Screen rectangles recorded during the last render
///
/// Suggestion rows carry their catalog index, since the list may be
/// scrolled and the first visible row is not necessarily item 0.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    suggestion_items: Vec<(usize, Rect)>,
    prompt_editor: Rect,
    filter_chips: Vec<Rect>,
    model_selector: Rect,
}

impl LayoutRegions {
    /// Forget the previous frame's rectangles; called at the top of render
    pub fn clear(&mut self) {
        self.suggestion_items.clear();
        self.filter_chips.clear();
        self.prompt_editor = Rect::default();
        self.model_selector = Rect::default();
    }

    pub fn record_suggestion_item(&mut self, index: usize, area: Rect) {
        self.suggestion_items.push((index, area));
    }

    pub fn record_filter_chip(&mut self, area: Rect) {
        self.filter_chips.push(area);
    }

    pub fn set_prompt_editor(&mut self, area: Rect) {
        self.prompt_editor = area;
    }

    pub fn set_model_selector(&mut self, area: Rect) {
        self.model_selector = area;
    }

    pub fn suggestion_item_count(&self) -> usize {
        self.suggestion_items.len()
    }
}

/// Which component is at the given screen position, if any
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    let position = Position { x, y };

    for (index, area) in &regions.suggestion_items {
        if area.contains(position) {
            return Some(Region::SuggestionItem(*index));
        }
    }
    for (index, area) in regions.filter_chips.iter().enumerate() {
        if area.contains(position) {
            return Some(Region::FilterChip(index));
        }
    }
    if regions.prompt_editor.contains(position) {
        return Some(Region::PromptEditor);
    }
    if regions.model_selector.contains(position) {
        return Some(Region::ModelSelector);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_regions() -> LayoutRegions {
        let mut regions = LayoutRegions::default();
        regions.record_suggestion_item(0, Rect::new(2, 4, 40, 1));
        regions.record_suggestion_item(1, Rect::new(2, 5, 40, 1));
        regions.set_prompt_editor(Rect::new(2, 10, 40, 3));
        regions.record_filter_chip(Rect::new(2, 14, 12, 1));
        regions.record_filter_chip(Rect::new(15, 14, 8, 1));
        regions.set_model_selector(Rect::new(30, 14, 14, 1));
        regions
    }

    #[test]
    fn test_region_at_suggestion_items() {
        let regions = test_regions();

        assert_eq!(region_at(&regions, 2, 4), Some(Region::SuggestionItem(0)));
        assert_eq!(region_at(&regions, 41, 5), Some(Region::SuggestionItem(1)));
    }

    #[test]
    fn test_region_at_composer_components() {
        let regions = test_regions();

        assert_eq!(region_at(&regions, 10, 11), Some(Region::PromptEditor));
        assert_eq!(region_at(&regions, 3, 14), Some(Region::FilterChip(0)));
        assert_eq!(region_at(&regions, 16, 14), Some(Region::FilterChip(1)));
        assert_eq!(region_at(&regions, 35, 14), Some(Region::ModelSelector));
    }

    #[test]
    fn test_scrolled_rows_keep_their_catalog_index() {
        let mut regions = LayoutRegions::default();
        regions.record_suggestion_item(3, Rect::new(2, 4, 40, 1));
        regions.record_suggestion_item(4, Rect::new(2, 5, 40, 1));

        assert_eq!(region_at(&regions, 5, 4), Some(Region::SuggestionItem(3)));
        assert_eq!(region_at(&regions, 5, 5), Some(Region::SuggestionItem(4)));
    }

    #[test]
    fn test_region_at_empty_space_is_none() {
        let regions = test_regions();

        assert_eq!(region_at(&regions, 0, 0), None);
        assert_eq!(region_at(&regions, 60, 20), None);
    }

    #[test]
    fn test_clear_forgets_previous_frame() {
        let mut regions = test_regions();
        regions.clear();

        assert_eq!(region_at(&regions, 2, 4), None);
        assert_eq!(regions.suggestion_item_count(), 0);
    }

    #[test]
    fn test_default_regions_match_nothing() {
        let regions = LayoutRegions::default();
        assert_eq!(region_at(&regions, 0, 0), None);
    }
}
