use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{App, Focus};

impl App {
    /// Render the UI
    ///
    /// Also records the hit-test regions for this frame, so mouse dispatch
    /// always matches what is actually on screen.
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        // Split the screen: greeting hero, suggestion list, composer card
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(7),
        ])
        .split(frame.area());

        self.render_hero(frame, layout[0]);
        self.render_suggestions(frame, layout[1]);
        self.render_composer(frame, layout[2]);
    }

    /// Render the greeting panel (top)
    fn render_hero(&self, frame: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(Span::styled(
                self.greeting.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.tagline.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(text), area);
    }

    /// Render the suggested prompt list (middle)
    fn render_suggestions(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::SuggestionList;

        // Set border color based on focus
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" ✨ Ask me anything ")
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);

        let highlight = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let items: Vec<ListItem> = self
            .suggestions
            .items()
            .iter()
            .map(|item| ListItem::new(item.as_str()))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("› ");

        let mut state = ListState::default();
        state.select(self.suggestions.cursor());
        frame.render_stateful_widget(list, area, &mut state);

        // One clickable row per visible item, honoring the list's scroll
        // offset so the recorded catalog indices match what is on screen
        let offset = state.offset();
        let visible = self
            .suggestions
            .len()
            .saturating_sub(offset)
            .min(inner.height as usize);
        for row in 0..visible {
            self.regions.record_suggestion_item(
                offset + row,
                Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
            );
        }
    }

    /// Render the composer card (bottom): prompt editor, chips, model picker
    fn render_composer(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(inner);
        self.render_prompt_editor(frame, rows[0]);
        self.render_footer(frame, rows[1]);
    }

    /// Render the prompt editor
    fn render_prompt_editor(&mut self, frame: &mut Frame, area: Rect) {
        // Set border color based on focus
        let border_color = if self.focus == Focus::PromptEditor {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.editor.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.editor.textarea, area);
        self.regions.set_prompt_editor(area);
    }

    /// Render the footer row: filter chips on the left, model on the right
    fn render_footer(&mut self, frame: &mut Frame, area: Rect) {
        let chips: Vec<(String, bool)> = self
            .composer
            .filters()
            .iter()
            .map(|filter| (filter.label.clone(), filter.active))
            .collect();

        let mut x = area.x;
        for (index, (label, active)) in chips.into_iter().enumerate() {
            let text = format!(" {label} ");
            let width = text.as_str().width() as u16;
            let chip_area = Rect::new(x, area.y, width, 1).intersection(area);
            if chip_area.width == 0 {
                break;
            }

            let mut style = if active {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray).bg(Color::DarkGray)
            };
            if self.focus == Focus::FilterChips && self.chip_cursor == index {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }

            frame.render_widget(Paragraph::new(Span::styled(text, style)), chip_area);
            self.regions.record_filter_chip(chip_area);
            x += width + 1;
        }

        let label = format!("{} ▾", self.composer.model());
        let width = (label.as_str().width() as u16).min(area.width);
        let model_area =
            Rect::new(area.right().saturating_sub(width), area.y, width, 1).intersection(area);
        let style = if self.focus == Focus::ModelSelector {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(Paragraph::new(Span::styled(label, style)), model_area);
        self.regions.set_model_selector(model_area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
