//! Top-of-screen tab bar.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use super::Component;
use crate::tui::action::Action;
use crate::tui::state::{AppState, Tab};

/// Tab bar listing the five flows with their keyboard shortcuts.
pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component for TabBar {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Option<Action> {
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line<'_>> = Tab::all()
            .iter()
            .map(|tab| Line::from(format!("[{}] {}", tab.shortcut(), tab.label())))
            .collect();

        let selected = Tab::all()
            .iter()
            .position(|t| *t == state.active_tab)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title(" AI Platform "))
            .select(selected)
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");

        frame.render_widget(tabs, area);
    }
}
