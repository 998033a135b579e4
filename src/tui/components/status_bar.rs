//! Bottom status bar.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use super::Component;
use crate::tui::action::Action;
use crate::tui::state::AppState;

/// Status bar showing the backend, tenant, pending indicator, and key hints.
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component for StatusBar {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Option<Action> {
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let left_text = if state.flows.is_pending(state.active_tab) {
            format!(
                "{} {url} | tenant: {tenant}",
                state.spinner_char(),
                url = state.url,
                tenant = state.tenant
            )
        } else {
            format!(
                "{url} | tenant: {tenant}",
                url = state.url,
                tenant = state.tenant
            )
        };
        let left = Paragraph::new(left_text).style(Style::default().fg(Color::Gray));
        frame.render_widget(left, chunks[0]);

        let right = Paragraph::new("q: Quit  Tab: Next  e: Edit  Enter: Submit")
            .style(Style::default().fg(Color::DarkGray))
            .right_aligned();
        frame.render_widget(right, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::tui::test_helpers::assert_buffer_contains;

    fn render_status_bar(state: &AppState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();
        let bar = StatusBar::new();
        terminal
            .draw(|frame| bar.render(frame, frame.area(), state))
            .unwrap();
        terminal
    }

    #[test]
    fn shows_backend_and_tenant() {
        let state = AppState::new("http://localhost:8000".into(), "acme".into());
        let terminal = render_status_bar(&state);
        assert_buffer_contains(&terminal, "http://localhost:8000");
        assert_buffer_contains(&terminal, "tenant: acme");
        assert_buffer_contains(&terminal, "q: Quit");
    }

    #[test]
    fn shows_spinner_while_active_flow_is_pending() {
        let mut state = AppState::new("http://localhost:8000".into(), "default".into());
        state.flows.health.begin();
        let terminal = render_status_bar(&state);
        assert_buffer_contains(&terminal, "| http://localhost:8000");
    }
}
