//! Health tab: one-key service check.
//!
//! This flow never shows a bare error: a failed check settles as a
//! synthetic degraded report with environment `"error"`, so rendering only
//! has idle/pending/report states.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Component;
use crate::tui::action::{Action, FlowRequest};
use crate::tui::render::{HealthView, Probe};
use crate::tui::state::{AppState, Phase};

pub struct HealthPanel;

impl HealthPanel {
    pub fn new() -> Self {
        Self
    }
}

fn probe_color(probe: Probe) -> Color {
    match probe {
        Probe::Up => Color::Green,
        Probe::Down => Color::Red,
        Probe::Unknown => Color::DarkGray,
    }
}

impl Component for HealthPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Some(Action::Submit(FlowRequest::Health)),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .title(" Health ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let flow = &state.flows.health;
        match flow.phase {
            Phase::Idle => {
                let hint = Paragraph::new("Press Enter to check health")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
                frame.render_widget(hint, area);
            }
            Phase::Pending => {
                let spinner = state.spinner_char();
                let loading = Paragraph::new(format!("{spinner} Checking..."))
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
                frame.render_widget(loading, area);
            }
            Phase::Failed => {
                // Health failures settle as degraded reports, so this arm
                // only fires if that rule ever changes.
                let message = flow.error.as_deref().unwrap_or("unknown failure");
                let error = Paragraph::new(message.to_string())
                    .style(Style::default().fg(Color::Red))
                    .block(block);
                frame.render_widget(error, area);
            }
            Phase::Succeeded => {
                let Some(status) = flow.result.as_ref() else {
                    return;
                };
                let view = HealthView::from(status);
                let environment_color = if view.environment == "error" {
                    Color::Red
                } else {
                    Color::White
                };
                let lines = vec![
                    Line::from(vec![
                        Span::styled("Environment  ", Style::default().fg(Color::Gray)),
                        Span::styled(view.environment, Style::default().fg(environment_color)),
                    ]),
                    Line::from(vec![
                        Span::styled("Database     ", Style::default().fg(Color::Gray)),
                        Span::styled(
                            view.database_label,
                            Style::default().fg(probe_color(view.database)),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled("LLM          ", Style::default().fg(Color::Gray)),
                        Span::styled(view.llm_label, Style::default().fg(probe_color(view.llm))),
                    ]),
                    Line::from(vec![
                        Span::styled("Timestamp    ", Style::default().fg(Color::Gray)),
                        Span::styled(view.timestamp, Style::default().fg(Color::Gray)),
                    ]),
                ];
                frame.render_widget(Paragraph::new(lines).block(block), area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::tui::client::models::HealthStatus;
    use crate::tui::test_helpers::assert_buffer_contains;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_state() -> AppState {
        AppState::new("http://localhost:8000".into(), "default".into())
    }

    fn render(state: &AppState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let panel = HealthPanel::new();
        terminal
            .draw(|frame| panel.render(frame, frame.area(), state))
            .unwrap();
        terminal
    }

    #[test]
    fn enter_and_r_submit_the_check() {
        let mut panel = HealthPanel::new();
        assert_eq!(
            panel.handle_key_event(press(KeyCode::Enter)),
            Some(Action::Submit(FlowRequest::Health))
        );
        assert_eq!(
            panel.handle_key_event(press(KeyCode::Char('r'))),
            Some(Action::Submit(FlowRequest::Health))
        );
    }

    #[test]
    fn other_keys_bubble_up() {
        let mut panel = HealthPanel::new();
        assert_eq!(panel.handle_key_event(press(KeyCode::Char('q'))), None);
        assert_eq!(panel.handle_key_event(press(KeyCode::Char('2'))), None);
    }

    #[test]
    fn renders_idle_hint() {
        let state = make_state();
        let terminal = render(&state);
        assert_buffer_contains(&terminal, "Press Enter to check health");
    }

    #[test]
    fn renders_pending_spinner() {
        let mut state = make_state();
        state.flows.health.begin();
        let terminal = render(&state);
        assert_buffer_contains(&terminal, "Checking...");
    }

    #[test]
    fn renders_full_report() {
        let mut state = make_state();
        let token = state.flows.health.begin();
        state.flows.health.settle_ok(
            token,
            HealthStatus {
                environment: "local".into(),
                timestamp: String::new(),
                db_ok: Some(true),
                llm_ok: None,
            },
        );
        let terminal = render(&state);
        assert_buffer_contains(&terminal, "local");
        assert_buffer_contains(&terminal, "Connected");
        assert_buffer_contains(&terminal, "unknown");
    }

    #[test]
    fn renders_degraded_report() {
        let mut state = make_state();
        let token = state.flows.health.begin();
        state.flows.health.settle_ok(
            token,
            HealthStatus {
                environment: "error".into(),
                timestamp: "2024-01-01T00:00:00Z".into(),
                db_ok: None,
                llm_ok: None,
            },
        );
        let terminal = render(&state);
        assert_buffer_contains(&terminal, "error");
    }
}
