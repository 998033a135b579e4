//! Classify tab: label a piece of text against the fixed candidate set.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::Component;
use crate::tui::action::{Action, FlowRequest};
use crate::tui::render::ClassifyView;
use crate::tui::state::{AppState, Phase};
use crate::tui::widgets::input::InputField;

const BAR_WIDTH: u16 = 20;

pub struct ClassifyPanel {
    text: InputField,
    editing: bool,
}

impl ClassifyPanel {
    pub fn new() -> Self {
        Self {
            text: InputField::new("Text to classify"),
            editing: false,
        }
    }

    fn request(&self) -> FlowRequest {
        FlowRequest::Classify {
            text: self.text.value().to_string(),
        }
    }
}

/// Fixed-width confidence bar, e.g. `██████████░░░░░░░░░░`.
fn confidence_bar(percent: u16) -> String {
    let filled = (u32::from(percent) * u32::from(BAR_WIDTH) / 100) as u16;
    let mut bar = String::new();
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

impl Component for ClassifyPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if self.editing {
            match key.code {
                KeyCode::Esc => {
                    self.editing = false;
                    Some(Action::None)
                }
                KeyCode::Enter => {
                    self.editing = false;
                    Some(Action::Submit(self.request()))
                }
                _ => {
                    self.text.handle_key(key);
                    Some(Action::None)
                }
            }
        } else {
            match key.code {
                KeyCode::Char('e') => {
                    self.editing = true;
                    Some(Action::None)
                }
                KeyCode::Enter => Some(Action::Submit(self.request())),
                _ => None,
            }
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        self.text.render(frame, chunks[0], "Text", self.editing);

        let hint = if self.editing {
            "Enter: Classify  Esc: Done"
        } else {
            "e: Edit text  Enter: Classify"
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );

        let block = Block::default()
            .title(" Classification ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let flow = &state.flows.classify;
        match flow.phase {
            Phase::Idle => {}
            Phase::Pending => {
                let spinner = state.spinner_char();
                frame.render_widget(
                    Paragraph::new(format!("{spinner} Waiting for response..."))
                        .style(Style::default().fg(Color::DarkGray))
                        .block(block),
                    chunks[2],
                );
            }
            Phase::Failed => {
                let message = flow.error.as_deref().unwrap_or_default();
                frame.render_widget(
                    Paragraph::new(message.to_string())
                        .style(Style::default().fg(Color::Red))
                        .wrap(Wrap { trim: false })
                        .block(block),
                    chunks[2],
                );
            }
            Phase::Succeeded => {
                let Some(response) = flow.result.as_ref() else {
                    return;
                };
                let view = ClassifyView::from(response);
                let label_color = if view.is_error {
                    Color::Red
                } else {
                    Color::White
                };

                let mut lines = vec![
                    Line::from(Span::styled(
                        format!("[{}]", view.badge),
                        Style::default().fg(Color::Yellow),
                    )),
                    Line::from(Span::styled(
                        view.label.clone(),
                        Style::default()
                            .fg(label_color)
                            .add_modifier(Modifier::BOLD),
                    )),
                ];
                if view.show_bar {
                    lines.push(Line::from(format!(
                        "Confidence {:>3}%  {}",
                        view.percent,
                        confidence_bar(view.percent)
                    )));
                }
                lines.push(Line::from(Span::styled(
                    format!("Model: {}", view.model),
                    Style::default().fg(Color::DarkGray),
                )));

                frame.render_widget(Paragraph::new(lines).block(block), chunks[2]);
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
    use crate::tui::client::models::ClassifyResponse;
    use crate::tui::test_helpers::{assert_buffer_contains, assert_buffer_lacks};

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

    fn render(panel: &ClassifyPanel, state: &AppState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal
            .draw(|frame| panel.render(frame, frame.area(), state))
            .unwrap();
        terminal
    }

    fn classified(label: &str, confidence: f64, source: &str) -> ClassifyResponse {
        ClassifyResponse {
            label: label.into(),
            confidence,
            model: "llama3.2".into(),
            source: source.into(),
            metadata: None,
        }
    }

    #[test]
    fn enter_submits_typed_text() {
        let mut panel = ClassifyPanel::new();
        panel.handle_key_event(press(KeyCode::Char('e')));
        for c in "Urgent!".chars() {
            panel.handle_key_event(press(KeyCode::Char(c)));
        }
        let action = panel.handle_key_event(press(KeyCode::Enter));
        assert_eq!(
            action,
            Some(Action::Submit(FlowRequest::Classify {
                text: "Urgent!".into(),
            }))
        );
    }

    #[test]
    fn confidence_bar_proportions() {
        assert_eq!(confidence_bar(0), "░".repeat(20));
        assert_eq!(confidence_bar(100), "█".repeat(20));
        assert_eq!(confidence_bar(50), format!("{}{}", "█".repeat(10), "░".repeat(10)));
    }

    #[test]
    fn renders_label_badge_and_bar() {
        let mut state = make_state();
        let token = state.flows.classify.begin();
        state
            .flows
            .classify
            .settle_ok(token, classified("urgent", 0.9, "llm"));
        let terminal = render(&ClassifyPanel::new(), &state);
        assert_buffer_contains(&terminal, "urgent");
        assert_buffer_contains(&terminal, "[AI model]");
        assert_buffer_contains(&terminal, "Confidence  90%");
    }

    #[test]
    fn error_display_suppresses_the_bar() {
        let mut state = make_state();
        let token = state.flows.classify.begin();
        state
            .flows
            .classify
            .settle_ok(token, classified("error", 0.0, "fallback"));
        let terminal = render(&ClassifyPanel::new(), &state);
        assert_buffer_contains(&terminal, "error");
        assert_buffer_contains(&terminal, "[Fallback]");
        assert_buffer_lacks(&terminal, "Confidence");
    }

    #[test]
    fn renders_error_message_verbatim() {
        let mut state = make_state();
        let token = state.flows.classify.begin();
        state.flows.classify.settle_err(token, "LLM error".into());
        let terminal = render(&ClassifyPanel::new(), &state);
        assert_buffer_contains(&terminal, "LLM error");
    }
}
