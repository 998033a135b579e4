//! Ask tab: contextual question answering.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::Component;
use crate::tui::action::{Action, FlowRequest};
use crate::tui::render::AnswerView;
use crate::tui::state::{AppState, Phase};
use crate::tui::widgets::input::InputField;

const FIELD_COUNT: usize = 2;

pub struct AskPanel {
    context: InputField,
    question: InputField,
    focus: usize,
    editing: bool,
}

impl AskPanel {
    pub fn new() -> Self {
        Self {
            context: InputField::new("Context"),
            question: InputField::new("Question"),
            focus: 0,
            editing: false,
        }
    }

    fn field_mut(&mut self, index: usize) -> &mut InputField {
        match index {
            0 => &mut self.context,
            _ => &mut self.question,
        }
    }

    fn request(&self) -> FlowRequest {
        FlowRequest::Ask {
            question: self.question.value().to_string(),
            context: self.context.value().to_string(),
        }
    }
}

impl Component for AskPanel {
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
                KeyCode::Tab | KeyCode::Down => {
                    self.focus = (self.focus + 1) % FIELD_COUNT;
                    Some(Action::None)
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
                    Some(Action::None)
                }
                _ => {
                    let focus = self.focus;
                    self.field_mut(focus).handle_key(key);
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
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        self.context
            .render(frame, chunks[0], "Context", self.editing && self.focus == 0);
        self.question
            .render(frame, chunks[1], "Question", self.editing && self.focus == 1);

        let hint = if self.editing {
            "Tab: Next field  Enter: Ask  Esc: Done"
        } else {
            "e: Edit fields  Enter: Ask"
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            chunks[2],
        );

        let block = Block::default()
            .title(" Answer ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let flow = &state.flows.ask;
        match flow.phase {
            Phase::Idle => {}
            Phase::Pending => {
                let spinner = state.spinner_char();
                frame.render_widget(
                    Paragraph::new(format!("{spinner} Waiting for response..."))
                        .style(Style::default().fg(Color::DarkGray))
                        .block(block),
                    chunks[3],
                );
            }
            Phase::Failed => {
                let message = flow.error.as_deref().unwrap_or_default();
                frame.render_widget(
                    Paragraph::new(message.to_string())
                        .style(Style::default().fg(Color::Red))
                        .wrap(Wrap { trim: false })
                        .block(block),
                    chunks[3],
                );
            }
            Phase::Succeeded => {
                let Some(response) = flow.result.as_ref() else {
                    return;
                };
                let view = AnswerView::from(response);
                let lines = vec![
                    Line::from(Span::styled(
                        format!("[{}]", view.badge),
                        Style::default().fg(Color::Yellow),
                    )),
                    Line::from(""),
                    Line::from(view.answer.clone()),
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("Model: {}", view.model),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                frame.render_widget(
                    Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
                    chunks[3],
                );
            }
        }
    }
}
