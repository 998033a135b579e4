//! Notary tab: structured summarization of a notarial document.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::Component;
use crate::tui::action::{Action, FlowRequest};
use crate::tui::client::models::Language;
use crate::tui::render::NotaryView;
use crate::tui::state::{AppState, Phase};
use crate::tui::widgets::input::InputField;

const FIELD_COUNT: usize = 2;

pub struct NotaryPanel {
    text: InputField,
    document_id: InputField,
    language: Language,
    focus: usize,
    editing: bool,
}

impl NotaryPanel {
    pub fn new() -> Self {
        Self {
            text: InputField::new("Document text"),
            document_id: InputField::new("Document ID (optional)"),
            language: Language::Nl,
            focus: 0,
            editing: false,
        }
    }

    fn field_mut(&mut self, index: usize) -> &mut InputField {
        match index {
            0 => &mut self.text,
            _ => &mut self.document_id,
        }
    }

    /// An empty document id is not sent at all; the language is always the
    /// currently selected one (`nl` unless toggled).
    fn request(&self) -> FlowRequest {
        let document_id = self.document_id.value().trim();
        FlowRequest::NotarySummarize {
            text: self.text.value().to_string(),
            document_id: if document_id.is_empty() {
                None
            } else {
                Some(document_id.to_string())
            },
            language: self.language,
        }
    }
}

impl Component for NotaryPanel {
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
                KeyCode::Char('l') => {
                    self.language = self.language.toggled();
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
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        self.text
            .render(frame, chunks[0], "Document text", self.editing && self.focus == 0);
        self.document_id.render(
            frame,
            chunks[1],
            "Document ID",
            self.editing && self.focus == 1,
        );

        frame.render_widget(
            Paragraph::new(format!("Language: {}", self.language.code()))
                .style(Style::default().fg(Color::Gray)),
            chunks[2],
        );

        let hint = if self.editing {
            "Tab: Next field  Enter: Summarize  Esc: Done"
        } else {
            "e: Edit fields  l: Toggle language  Enter: Summarize"
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            chunks[3],
        );

        let block = Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let flow = &state.flows.notary;
        match flow.phase {
            Phase::Idle => {}
            Phase::Pending => {
                let spinner = state.spinner_char();
                frame.render_widget(
                    Paragraph::new(format!("{spinner} Waiting for response..."))
                        .style(Style::default().fg(Color::DarkGray))
                        .block(block),
                    chunks[4],
                );
            }
            Phase::Failed => {
                let message = flow.error.as_deref().unwrap_or_default();
                frame.render_widget(
                    Paragraph::new(message.to_string())
                        .style(Style::default().fg(Color::Red))
                        .wrap(Wrap { trim: false })
                        .block(block),
                    chunks[4],
                );
            }
            Phase::Succeeded => {
                let Some(response) = flow.result.as_ref() else {
                    return;
                };
                let view = NotaryView::from(response);
                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        view.title.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(format!("[{}]", view.badge), Style::default().fg(Color::Yellow)),
                ])];
                for section in &view.sections {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        section.heading,
                        Style::default().fg(Color::Gray),
                    )));
                    for item in &section.items {
                        lines.push(Line::from(format!("• {item}")));
                    }
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Summary",
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::from(view.raw_summary.clone()));

                frame.render_widget(
                    Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
                    chunks[4],
                );
            }
        }
    }
}
