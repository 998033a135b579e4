//! Documents tab: create a document or fetch one by id.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::Component;
use crate::tui::action::{Action, FlowRequest};
use crate::tui::render::DocumentView;
use crate::tui::state::{AppState, Phase};
use crate::tui::widgets::input::InputField;

const FIELD_COUNT: usize = 3;

pub struct DocumentsPanel {
    id: InputField,
    title: InputField,
    text: InputField,
    focus: usize,
    editing: bool,
}

impl DocumentsPanel {
    pub fn new() -> Self {
        Self {
            id: InputField::new("Document ID"),
            title: InputField::new("Title"),
            text: InputField::new("Text"),
            focus: 0,
            editing: false,
        }
    }

    fn field_mut(&mut self, index: usize) -> &mut InputField {
        match index {
            0 => &mut self.id,
            1 => &mut self.title,
            _ => &mut self.text,
        }
    }

    fn create_request(&self) -> FlowRequest {
        FlowRequest::CreateDocument {
            id: self.id.value().to_string(),
            title: self.title.value().to_string(),
            text: self.text.value().to_string(),
        }
    }

    fn get_request(&self) -> FlowRequest {
        FlowRequest::GetDocument {
            id: self.id.value().to_string(),
        }
    }
}

impl Component for DocumentsPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if self.editing {
            match key.code {
                KeyCode::Esc => {
                    self.editing = false;
                    Some(Action::None)
                }
                KeyCode::Enter => {
                    self.editing = false;
                    Some(Action::Submit(self.create_request()))
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
                KeyCode::Char('c') | KeyCode::Enter => Some(Action::Submit(self.create_request())),
                KeyCode::Char('g') => Some(Action::Submit(self.get_request())),
                _ => None,
            }
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        self.id
            .render(frame, chunks[0], "Document ID", self.editing && self.focus == 0);
        self.title
            .render(frame, chunks[1], "Title", self.editing && self.focus == 1);
        self.text
            .render(frame, chunks[2], "Text", self.editing && self.focus == 2);

        let hint = if self.editing {
            "Tab: Next field  Enter: Create  Esc: Done"
        } else {
            "e: Edit fields  c: Create  g: Get by ID"
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            chunks[3],
        );

        let block = Block::default()
            .title(" Document ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let flow = &state.flows.document;
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
                let Some(document) = flow.result.as_ref() else {
                    return;
                };
                let view = DocumentView::from(document);
                let lines = vec![
                    Line::from(Span::styled(
                        view.title,
                        Style::default().fg(Color::White),
                    )),
                    Line::from(Span::styled(
                        format!("ID: {}", view.id),
                        Style::default().fg(Color::Gray),
                    )),
                    Line::from(""),
                    Line::from(view.text),
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("Created: {}", view.created),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                frame.render_widget(
                    Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
                    chunks[4],
                );
            }
        }
    }
}
