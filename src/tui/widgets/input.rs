//! Single-line form field with cursor tracking.
//!
//! The field only edits text. Enter, Esc, Tab, and Up/Down are reported as
//! ignored so the owning panel can decide what submission and focus
//! movement mean.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// What the field did with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Text or cursor changed.
    Edited,
    /// Not an editing key; the panel should handle it.
    Ignored,
}

/// A labelled single-line input.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: String,
    cursor: usize,
    placeholder: String,
}

impl InputField {
    pub fn new(placeholder: &str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Byte offset of the character before the cursor.
    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Byte offset of the character after the cursor.
    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.value.len())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FieldEvent {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match c {
                        'a' => self.cursor = 0,
                        'e' => self.cursor = self.value.len(),
                        'u' => {
                            self.value.drain(..self.cursor);
                            self.cursor = 0;
                        }
                        'k' => self.value.truncate(self.cursor),
                        _ => return FieldEvent::Ignored,
                    }
                } else {
                    self.value.insert(self.cursor, c);
                    self.cursor += c.len_utf8();
                }
                FieldEvent::Edited
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.value.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                FieldEvent::Edited
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    let next = self.next_boundary();
                    self.value.drain(self.cursor..next);
                }
                FieldEvent::Edited
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor = self.prev_boundary();
                }
                FieldEvent::Edited
            }
            KeyCode::Right => {
                if self.cursor < self.value.len() {
                    self.cursor = self.next_boundary();
                }
                FieldEvent::Edited
            }
            KeyCode::Home => {
                self.cursor = 0;
                FieldEvent::Edited
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                FieldEvent::Edited
            }
            _ => FieldEvent::Ignored,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool) {
        let border = if focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let (text, style) = if self.value.is_empty() && !focused {
            (
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )
        } else if focused {
            let (before, after) = self.value.split_at(self.cursor);
            (
                format!("{before}\u{2588}{after}"),
                Style::default().fg(Color::White),
            )
        } else {
            (self.value.clone(), Style::default().fg(Color::Gray))
        };

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press_ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn with_value(value: &str) -> InputField {
        let mut field = InputField::new("");
        field.set_value(value);
        field
    }

    #[test]
    fn typing_appends() {
        let mut field = InputField::new("");
        for c in "d1".chars() {
            assert_eq!(field.handle_key(press(KeyCode::Char(c))), FieldEvent::Edited);
        }
        assert_eq!(field.value(), "d1");
    }

    #[test]
    fn insert_in_the_middle() {
        let mut field = with_value("ac");
        field.handle_key(press(KeyCode::Left));
        field.handle_key(press(KeyCode::Char('b')));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn backspace_and_delete() {
        let mut field = with_value("abc");
        field.handle_key(press(KeyCode::Backspace));
        assert_eq!(field.value(), "ab");

        field.handle_key(press(KeyCode::Home));
        field.handle_key(press(KeyCode::Delete));
        assert_eq!(field.value(), "b");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut field = InputField::new("");
        field.handle_key(press(KeyCode::Backspace));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn cursor_movement_is_bounded() {
        let mut field = with_value("ab");
        field.handle_key(press(KeyCode::Right));
        field.handle_key(press(KeyCode::Left));
        field.handle_key(press(KeyCode::Left));
        field.handle_key(press(KeyCode::Left));
        field.handle_key(press(KeyCode::Char('x')));
        assert_eq!(field.value(), "xab");
    }

    #[test]
    fn ctrl_shortcuts() {
        let mut field = with_value("abcdef");
        field.handle_key(press_ctrl('a'));
        field.handle_key(press_ctrl('k'));
        assert_eq!(field.value(), "");

        let mut field = with_value("abcdef");
        field.handle_key(press(KeyCode::Left));
        field.handle_key(press_ctrl('u'));
        assert_eq!(field.value(), "f");
    }

    #[test]
    fn multibyte_input_round_trips() {
        let mut field = InputField::new("");
        field.handle_key(press(KeyCode::Char('é')));
        field.handle_key(press(KeyCode::Char('n')));
        field.handle_key(press(KeyCode::Left));
        field.handle_key(press(KeyCode::Left));
        field.handle_key(press(KeyCode::Delete));
        assert_eq!(field.value(), "n");
    }

    #[test]
    fn enter_esc_tab_are_ignored() {
        let mut field = InputField::new("");
        assert_eq!(field.handle_key(press(KeyCode::Enter)), FieldEvent::Ignored);
        assert_eq!(field.handle_key(press(KeyCode::Esc)), FieldEvent::Ignored);
        assert_eq!(field.handle_key(press(KeyCode::Tab)), FieldEvent::Ignored);
        assert_eq!(field.handle_key(press(KeyCode::Down)), FieldEvent::Ignored);
    }

    #[test]
    fn clear_resets_value_and_cursor() {
        let mut field = with_value("hello");
        field.clear();
        assert_eq!(field.value(), "");
        field.handle_key(press(KeyCode::Char('a')));
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn render_shows_placeholder_when_blurred_and_empty() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let field = InputField::new("Document ID");
        terminal
            .draw(|frame| field.render(frame, frame.area(), "ID", false))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Document ID"));
        assert!(content.contains("ID"));
    }

    #[test]
    fn render_focused_shows_cursor_block() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let field = with_value("doc1");
        terminal
            .draw(|frame| field.render(frame, frame.area(), "ID", true))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("doc1"));
        assert!(content.contains('\u{2588}'));
    }
}
