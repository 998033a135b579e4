//! Component trait and the per-tab panels.

pub mod ask;
pub mod classify;
pub mod documents;
pub mod health;
pub mod notary;
pub mod status_bar;
pub mod tabs;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use super::action::Action;
use super::state::AppState;

/// Lifecycle trait implemented by every panel so the app can delegate key
/// handling and rendering uniformly.
pub trait Component {
    /// Translate a key press into an [`Action`]. Returning `None` lets the
    /// global key map handle it (quit, tab switching).
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action>;

    /// Draw the component into the given area.
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState);
}
