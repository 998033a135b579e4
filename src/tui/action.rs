//! Actions driving state transitions, and the typed flow submissions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::client::models::Language;
use crate::tui::state::Tab;

/// The classify flow always submits this fixed candidate set, regardless of
/// the input text.
pub const CLASSIFY_LABELS: [&str; 3] = ["urgent", "normal", "low"];

/// A request the user submitted from a tab. Each variant maps onto exactly
/// one API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowRequest {
    Health,
    CreateDocument {
        id: String,
        title: String,
        text: String,
    },
    GetDocument {
        id: String,
    },
    Classify {
        text: String,
    },
    NotarySummarize {
        text: String,
        document_id: Option<String>,
        language: Language,
    },
    Ask {
        question: String,
        context: String,
    },
}

impl FlowRequest {
    /// The flow slot this request settles into.
    pub fn tab(&self) -> Tab {
        match self {
            FlowRequest::Health => Tab::Health,
            FlowRequest::CreateDocument { .. } | FlowRequest::GetDocument { .. } => Tab::Documents,
            FlowRequest::Classify { .. } => Tab::Classify,
            FlowRequest::NotarySummarize { .. } => Tab::Notary,
            FlowRequest::Ask { .. } => Tab::Ask,
        }
    }
}

/// Actions triggered by user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    SwitchTab(usize),
    NextTab,
    PrevTab,
    Submit(FlowRequest),
    None,
}

/// Global key map, consulted only when the active tab did not consume the
/// key.
pub fn map_key_to_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('1') => Action::SwitchTab(0),
        KeyCode::Char('2') => Action::SwitchTab(1),
        KeyCode::Char('3') => Action::SwitchTab(2),
        KeyCode::Char('4') => Action::SwitchTab(3),
        KeyCode::Char('5') => Action::SwitchTab(4),
        KeyCode::Tab => Action::NextTab,
        KeyCode::BackTab => Action::PrevTab,
        _ => Action::None,
    }
}
