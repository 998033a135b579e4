//! Application state: tab selection and the per-flow state arena.

use crate::tui::client::models::{
    AskResponse, ClassifyResponse, DocumentRead, HealthStatus, NotarySummarizeResponse,
};

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// The five request flows, one tab each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Health,
    Documents,
    Classify,
    Notary,
    Ask,
}

impl Tab {
    /// All tabs in display order.
    pub fn all() -> [Tab; 5] {
        [
            Tab::Health,
            Tab::Documents,
            Tab::Classify,
            Tab::Notary,
            Tab::Ask,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Health => "Health",
            Tab::Documents => "Documents",
            Tab::Classify => "Classify",
            Tab::Notary => "Notary",
            Tab::Ask => "Ask",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Health => '1',
            Tab::Documents => '2',
            Tab::Classify => '3',
            Tab::Notary => '4',
            Tab::Ask => '5',
        }
    }

    fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }
}

/// Lifecycle of one submission within a flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Pending/result/error state for a single flow.
///
/// Invariants: `result` and `error` are never both set, and entering
/// `Pending` clears both. Each submission gets a monotonically increasing
/// token; only the settlement carrying the latest token is applied, so an
/// older call that finishes late can never overwrite a newer result.
#[derive(Clone, Debug)]
pub struct Flow<T> {
    pub phase: Phase,
    pub result: Option<T>,
    pub error: Option<String>,
    seq: u64,
}

impl<T> Default for Flow<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            result: None,
            error: None,
            seq: 0,
        }
    }
}

impl<T> Flow<T> {
    /// Start a new submission: clear prior outcome, enter `Pending`, and
    /// return the token the settlement must present.
    pub fn begin(&mut self) -> u64 {
        self.phase = Phase::Pending;
        self.result = None;
        self.error = None;
        self.seq += 1;
        self.seq
    }

    /// Apply a successful settlement. Returns `false` when the token is
    /// stale and the settlement was dropped.
    pub fn settle_ok(&mut self, token: u64, value: T) -> bool {
        if token != self.seq || self.phase != Phase::Pending {
            return false;
        }
        self.phase = Phase::Succeeded;
        self.result = Some(value);
        self.error = None;
        true
    }

    /// Apply a failed settlement. Returns `false` when the token is stale.
    pub fn settle_err(&mut self, token: u64, message: String) -> bool {
        if token != self.seq || self.phase != Phase::Pending {
            return false;
        }
        self.phase = Phase::Failed;
        self.result = None;
        self.error = Some(message);
        true
    }

    /// Discard everything, back to `Idle`. The token counter survives so
    /// settlements from before the reset stay stale.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.result = None;
        self.error = None;
    }

    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }
}

/// Arena of five named flow slots, keyed by tab identity. Leaving a tab
/// resets that tab's slot; there is no cross-tab state.
#[derive(Clone, Debug, Default)]
pub struct Flows {
    pub health: Flow<HealthStatus>,
    pub document: Flow<DocumentRead>,
    pub classify: Flow<ClassifyResponse>,
    pub notary: Flow<NotarySummarizeResponse>,
    pub ask: Flow<AskResponse>,
}

impl Flows {
    pub fn reset(&mut self, tab: Tab) {
        match tab {
            Tab::Health => self.health.reset(),
            Tab::Documents => self.document.reset(),
            Tab::Classify => self.classify.reset(),
            Tab::Notary => self.notary.reset(),
            Tab::Ask => self.ask.reset(),
        }
    }

    pub fn is_pending(&self, tab: Tab) -> bool {
        match tab {
            Tab::Health => self.health.is_pending(),
            Tab::Documents => self.document.is_pending(),
            Tab::Classify => self.classify.is_pending(),
            Tab::Notary => self.notary.is_pending(),
            Tab::Ask => self.ask.is_pending(),
        }
    }
}

/// Top-level state shared with every component.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Currently visible tab. Exactly one is active.
    pub active_tab: Tab,
    /// Per-flow state, one slot per tab.
    pub flows: Flows,
    /// Server origin, shown in the status bar.
    pub url: String,
    /// Resolved tenant id, shown in the status bar.
    pub tenant: String,
    tick: usize,
}

impl AppState {
    pub fn new(url: String, tenant: String) -> Self {
        Self {
            active_tab: Tab::Health,
            flows: Flows::default(),
            url,
            tenant,
            tick: 0,
        }
    }

    /// Advance the spinner animation.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }

    /// Select a tab. Selecting the active tab is a no-op; switching away
    /// discards the left tab's flow state, so re-entering starts at `Idle`.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        let left = self.active_tab;
        self.active_tab = tab;
        self.flows.reset(left);
    }

    /// Select a tab by display index, ignoring out-of-range values.
    pub fn switch_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index).copied() {
            self.select_tab(tab);
        }
    }

    /// Switch to the next tab, wrapping around.
    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let next = (self.active_tab.index() + 1) % tabs.len();
        self.select_tab(tabs[next]);
    }

    /// Switch to the previous tab, wrapping around.
    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current = self.active_tab.index();
        let prev = if current == 0 {
            tabs.len() - 1
        } else {
            current - 1
        };
        self.select_tab(tabs[prev]);
    }
}
