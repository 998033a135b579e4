//! Main application: owns the event loop, the flow arena, and dispatch of
//! submissions to the API client.
//!
//! A submission spawns a task that performs exactly one call and reports
//! back over a channel. The loop never blocks on the network; settlements
//! are applied against the flow arena, which drops anything stale.

use std::time::Duration;

use anyhow::Context as _;
use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use tokio::sync::mpsc;

use super::action::{Action, CLASSIFY_LABELS, FlowRequest, map_key_to_action};
use super::client::api::{ApiClient, ApiError, ClientConfig};
use super::client::models::{
    AskResponse, ClassifyResponse, DocumentCreate, DocumentRead, HealthStatus,
    NotarySummarizeResponse, SummarizeOptions,
};
use super::components::Component;
use super::components::ask::AskPanel;
use super::components::classify::ClassifyPanel;
use super::components::documents::DocumentsPanel;
use super::components::health::HealthPanel;
use super::components::notary::NotaryPanel;
use super::components::status_bar::StatusBar;
use super::components::tabs::TabBar;
use super::event::{Event, EventHandler};
use super::state::{AppState, Tab};
use super::terminal::Tui;
use crossterm::event::KeyEvent;

const TICK_RATE: Duration = Duration::from_millis(200);

/// Result of one API call, tagged by flow.
#[derive(Debug)]
pub enum Outcome {
    Health(Result<HealthStatus, ApiError>),
    Document(Result<DocumentRead, ApiError>),
    Classify(Result<ClassifyResponse, ApiError>),
    Notary(Result<NotarySummarizeResponse, ApiError>),
    Ask(Result<AskResponse, ApiError>),
}

/// A settled call on its way back into the loop. `token` must match the
/// flow's latest submission or the settlement is dropped.
#[derive(Debug)]
pub struct Settlement {
    pub tab: Tab,
    pub token: u64,
    pub outcome: Outcome,
}

/// Synthetic degraded report stored when the health check fails.
fn degraded_health() -> HealthStatus {
    HealthStatus {
        environment: "error".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        db_ok: None,
        llm_ok: None,
    }
}

/// Top-level TUI application.
pub struct App {
    client: ApiClient,
    running: bool,
    pub state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    health: HealthPanel,
    documents: DocumentsPanel,
    classify: ClassifyPanel,
    notary: NotaryPanel,
    ask: AskPanel,
    settle_tx: mpsc::UnboundedSender<Settlement>,
    settle_rx: Option<mpsc::UnboundedReceiver<Settlement>>,
}

impl App {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = ApiClient::new(config)?;
        let state = AppState::new(config.url.clone(), config.resolved_tenant().to_string());
        let (settle_tx, settle_rx) = mpsc::unbounded_channel();
        Ok(Self {
            client,
            running: true,
            state,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            health: HealthPanel::new(),
            documents: DocumentsPanel::new(),
            classify: ClassifyPanel::new(),
            notary: NotaryPanel::new(),
            ask: AskPanel::new(),
            settle_tx,
            settle_rx: Some(settle_rx),
        })
    }

    /// Run the main event loop until quit.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut tui = Tui::new()?;
        tui.init()?;

        let mut events = EventHandler::new(TICK_RATE);
        let mut settlements = self
            .settle_rx
            .take()
            .context("event loop already started")?;

        while self.running {
            tokio::select! {
                event = events.next() => match event? {
                    Event::Key(key) => {
                        let action = self.handle_key(key);
                        self.handle_action(action);
                    }
                    Event::Tick => self.state.on_tick(),
                    Event::Render => {
                        tui.terminal.draw(|frame| self.render(frame))?;
                    }
                },
                Some(settlement) = settlements.recv() => self.apply_settlement(settlement),
            }
        }

        tui.exit()?;
        Ok(())
    }

    /// The active tab gets the key first; unconsumed keys fall back to the
    /// global map.
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        let consumed = match self.state.active_tab {
            Tab::Health => self.health.handle_key_event(key),
            Tab::Documents => self.documents.handle_key_event(key),
            Tab::Classify => self.classify.handle_key_event(key),
            Tab::Notary => self.notary.handle_key_event(key),
            Tab::Ask => self.ask.handle_key_event(key),
        };
        consumed.unwrap_or_else(|| map_key_to_action(key))
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::SwitchTab(index) => self.state.switch_tab(index),
            Action::NextTab => self.state.next_tab(),
            Action::PrevTab => self.state.prev_tab(),
            Action::Submit(request) => self.submit(request),
            Action::None => {}
        }
    }

    /// Enter `Pending` on the target flow and spawn the call. Nothing stops
    /// a second submission while one is in flight; the token makes the
    /// latest one win.
    fn submit(&mut self, request: FlowRequest) {
        let tab = request.tab();
        let token = match tab {
            Tab::Health => self.state.flows.health.begin(),
            Tab::Documents => self.state.flows.document.begin(),
            Tab::Classify => self.state.flows.classify.begin(),
            Tab::Notary => self.state.flows.notary.begin(),
            Tab::Ask => self.state.flows.ask.begin(),
        };

        let client = self.client.clone();
        let tx = self.settle_tx.clone();
        tokio::spawn(async move {
            let outcome = perform(&client, request).await;
            // The receiver is gone only during shutdown.
            let _ = tx.send(Settlement { tab, token, outcome });
        });
    }

    fn apply_settlement(&mut self, settlement: Settlement) {
        let Settlement { tab, token, outcome } = settlement;
        let flows = &mut self.state.flows;
        let applied = match outcome {
            Outcome::Health(result) => {
                let report = result.unwrap_or_else(|err| {
                    tracing::debug!(%err, "health check failed");
                    degraded_health()
                });
                flows.health.settle_ok(token, report)
            }
            Outcome::Document(Ok(document)) => flows.document.settle_ok(token, document),
            Outcome::Document(Err(err)) => flows.document.settle_err(token, err.to_string()),
            Outcome::Classify(Ok(response)) => flows.classify.settle_ok(token, response),
            Outcome::Classify(Err(err)) => flows.classify.settle_err(token, err.to_string()),
            Outcome::Notary(Ok(response)) => flows.notary.settle_ok(token, response),
            Outcome::Notary(Err(err)) => flows.notary.settle_err(token, err.to_string()),
            Outcome::Ask(Ok(response)) => flows.ask.settle_ok(token, response),
            Outcome::Ask(Err(err)) => flows.ask.settle_err(token, err.to_string()),
        };
        if !applied {
            tracing::debug!(?tab, token, "dropped stale settlement");
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);

        match self.state.active_tab {
            Tab::Health => self.health.render(frame, chunks[1], &self.state),
            Tab::Documents => self.documents.render(frame, chunks[1], &self.state),
            Tab::Classify => self.classify.render(frame, chunks[1], &self.state),
            Tab::Notary => self.notary.render(frame, chunks[1], &self.state),
            Tab::Ask => self.ask.render(frame, chunks[1], &self.state),
        }

        self.status_bar.render(frame, chunks[2], &self.state);
    }
}

/// Perform the API call a request maps to.
async fn perform(client: &ApiClient, request: FlowRequest) -> Outcome {
    match request {
        FlowRequest::Health => Outcome::Health(client.get_health().await),
        FlowRequest::CreateDocument { id, title, text } => Outcome::Document(
            client
                .create_document(&DocumentCreate { id, title, text })
                .await,
        ),
        FlowRequest::GetDocument { id } => Outcome::Document(client.get_document(&id).await),
        FlowRequest::Classify { text } => {
            let labels: Vec<String> = CLASSIFY_LABELS.iter().map(|s| s.to_string()).collect();
            Outcome::Classify(client.classify(&text, &labels).await)
        }
        FlowRequest::NotarySummarize {
            text,
            document_id,
            language,
        } => Outcome::Notary(
            client
                .notary_summarize(
                    &text,
                    SummarizeOptions {
                        document_id,
                        language: Some(language),
                    },
                )
                .await,
        ),
        FlowRequest::Ask { question, context } => Outcome::Ask(client.ask(&question, &context).await),
    }
}
