//! Pure mapping from typed results to presentation models.
//!
//! No I/O and no widget code here; components turn these views into
//! ratatui widgets.

use chrono::{DateTime, Local};

use crate::tui::client::models::{
    AskResponse, ClassifyResponse, DocumentRead, HealthStatus, NotarySummarizeResponse,
};

/// Three-way probe state. `Unknown` means the server did not report the
/// probe, which must never render like a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    Unknown,
    Up,
    Down,
}

impl Probe {
    pub fn from_flag(flag: Option<bool>) -> Probe {
        match flag {
            None => Probe::Unknown,
            Some(true) => Probe::Up,
            Some(false) => Probe::Down,
        }
    }
}

/// Provenance badge text for a server-declared `source` flag.
pub fn provenance_badge(source: &str) -> &'static str {
    if source == "llm" { "AI model" } else { "Fallback" }
}

/// Confidence as a rounded percentage in 0..=100.
pub fn confidence_percent(confidence: f64) -> u16 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u16
}

/// Format an RFC 3339 timestamp as a local date-time string. Empty input
/// renders as a dash; anything unparsable is shown verbatim.
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return "—".to_string();
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Presentation model for a health report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthView {
    pub environment: String,
    pub database: Probe,
    pub database_label: &'static str,
    pub llm: Probe,
    pub llm_label: &'static str,
    pub timestamp: String,
}

impl HealthView {
    pub fn from(status: &HealthStatus) -> Self {
        let database = Probe::from_flag(status.db_ok);
        let llm = Probe::from_flag(status.llm_ok);
        Self {
            environment: if status.environment.is_empty() {
                "—".to_string()
            } else {
                status.environment.clone()
            },
            database,
            database_label: match database {
                Probe::Up => "Connected",
                Probe::Down => "Disconnected",
                Probe::Unknown => "unknown",
            },
            llm,
            llm_label: match llm {
                Probe::Up => "Configured",
                Probe::Down => "Not configured",
                Probe::Unknown => "unknown",
            },
            timestamp: format_timestamp(&status.timestamp),
        }
    }
}

/// Presentation model for a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentView {
    pub title: String,
    pub id: String,
    pub text: String,
    pub created: String,
}

impl DocumentView {
    pub fn from(document: &DocumentRead) -> Self {
        Self {
            title: if document.title.is_empty() {
                "Untitled".to_string()
            } else {
                document.title.clone()
            },
            id: document.id.clone(),
            text: if document.text.is_empty() {
                "—".to_string()
            } else {
                document.text.clone()
            },
            created: format_timestamp(&document.created_at),
        }
    }
}

/// Presentation model for a classification result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifyView {
    pub label: String,
    pub percent: u16,
    /// False when the result is an error display; the bar is suppressed.
    pub show_bar: bool,
    pub is_error: bool,
    pub badge: &'static str,
    pub model: String,
}

impl ClassifyView {
    pub fn from(response: &ClassifyResponse) -> Self {
        let is_error = response.label == "error"
            || (response.source == "fallback" && response.confidence == 0.0);
        Self {
            label: response.label.clone(),
            percent: confidence_percent(response.confidence),
            show_bar: !is_error,
            is_error,
            badge: provenance_badge(&response.source),
            model: response.model.clone(),
        }
    }
}

/// One non-empty list section of a summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummarySection {
    pub heading: &'static str,
    pub items: Vec<String>,
}

/// Presentation model for a notary summary. `sections` holds only the
/// non-empty lists, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotaryView {
    pub title: String,
    pub badge: &'static str,
    pub sections: Vec<SummarySection>,
    pub raw_summary: String,
}

impl NotaryView {
    pub fn from(response: &NotarySummarizeResponse) -> Self {
        let summary = &response.summary;
        let mut sections = Vec::new();
        for (heading, items) in [
            ("Key points", &summary.key_points),
            ("Parties involved", &summary.parties_involved),
            ("Risks & warnings", &summary.risks_or_warnings),
        ] {
            if !items.is_empty() {
                sections.push(SummarySection {
                    heading,
                    items: items.clone(),
                });
            }
        }
        Self {
            title: summary.title.clone(),
            badge: provenance_badge(&response.source),
            sections,
            raw_summary: if summary.raw_summary.is_empty() {
                "—".to_string()
            } else {
                summary.raw_summary.clone()
            },
        }
    }
}

/// Presentation model for an answer. The answer text is verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerView {
    pub answer: String,
    pub badge: &'static str,
    pub model: String,
}

impl AnswerView {
    pub fn from(response: &AskResponse) -> Self {
        Self {
            answer: response.answer.clone(),
            badge: provenance_badge(&response.source),
            model: response.model.clone(),
        }
    }
}
