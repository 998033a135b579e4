//! Wire types for the platform API.
//!
//! Optional response fields mean "the server did not report this"; decoding
//! never substitutes defaults for them. List fields decode as empty when the
//! server omits them.

use serde::{Deserialize, Serialize};

/// Service health report from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Deployment environment name (e.g. `local`, `prod`).
    pub environment: String,
    /// Server-side timestamp, RFC 3339.
    pub timestamp: String,
    /// Database reachability; `None` when the probe was not run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_ok: Option<bool>,
    /// LLM provider configuration state; `None` when the probe was not run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_ok: Option<bool>,
}

/// A stored document as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRead {
    /// Caller-supplied identifier, treated as an opaque key.
    pub id: String,
    pub title: String,
    pub text: String,
    /// Server-assigned creation timestamp, RFC 3339.
    pub created_at: String,
}

/// Payload for `POST /documents`. The server assigns `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCreate {
    pub id: String,
    pub title: String,
    pub text: String,
}

/// Payload for `POST /ai/classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
    pub candidate_labels: Vec<String>,
}

/// Classification result. `source` is the server-declared provenance flag;
/// this client only renders it and never decides fallback itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub label: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    pub model: String,
    /// `"llm"` or `"fallback"`.
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Structured summary of a notarial document. Any list may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotarySummary {
    pub title: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub parties_involved: Vec<String>,
    #[serde(default)]
    pub risks_or_warnings: Vec<String>,
    pub raw_summary: String,
}

/// Result of `POST /ai/notary/summarize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotarySummarizeResponse {
    /// Echoes the request's document id, `null` when the request had none.
    pub document_id: Option<String>,
    pub summary: NotarySummary,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Summarization language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Nl,
    En,
}

impl Language {
    /// Wire and display form of the language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Nl => "nl",
            Language::En => "en",
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::Nl => Language::En,
            Language::En => Language::Nl,
        }
    }
}

/// Payload for `POST /ai/notary/summarize`. Optional fields are dropped from
/// the serialized body entirely, never sent as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct NotarySummarizeRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

/// Caller-side options for a summarize call.
#[derive(Debug, Clone, Default)]
pub struct SummarizeOptions {
    pub document_id: Option<String>,
    pub language: Option<Language>,
}

impl NotarySummarizeRequest {
    /// Build the request body. An empty document id counts as absent.
    pub fn new(text: impl Into<String>, options: SummarizeOptions) -> Self {
        Self {
            text: text.into(),
            document_id: options.document_id.filter(|id| !id.is_empty()),
            language: options.language,
        }
    }
}

/// Payload for `POST /ai/ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub context: String,
}

/// Answer to a contextual question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub model: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_optional_probes_decode_as_none() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"environment":"local","timestamp":"2024-01-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(health.environment, "local");
        assert_eq!(health.db_ok, None);
        assert_eq!(health.llm_ok, None);
    }

    #[test]
    fn health_reported_probes_decode_as_some() {
        let health: HealthStatus = serde_json::from_str(
            r#"{"environment":"prod","timestamp":"x","db_ok":true,"llm_ok":false}"#,
        )
        .unwrap();
        assert_eq!(health.db_ok, Some(true));
        assert_eq!(health.llm_ok, Some(false));
    }

    #[test]
    fn document_create_serializes_exactly_three_fields() {
        let payload = DocumentCreate {
            id: "d1".into(),
            title: "Title".into(),
            text: "Content".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "d1", "title": "Title", "text": "Content"})
        );
    }

    #[test]
    fn classify_request_carries_candidate_labels() {
        let request = ClassifyRequest {
            text: "Urgent!".into(),
            candidate_labels: vec!["urgent".into(), "normal".into(), "low".into()],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"text": "Urgent!", "candidate_labels": ["urgent", "normal", "low"]})
        );
    }

    #[test]
    fn summarize_request_omits_absent_options() {
        let request = NotarySummarizeRequest::new("Deed", SummarizeOptions::default());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"text": "Deed"}));
    }

    #[test]
    fn summarize_request_treats_empty_document_id_as_absent() {
        let request = NotarySummarizeRequest::new(
            "Deed",
            SummarizeOptions {
                document_id: Some(String::new()),
                language: None,
            },
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"text": "Deed"}));
    }

    #[test]
    fn summarize_request_includes_chosen_options() {
        let request = NotarySummarizeRequest::new(
            "Text",
            SummarizeOptions {
                document_id: Some("doc1".into()),
                language: Some(Language::En),
            },
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"text": "Text", "document_id": "doc1", "language": "en"})
        );
    }

    #[test]
    fn language_codes_and_toggle() {
        assert_eq!(Language::Nl.code(), "nl");
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Nl.toggled(), Language::En);
        assert_eq!(Language::En.toggled(), Language::Nl);
        assert_eq!(Language::default(), Language::Nl);
    }

    #[test]
    fn summary_lists_default_to_empty() {
        let response: NotarySummarizeResponse = serde_json::from_str(
            r#"{"document_id":null,"summary":{"title":"S","raw_summary":"x"},"source":"fallback"}"#,
        )
        .unwrap();
        assert_eq!(response.document_id, None);
        assert!(response.summary.key_points.is_empty());
        assert!(response.summary.parties_involved.is_empty());
        assert!(response.summary.risks_or_warnings.is_empty());
    }

    #[test]
    fn ask_request_field_order_is_question_then_context() {
        let request = AskRequest {
            question: "What?".into(),
            context: "Because.".into(),
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"question":"What?","context":"Because."}"#);
    }
}
