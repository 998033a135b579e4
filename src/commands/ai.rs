use clap::{Subcommand, ValueEnum};

use crate::tui::action::CLASSIFY_LABELS;
use crate::tui::client::api::ApiClient;
use crate::tui::client::models::{Language, SummarizeOptions};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LanguageArg {
    Nl,
    En,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Nl => Language::Nl,
            LanguageArg::En => Language::En,
        }
    }
}

#[derive(Subcommand)]
pub enum AiAction {
    /// Classify a piece of text
    Classify {
        text: String,
        /// Candidate label, repeatable; defaults to urgent/normal/low
        #[arg(long = "label")]
        labels: Vec<String>,
    },
    /// Summarize a notarial document
    Summarize {
        text: String,
        /// Use a stored document's text instead
        #[arg(long)]
        document_id: Option<String>,
        #[arg(long, value_enum, default_value = "nl")]
        language: LanguageArg,
    },
    /// Answer a question against the given context
    Ask {
        question: String,
        #[arg(long)]
        context: String,
    },
}

impl AiAction {
    pub async fn run(self, client: &ApiClient) -> anyhow::Result<()> {
        match self {
            AiAction::Classify { text, labels } => {
                let labels = if labels.is_empty() {
                    CLASSIFY_LABELS.iter().map(|s| s.to_string()).collect()
                } else {
                    labels
                };
                let response = client.classify(&text, &labels).await?;
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            AiAction::Summarize {
                text,
                document_id,
                language,
            } => {
                let response = client
                    .notary_summarize(
                        &text,
                        SummarizeOptions {
                            document_id,
                            language: Some(language.into()),
                        },
                    )
                    .await?;
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            AiAction::Ask { question, context } => {
                let response = client.ask(&question, &context).await?;
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_arg_maps_onto_wire_language() {
        assert_eq!(Language::from(LanguageArg::Nl), Language::Nl);
        assert_eq!(Language::from(LanguageArg::En), Language::En);
    }
}
