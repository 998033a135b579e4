use clap::Subcommand;

use crate::tui::client::api::ApiClient;
use crate::tui::client::models::DocumentCreate;

#[derive(Subcommand)]
pub enum DocumentAction {
    /// Create a document
    Create {
        /// Document ID (opaque key, chosen by the caller)
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
    },
    /// Fetch a document by ID
    Get {
        /// Document ID
        id: String,
    },
}

impl DocumentAction {
    pub async fn run(self, client: &ApiClient) -> anyhow::Result<()> {
        match self {
            DocumentAction::Create { id, title, text } => {
                let document = client
                    .create_document(&DocumentCreate { id, title, text })
                    .await?;
                println!("{}", serde_json::to_string_pretty(&document)?);
            }
            DocumentAction::Get { id } => {
                let document = client.get_document(&id).await?;
                println!("{}", serde_json::to_string_pretty(&document)?);
            }
        }
        Ok(())
    }
}
