pub mod ai;
pub mod document;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::tui::app::App;
use crate::tui::client::api::{ApiClient, ClientConfig};

/// AI Platform CLI — interactive console and one-shot API calls
#[derive(Parser)]
#[command(name = "aiplatform-cli", version, about)]
pub struct Cli {
    /// Platform server origin
    #[arg(long, env = "AIPLATFORM_URL", default_value = "http://localhost:8000")]
    url: String,

    /// API root path
    #[arg(long, env = "AIPLATFORM_API_PREFIX", default_value = "/api/v1")]
    api_prefix: String,

    /// API key, omitted from requests when unset
    #[arg(long, env = "AIPLATFORM_API_KEY")]
    api_key: Option<String>,

    /// Tenant id, defaults to "default" on the wire
    #[arg(long, env = "AIPLATFORM_TENANT")]
    tenant: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive console (the default)
    Tui,
    /// Check service health
    Health,
    /// Manage documents
    Document {
        #[command(subcommand)]
        action: document::DocumentAction,
    },
    /// Run AI flows
    Ai {
        #[command(subcommand)]
        action: ai::AiAction,
    },
}

/// Stderr logging for one-shot commands. The TUI leaves the subscriber
/// uninstalled so raw-mode output stays clean.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = ClientConfig {
            url: self.url,
            api_prefix: self.api_prefix,
            api_key: self.api_key,
            tenant_id: self.tenant,
        };

        match self.command {
            None | Some(Commands::Tui) => {
                let mut app = App::new(&config)?;
                app.run().await
            }
            Some(Commands::Health) => {
                init_logging();
                let client = ApiClient::new(&config)?;
                let health = client.get_health().await?;
                println!("{}", serde_json::to_string_pretty(&health)?);
                Ok(())
            }
            Some(Commands::Document { action }) => {
                init_logging();
                let client = ApiClient::new(&config)?;
                action.run(&client).await
            }
            Some(Commands::Ai { action }) => {
                init_logging();
                let client = ApiClient::new(&config)?;
                action.run(&client).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_declaration_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_resolve() {
        let cli = Cli::try_parse_from(["aiplatform-cli"]).unwrap();
        assert_eq!(cli.url, "http://localhost:8000");
        assert_eq!(cli.api_prefix, "/api/v1");
        assert_eq!(cli.api_key, None);
        assert_eq!(cli.tenant, None);
        assert!(cli.command.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "aiplatform-cli",
            "--url",
            "http://platform:9000",
            "--tenant",
            "acme",
            "--api-key",
            "secret",
            "health",
        ])
        .unwrap();
        assert_eq!(cli.url, "http://platform:9000");
        assert_eq!(cli.tenant.as_deref(), Some("acme"));
        assert_eq!(cli.api_key.as_deref(), Some("secret"));
        assert!(matches!(cli.command, Some(Commands::Health)));
    }
}
