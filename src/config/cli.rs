use crate::config::ClientConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "inventory")]
#[command(about = "Command-line client for the home inventory backend")]
pub struct Cli {
    /// Backend origin; falls back to API_BASE_URL, then the built-in default
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bearer token for secured endpoints
    #[arg(long)]
    pub token: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all boxes
    List,
    /// Show one box with its items
    Show { id: i64 },
    /// Create a box, optionally attaching a photo file
    CreateBox {
        number: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Update fields of an existing box; only the supplied fields change
    UpdateBox {
        id: i64,
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a box
    DeleteBox { id: i64 },
    /// Add an item to a box, optionally attaching a photo file
    AddItem {
        box_id: i64,
        name: String,
        #[arg(long)]
        note: Option<String>,
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Search items by query term
    Search { query: String },
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        let mut config = match &self.base_url {
            Some(url) => ClientConfig::new(url.clone()),
            None => ClientConfig::from_env(),
        };
        config.auth_token = self.token.clone();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_url_wins_over_environment() {
        let cli = Cli::parse_from(["inventory", "--base-url", "http://10.0.0.2:9000", "list"]);
        let config = cli.client_config();
        assert_eq!(config.base_url, "http://10.0.0.2:9000");
    }

    #[test]
    fn token_flag_lands_in_the_client_config() {
        let cli = Cli::parse_from(["inventory", "--token", "secret", "list"]);
        assert_eq!(cli.client_config().auth_token.as_deref(), Some("secret"));
    }

    #[test]
    fn update_box_accepts_partial_flags() {
        let cli = Cli::parse_from(["inventory", "update-box", "7", "--description", "attic"]);
        match cli.command {
            Command::UpdateBox {
                id,
                number,
                description,
            } => {
                assert_eq!(id, 7);
                assert!(number.is_none());
                assert_eq!(description.as_deref(), Some("attic"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
