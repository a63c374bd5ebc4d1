//! CLI command definitions.

pub mod items;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the itemstore API.
#[derive(Debug, Parser)]
#[command(name = "itemstore-client")]
#[command(about = "CLI client for the itemstore API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "ITEMSTORE_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Item management.
    Items(items::ItemsCommand),
    /// Server health check.
    Health,
    /// Print the server welcome message.
    Welcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use items::ItemsAction;

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "itemstore-client",
            "--format",
            "json",
            "items",
            "create",
            "--name",
            "Lamp",
            "--price",
            "12.5",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Items(cmd) => match cmd.action {
                ItemsAction::Create {
                    name,
                    price,
                    description,
                } => {
                    assert_eq!(name, "Lamp");
                    assert_eq!(price, 12.5);
                    assert_eq!(description, None);
                }
                other => panic!("unexpected action {other:?}"),
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_delete_requires_integer_id() {
        let result = Cli::try_parse_from(["itemstore-client", "items", "delete", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_update_requires_price() {
        let result = Cli::try_parse_from([
            "itemstore-client",
            "items",
            "update",
            "1",
            "--name",
            "Lamp",
        ]);
        assert!(result.is_err());
    }
}
