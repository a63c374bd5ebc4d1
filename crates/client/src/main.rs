//! itemstore-client CLI entry point.

use clap::Parser;
use itemstore_client::cli::items::ItemsAction;
use itemstore_client::cli::{Cli, Commands, OutputFormat};
use itemstore_client::client::ItemstoreClient;
use itemstore_client::output::{format_output, pretty};
use itemstore_core::item::ItemPayload;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ItemstoreClient::new(&cli.base_url);

    match cli.command {
        Commands::Items(items_cmd) => match items_cmd.action {
            ItemsAction::List => {
                let items = client.list_items().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&items, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_items(&items)),
                }
            }
            ItemsAction::Get { id } => {
                let item = client.get_item(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_item(&item)),
                }
            }
            ItemsAction::Create {
                name,
                price,
                description,
            } => {
                let payload = ItemPayload {
                    id: None,
                    name,
                    description,
                    price,
                };
                let item = client.create_item(&payload).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                    OutputFormat::Pretty => println!("Created:\n{}", pretty::format_item(&item)),
                }
            }
            ItemsAction::Update {
                id,
                name,
                price,
                description,
            } => {
                let payload = ItemPayload {
                    id: None,
                    name,
                    description,
                    price,
                };
                let item = client.update_item(id, &payload).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                    OutputFormat::Pretty => println!("Updated:\n{}", pretty::format_item(&item)),
                }
            }
            ItemsAction::Delete { id } => {
                let message = client.delete_item(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&message, cli.format)),
                    OutputFormat::Pretty => {
                        if !cli.quiet {
                            println!("Deleted item {}", id);
                        }
                    }
                }
            }
        },
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_health(&health)),
            }
        }
        Commands::Welcome => {
            let welcome = client.welcome().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&welcome, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("{}", welcome.message);
                    }
                }
            }
        }
    }

    Ok(())
}
