use clap::Parser;
use home_inventory_client::config::cli::{Cli, Command};
use home_inventory_client::utils::validation::{self, Validate};
use home_inventory_client::utils::logger;
use home_inventory_client::{BoxPatch, InventoryClient, Item, PhotoUpload, Result};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting inventory CLI");

    let config = cli.client_config();
    if cli.verbose {
        tracing::debug!("client config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("configuration validation failed: {e}");
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = InventoryClient::from_config(&config)?;

    if let Err(e) = run(&cli.command, &client).await {
        tracing::error!("command failed: {e}");
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: &Command, client: &InventoryClient) -> Result<()> {
    match command {
        Command::List => {
            let boxes = client.list_boxes().await?;
            for b in &boxes {
                println!(
                    "#{:<4} {:<10} {}",
                    b.id,
                    b.number,
                    b.description.as_deref().unwrap_or("-")
                );
            }
            println!("✅ {} box(es)", boxes.len());
        }
        Command::Show { id } => {
            let detail = client.get_box(*id).await?;
            println!(
                "Box #{} {} — {}",
                detail.id,
                detail.number,
                detail.description.as_deref().unwrap_or("no description")
            );
            for item in &detail.items {
                print_item(client, item)?;
            }
            println!("✅ {} item(s)", detail.items.len());
        }
        Command::CreateBox {
            number,
            description,
            photo,
        } => {
            validation::validate_required_field("number", number)?;
            let photo = load_photo(photo.as_ref())?;
            let created = client
                .create_box(number, description.as_deref(), photo)
                .await?;
            println!("✅ Created box #{} ({})", created.id, created.number);
        }
        Command::UpdateBox {
            id,
            number,
            description,
        } => {
            let mut patch = BoxPatch::new();
            if let Some(number) = number {
                patch = patch.number(number.clone());
            }
            if let Some(description) = description {
                patch = patch.description(description.clone());
            }
            if patch.is_empty() {
                return Err(home_inventory_client::ApiError::Config {
                    message: "nothing to update; pass --number and/or --description".to_string(),
                });
            }
            let updated = client.update_box(*id, &patch).await?;
            println!("✅ Updated box #{} ({})", updated.id, updated.number);
        }
        Command::DeleteBox { id } => {
            client.delete_box(*id).await?;
            println!("✅ Deleted box #{id}");
        }
        Command::AddItem {
            box_id,
            name,
            note,
            photo,
        } => {
            validation::validate_required_field("name", name)?;
            let photo = load_photo(photo.as_ref())?;
            let created = client
                .create_item(*box_id, name, note.as_deref(), photo)
                .await?;
            println!("✅ Added item #{} ({})", created.id, created.name);
        }
        Command::Search { query } => {
            let items = client.search_items(query).await?;
            for item in &items {
                print_item(client, item)?;
            }
            println!("✅ {} match(es)", items.len());
        }
    }

    Ok(())
}

fn print_item(client: &InventoryClient, item: &Item) -> Result<()> {
    let photo = match (&item.photo_url, &item.photo_filename) {
        (Some(url), _) => url.to_string(),
        (None, Some(filename)) => client.photo_url(filename)?.to_string(),
        (None, None) => "-".to_string(),
    };
    println!(
        "  #{:<4} {:<20} {:<20} {}",
        item.id,
        item.name,
        item.note.as_deref().unwrap_or("-"),
        photo
    );
    Ok(())
}

fn load_photo(path: Option<&PathBuf>) -> Result<Option<PhotoUpload>> {
    match path {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            tracing::debug!(path = %path.display(), size = bytes.len(), "loaded photo");
            Ok(Some(PhotoUpload::jpeg(bytes)))
        }
        None => Ok(None),
    }
}
