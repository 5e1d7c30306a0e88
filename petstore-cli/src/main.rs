use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use petstore_client::{
    ApiClient, Configuration, FileParam, PetApi, StoreApi,
    models::{Category, Pet, PetStatus, Tag},
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "petstore")]
#[command(about = "Talks to a Pet Store API server", long_about = None)]
struct Cli {
    /// Base URL of the API, e.g. http://localhost:80/v2
    #[arg(long, env = petstore_client::ENV_HOST, global = true)]
    host: Option<String>,

    /// Proxy all requests go through
    #[arg(long, env = petstore_client::ENV_PROXY, global = true)]
    proxy: Option<String>,

    /// Key for the `api_key` security scheme
    #[arg(long, env = petstore_client::ENV_API_KEY, global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// OAuth2 access token
    #[arg(long, env = petstore_client::ENV_ACCESS_TOKEN, global = true, hide_env_values = true)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find pet by ID
    Get { id: i64 },
    /// Add a new pet to the store
    Add(PetArgs),
    /// Update an existing pet
    Update(PetArgs),
    /// Delete a pet
    Delete {
        id: i64,
        /// value for the `api_key` header of the call
        #[arg(long)]
        key_header: Option<String>,
    },
    /// Find pets by status
    FindByStatus {
        #[arg(required = true)]
        status: Vec<PetStatus>,
    },
    /// Find pets by tags
    FindByTags {
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Upload an image for a pet
    Upload {
        id: i64,
        file: PathBuf,
        #[arg(long)]
        metadata: Option<String>,
    },
    /// Show pet inventories by status
    Inventory,
}

#[derive(Args, Debug)]
struct PetArgs {
    #[arg(long)]
    id: i64,
    #[arg(long)]
    name: String,
    #[arg(long)]
    status: Option<PetStatus>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long = "photo-url")]
    photo_urls: Vec<String>,
}

impl PetArgs {
    fn into_pet(self) -> Pet {
        let mut pet = Pet::new(self.name, self.photo_urls);
        pet.id = Some(self.id);
        pet.status = self.status;
        pet.category = self.category.map(|name| Category {
            id: None,
            name: Some(name),
        });
        if !self.tags.is_empty() {
            pet.tags = Some(
                self.tags
                    .into_iter()
                    .map(|name| Tag {
                        id: None,
                        name: Some(name),
                    })
                    .collect(),
            );
        }
        pet
    }
}

impl Cli {
    fn configuration(&self) -> Configuration {
        let mut config = Configuration::new();
        config.host = self.host.clone();
        config.proxy = self.proxy.clone();
        if let Some(key) = &self.api_key {
            config = config.with_api_key("api_key", key);
        }
        config.access_token = self.access_token.clone();
        config
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.configuration();
    let host = config.host().context("Invalid host configuration")?;
    log::info!("using {host}");

    let client = Arc::new(ApiClient::new(config).context("Failed to create HTTP client")?);
    let pet_api = PetApi::new(client.clone());

    match cli.command {
        Command::Get { id } => {
            let pet = pet_api
                .get_pet_by_id(id)
                .with_context(|| format!("Failed to fetch pet {id}"))?;
            print_json(&pet)?;
        }
        Command::Add(args) => {
            let pet = args.into_pet();
            pet_api.add_pet(&pet).context("Failed to add pet")?;
            print_json(&pet)?;
        }
        Command::Update(args) => {
            let pet = args.into_pet();
            pet_api.update_pet(&pet).context("Failed to update pet")?;
            print_json(&pet)?;
        }
        Command::Delete { id, key_header } => {
            pet_api
                .delete_pet(id, key_header.as_deref())
                .with_context(|| format!("Failed to delete pet {id}"))?;
            println!("deleted pet {id}");
        }
        Command::FindByStatus { status } => {
            let pets = pet_api
                .find_pets_by_status(&status)
                .context("Failed to find pets by status")?;
            print_json(&pets)?;
        }
        Command::FindByTags { tags } => {
            let pets = pet_api
                .find_pets_by_tags(tags.as_slice())
                .context("Failed to find pets by tags")?;
            print_json(&pets)?;
        }
        Command::Upload { id, file, metadata } => {
            let file = FileParam::from(file);
            let response = pet_api
                .upload_file(id, metadata.as_deref(), Some(&file))
                .with_context(|| format!("Failed to upload file for pet {id}"))?;
            print_json(&response)?;
        }
        Command::Inventory => {
            let inventory = StoreApi::new(client)
                .get_inventory()
                .context("Failed to fetch inventory")?;
            print_json(&inventory)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}
