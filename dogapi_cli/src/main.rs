mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dogapi::Client;

use crate::output::OutputFormat;

/// Environment variable consulted when `--base-url` is not given.
const BASE_URL_ENV: &str = "DOG_API_BASE_URL";

#[derive(Parser)]
#[command(name = "dogapi")]
#[command(about = "Fetch dog images and breed lists from dog.ceo")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Override the API base URL (defaults to $DOG_API_BASE_URL, then https://dog.ceo/api/)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Random images from the whole collection
    Random(commands::images::RandomArgs),
    /// Images of a breed or sub-breed
    Breed(commands::images::BreedArgs),
    /// List every breed and its sub-breeds
    Breeds,
    /// List the sub-breeds of a breed
    SubBreeds(commands::breeds::SubBreedsArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dogapi=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let client = match cli
        .base_url
        .clone()
        .or_else(|| std::env::var(BASE_URL_ENV).ok())
    {
        Some(url) => Client::with_base_url(&url)?,
        None => Client::new()?,
    };

    match &cli.command {
        Commands::Random(args) => commands::images::run_random(args, &client, &format)?,
        Commands::Breed(args) => commands::images::run_breed(args, &client, &format)?,
        Commands::Breeds => commands::breeds::run_list(&client, &format)?,
        Commands::SubBreeds(args) => commands::breeds::run_sub_breeds(args, &client, &format)?,
    }

    Ok(())
}
