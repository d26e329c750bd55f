use anyhow::Result;
use clap::Args;
use dogapi::Client;

use crate::output::{
    build_breed_rows, build_sub_breed_rows, print_csv, print_json, print_markdown, print_table,
    OutputFormat,
};

#[derive(Args)]
pub struct SubBreedsArgs {
    /// Breed name (e.g. hound)
    pub breed: String,
}

pub fn run_list(client: &Client, format: &OutputFormat) -> Result<()> {
    let breeds = client.breeds_list()?;
    match format {
        OutputFormat::Table => print_table(build_breed_rows(&breeds)),
        OutputFormat::Json => print_json(&breeds),
        OutputFormat::Csv => print_csv(build_breed_rows(&breeds))?,
        OutputFormat::Markdown => print_markdown(build_breed_rows(&breeds)),
    }
    Ok(())
}

pub fn run_sub_breeds(args: &SubBreedsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let subs = client.sub_breeds(&args.breed)?;
    if subs.is_empty() && *format == OutputFormat::Table {
        eprintln!("{} has no sub-breeds", args.breed.trim());
        return Ok(());
    }
    match format {
        OutputFormat::Table => print_table(build_sub_breed_rows(&args.breed, &subs)),
        OutputFormat::Json => print_json(&subs),
        OutputFormat::Csv => print_csv(build_sub_breed_rows(&args.breed, &subs))?,
        OutputFormat::Markdown => print_markdown(build_sub_breed_rows(&args.breed, &subs)),
    }
    Ok(())
}
