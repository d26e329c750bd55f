use anyhow::Result;
use clap::Args;
use dogapi::Client;

use crate::output::{
    build_image_rows, print_csv, print_json, print_markdown, print_table, OutputFormat,
};

#[derive(Args)]
pub struct RandomArgs {
    /// Number of images to fetch (the API returns at most 50)
    #[arg(long)]
    pub count: Option<u32>,
}

#[derive(Args)]
pub struct BreedArgs {
    /// Breed name (e.g. hound)
    pub breed: String,

    /// Sub-breed name (e.g. afghan)
    #[arg(long)]
    pub sub: Option<String>,

    /// Number of random images to fetch (the API returns at most 50)
    #[arg(long, conflicts_with = "all")]
    pub count: Option<u32>,

    /// Fetch every image of the breed instead of a random one
    #[arg(long)]
    pub all: bool,
}

pub fn run_random(args: &RandomArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let images = match args.count {
        Some(count) => client.multiple_random_images(count)?,
        None => vec![client.random_image()?],
    };
    print_images(&images, format)
}

pub fn run_breed(args: &BreedArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let images = match (&args.sub, args.all, args.count) {
        (None, true, _) => client.images_by_breed(&args.breed)?,
        (None, false, Some(count)) => client.multiple_random_images_by_breed(&args.breed, count)?,
        (None, false, None) => vec![client.random_image_by_breed(&args.breed)?],
        (Some(sub), true, _) => client.images_by_sub_breed(&args.breed, sub)?,
        (Some(sub), false, Some(count)) => {
            client.multiple_random_images_by_sub_breed(&args.breed, sub, count)?
        }
        (Some(sub), false, None) => vec![client.random_image_by_sub_breed(&args.breed, sub)?],
    };
    print_images(&images, format)
}

fn print_images(images: &[String], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(build_image_rows(images)),
        OutputFormat::Json => print_json(&images),
        OutputFormat::Csv => print_csv(build_image_rows(images))?,
        OutputFormat::Markdown => print_markdown(build_image_rows(images)),
    }
    Ok(())
}
