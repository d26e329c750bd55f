use anyhow::Result;
use dogapi::types::BreedList;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "md" | "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct ImageRow {
    #[tabled(rename = "#")]
    #[serde(rename = "#")]
    index: usize,
    #[tabled(rename = "Breed")]
    #[serde(rename = "Breed")]
    breed: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

#[derive(Tabled, Serialize)]
pub struct BreedRow {
    #[tabled(rename = "Breed")]
    #[serde(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Sub-breeds")]
    #[serde(rename = "Sub-breeds")]
    count: usize,
    #[tabled(rename = "Names")]
    #[serde(rename = "Names")]
    names: String,
}

#[derive(Tabled, Serialize)]
pub struct SubBreedRow {
    #[tabled(rename = "Breed")]
    #[serde(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Sub-breed")]
    #[serde(rename = "Sub-breed")]
    sub_breed: String,
}

// -- Row builders --

pub fn build_image_rows(images: &[String]) -> Vec<ImageRow> {
    images
        .iter()
        .enumerate()
        .map(|(i, url)| ImageRow {
            index: i + 1,
            breed: breed_from_url(url).unwrap_or_default(),
            url: url.clone(),
        })
        .collect()
}

pub fn build_breed_rows(breeds: &BreedList) -> Vec<BreedRow> {
    breeds
        .iter()
        .map(|(breed, subs)| BreedRow {
            breed: breed.clone(),
            count: subs.len(),
            names: subs.join(", "),
        })
        .collect()
}

pub fn build_sub_breed_rows(breed: &str, sub_breeds: &[String]) -> Vec<SubBreedRow> {
    sub_breeds
        .iter()
        .map(|sub| SubBreedRow {
            breed: breed.trim().to_string(),
            sub_breed: sub.clone(),
        })
        .collect()
}

/// Image URLs look like `https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg`;
/// the segment after `breeds` names the breed and sub-breed.
fn breed_from_url(url: &str) -> Option<String> {
    let mut segments = url.split('/').skip_while(|s| *s != "breeds");
    segments.next()?;
    segments
        .next()
        .filter(|s| !s.is_empty())
        .map(|s| s.replace('-', " "))
}

// -- Writers --

pub fn print_table<R: Tabled>(rows: Vec<R>) {
    println!("{}", Table::new(rows));
}

pub fn print_markdown<R: Tabled>(rows: Vec<R>) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
