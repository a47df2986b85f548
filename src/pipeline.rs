// src/pipeline.rs

use reqwest::blocking::Client;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::config::ScrapeConfig;
use crate::decode::decode_body;
use crate::document::Document;
use crate::error::Result;
use crate::export::export_to_path;
use crate::fetch::{build_client, fetch_page};
use crate::table::{extract_first_table, Table};

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub columns: usize,
    pub rows: usize,
}

/// GET `url` and extract its first table. Touches no files.
#[instrument(level = "info", skip(client))]
pub fn scrape_table(client: &Client, url: &str) -> Result<Table> {
    let page = fetch_page(client, url)?;
    let decoded = decode_body(&page.body);
    let doc = Document::parse(&decoded.text);
    extract_first_table(&doc)
}

/// fetch → decode → parse → extract → write. The output file is only
/// opened once the table is in hand, so a fetch or parse failure leaves
/// any existing file untouched.
#[instrument(level = "info", skip(config), fields(url = %config.url, output = %config.output.display()))]
pub fn run(config: &ScrapeConfig) -> Result<ExportSummary> {
    let client = build_client()?;
    let table = scrape_table(&client, &config.url)?;
    export_to_path(&config.output, &table)?;

    let summary = ExportSummary {
        path: config.output.clone(),
        columns: table.width(),
        rows: table.rows.len(),
    };
    info!(?summary, "export complete");
    Ok(summary)
}
