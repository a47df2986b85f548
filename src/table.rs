// src/table.rs

use tracing::{debug, instrument, trace};

use crate::document::{Document, Element};
use crate::error::{Result, ScrapeError};

/// Cell texts of one HTML table. Body rows keep whatever width they had in
/// the page; nothing pads or truncates them to the header width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of CSV columns, i.e. header cells.
    pub fn width(&self) -> usize {
        self.header.len()
    }
}

/// Pull the first `<table>` out of `doc`.
///
/// - header: `<th>` cells under the table's first `<tr>`
/// - rows: `<td>` cells under each later `<tr>` of the same table
///
/// Rows and cells are matched as descendants, so `<thead>`/`<tbody>`
/// wrappers make no difference.
#[instrument(level = "info", skip(doc))]
pub fn extract_first_table(doc: &Document) -> Result<Table> {
    let table = doc.find_first("table").ok_or(ScrapeError::NoTable)?;
    let header_row = table.find_first("tr").ok_or(ScrapeError::NoHeaderRow)?;

    let header = cell_texts(header_row, "th");
    debug!(columns = header.len(), ?header, "header row");

    let rows: Vec<Vec<String>> = table
        .find_all("tr")
        .skip(1)
        .map(|tr| cell_texts(tr, "td"))
        .collect();

    for (idx, row) in rows.iter().enumerate() {
        if row.len() != header.len() {
            trace!(row = idx, cells = row.len(), "row width differs from header");
        }
    }
    debug!(rows = rows.len(), "body rows");

    Ok(Table { header, rows })
}

fn cell_texts(row: &Element, cell: &str) -> Vec<String> {
    row.find_all(cell).map(Element::stripped_text).collect()
}
