// src/export.rs

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};
use tracing::{debug, info, instrument};

use crate::error::{Result, ScrapeError};
use crate::table::Table;

/// Write `table` as CSV: header line, then one line per body row.
/// Minimal quoting, `\r\n` terminators, rows of any width.
///
/// A record with no fields is a bare `\r\n`, while a single empty field is
/// `""`. The csv crate writes both as `""`, so empty records bypass it.
pub fn write_table<W: Write>(out: W, table: &Table) -> Result<()> {
    let mut builder = WriterBuilder::new();
    builder
        .flexible(true) // body rows need not match the header width
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF);
    let mut wtr = builder.from_writer(out);

    for record in std::iter::once(&table.header).chain(&table.rows) {
        if record.is_empty() {
            let mut out = into_inner(wtr)?;
            out.write_all(b"\r\n").map_err(csv::Error::from)?;
            wtr = builder.from_writer(out);
        } else {
            wtr.write_record(record)?;
        }
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Flush the csv buffer and hand back the underlying writer.
fn into_inner<W: Write>(wtr: csv::Writer<W>) -> Result<W> {
    wtr.into_inner().map_err(|e| {
        let err = io::Error::new(e.error().kind(), e.error().to_string());
        csv::Error::from(err).into()
    })
}

/// Create or truncate `path` and write `table` into it. The file is closed
/// when this returns, on success or error.
#[instrument(level = "info", skip(path, table), fields(output = %path.as_ref().display()))]
pub fn export_to_path<P: AsRef<Path>>(path: P, table: &Table) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened output");

    write_table(file, table)?;
    info!(
        columns = table.width(),
        rows = table.rows.len(),
        "wrote {}",
        path.display()
    );
    Ok(())
}
