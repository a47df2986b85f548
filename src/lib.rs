//! Scrape the Flavors of Cacao ratings table into `foc.csv`.
//!
//! One blocking pass: fetch → decode → parse → extract → write.

pub mod config;
pub mod decode;
pub mod document;
pub mod error;
pub mod export;
pub mod fetch;
pub mod pipeline;
pub mod table;

#[cfg(test)]
mod test_support;

pub use error::{Result, ScrapeError};
pub use table::Table;
