// src/config.rs

use std::path::PathBuf;

/// Page holding the chocolate bar ratings table.
pub const SOURCE_URL: &str = "http://flavorsofcacao.com/database_w_REF.html";

/// Output file, relative to the working directory. Overwritten on every run.
pub const OUTPUT_PATH: &str = "foc.csv";

/// Where to fetch from and where to write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub url: String,
    pub output: PathBuf,
}

impl ScrapeConfig {
    pub fn new(url: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            output: output.into(),
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self::new(SOURCE_URL, OUTPUT_PATH)
    }
}
