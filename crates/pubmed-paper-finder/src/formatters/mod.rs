//! Output formatting for filtered papers.
//!
//! Console output is text or JSON; file output is CSV with multi-valued cells
//! joined by [`MULTI_VALUE_SEPARATOR`].

mod console;
mod delimited;
mod json;

pub use console::{format_paper_text, format_papers_text};
pub use delimited::{
    CSV_HEADER, MULTI_VALUE_SEPARATOR, read_csv, read_csv_file, write_csv, write_csv_file,
};
pub use json::{format_papers_json, paper_json};

/// Console rendering of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text blocks.
    #[default]
    Text,
    /// Pretty-printed JSON array.
    Json,
}
