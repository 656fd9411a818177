//! PubMed Paper Finder
//!
//! Searches PubMed through the NCBI E-utilities API and reports papers that have
//! at least one author affiliated with a non-academic organisation (pharmaceutical
//! or biotech companies, for example).
//!
//! # Pipeline
//!
//! - **Search**: `esearch` turns a query into PubMed identifiers
//! - **Fetch**: `efetch` returns the XML records for those identifiers
//! - **Normalize**: each record is flattened into (author, affiliation) pairs
//! - **Classify/Filter**: academic affiliations are dropped by keyword heuristic
//! - **Output**: console text, JSON, or CSV
//!
//! # Example
//!
//! ```no_run
//! use pubmed_paper_finder::{PaperFinder, PubMedClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubMedClient::new(Config::from_env()?)?;
//!     let finder = PaperFinder::new(client);
//!
//!     let outcome = finder.find("cancer immunotherapy", 20).await?;
//!     for paper in &outcome.papers {
//!         println!("{}: {:?}", paper.pubmed_id, paper.non_academic_authors());
//!     }
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatters;
pub mod models;
pub mod normalize;
pub mod pipeline;

pub use classify::{ACADEMIC_KEYWORDS, AffiliationClassifier, AffiliationKind};
pub use client::{BibliographicSource, PubMedClient};
pub use config::Config;
pub use error::{ClientError, OutputError};
pub use pipeline::{PaperFinder, SearchOutcome};
