//! Search → fetch → normalize → filter.

use crate::classify::AffiliationClassifier;
use crate::client::BibliographicSource;
use crate::error::ClientResult;
use crate::filter::filter_non_academic;
use crate::models::FilteredPaper;
use crate::normalize::normalize_all;

/// Result of one run, with the count at each stage.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Identifiers returned by the search.
    pub ids_found: usize,

    /// Records returned by the fetch.
    pub records_retrieved: usize,

    /// Papers with at least one non-academic author.
    pub papers: Vec<FilteredPaper>,
}

/// Runs the paper-finding pipeline against a [`BibliographicSource`].
#[derive(Debug)]
pub struct PaperFinder<S> {
    source: S,
    classifier: AffiliationClassifier,
}

impl<S: BibliographicSource> PaperFinder<S> {
    /// Create a finder with the default academic keyword set.
    pub fn new(source: S) -> Self {
        Self::with_classifier(source, AffiliationClassifier::default())
    }

    /// Create a finder with a specific classifier.
    pub const fn with_classifier(source: S, classifier: AffiliationClassifier) -> Self {
        Self { source, classifier }
    }

    /// The underlying source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Run the pipeline for `query`, fetching at most `max_results` records.
    ///
    /// Stages run one after another; the first error ends the run.
    ///
    /// # Errors
    ///
    /// Propagates any search or fetch error from the source.
    pub async fn find(&self, query: &str, max_results: u32) -> ClientResult<SearchOutcome> {
        tracing::debug!("Query: {query}");
        tracing::debug!("Searching PubMed...");

        let ids = self.source.search_ids(query, max_results).await?;
        tracing::debug!("Found {} papers", ids.len());

        let records = if ids.is_empty() {
            Vec::new()
        } else {
            self.source.fetch_records(&ids).await?
        };
        tracing::debug!("Retrieved metadata for {} papers", records.len());

        let papers = filter_non_academic(normalize_all(&records), &self.classifier);
        tracing::debug!("Found {} papers with non-academic authors", papers.len());

        Ok(SearchOutcome { ids_found: ids.len(), records_retrieved: records.len(), papers })
    }
}
