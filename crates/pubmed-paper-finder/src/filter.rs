//! Selection of papers with non-academic authors.

use crate::classify::{AffiliationClassifier, AffiliationKind};
use crate::models::{FilteredPaper, NormalizedPaper};

/// Keep only non-academic (author, affiliation) pairs; drop papers left with none.
///
/// Order is preserved. An author with several affiliations is judged per
/// affiliation, so the same name can be kept more than once.
#[must_use]
pub fn filter_non_academic<I>(papers: I, classifier: &AffiliationClassifier) -> Vec<FilteredPaper>
where
    I: IntoIterator<Item = NormalizedPaper>,
{
    papers.into_iter().filter_map(|paper| filter_paper(paper, classifier)).collect()
}

/// Filter a single paper. `None` if every affiliation is academic.
#[must_use]
pub fn filter_paper(
    paper: NormalizedPaper,
    classifier: &AffiliationClassifier,
) -> Option<FilteredPaper> {
    let NormalizedPaper { pubmed_id, title, publication_date, authorships } = paper;

    let retained = authorships
        .into_iter()
        .filter(|pair| classifier.classify(&pair.affiliation) == AffiliationKind::NonAcademic)
        .collect();

    FilteredPaper::new(pubmed_id, title, publication_date, retained)
}
