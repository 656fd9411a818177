//! Flattened paper records.

use serde::{Deserialize, Serialize};

/// Placeholder identifier when a citation carries no PMID.
pub const UNKNOWN_ID: &str = "?";

/// Title used when a record has no `ArticleTitle`.
pub const NO_TITLE: &str = "No title";

/// Publication date used when neither `Year` nor `MedlineDate` is present.
pub const UNKNOWN_DATE: &str = "Unknown";

/// One author paired with one of their listed affiliations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorAffiliation {
    /// Display name ("<given> <family>").
    pub author: String,

    /// Affiliation text, verbatim.
    pub affiliation: String,
}

impl AuthorAffiliation {
    /// Create a new pair.
    #[must_use]
    pub fn new(author: impl Into<String>, affiliation: impl Into<String>) -> Self {
        Self { author: author.into(), affiliation: affiliation.into() }
    }
}

/// A PubMed record flattened into (author, affiliation) pairs.
///
/// An author with two affiliations contributes two pairs; an author with none
/// contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPaper {
    /// PubMed identifier.
    pub pubmed_id: String,

    /// Article title.
    pub title: String,

    /// Year or free-text MedlineDate, passed through verbatim.
    pub publication_date: String,

    /// Author/affiliation pairs in record order.
    pub authorships: Vec<AuthorAffiliation>,
}

impl NormalizedPaper {
    /// Author names, one per pair.
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.authorships.iter().map(|a| a.author.as_str())
    }

    /// Affiliations, one per pair, aligned with [`Self::authors`].
    pub fn affiliations(&self) -> impl Iterator<Item = &str> {
        self.authorships.iter().map(|a| a.affiliation.as_str())
    }
}

/// A paper with at least one non-academic author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredPaper {
    /// PubMed identifier.
    pub pubmed_id: String,

    /// Article title.
    pub title: String,

    /// Publication date as normalized.
    pub publication_date: String,

    /// Retained pairs; never empty.
    company_authors: Vec<AuthorAffiliation>,
}

impl FilteredPaper {
    /// Create a filtered paper. Returns `None` when no pairs are given, since a
    /// paper without non-academic authors is not a result.
    #[must_use]
    pub fn new(
        pubmed_id: impl Into<String>,
        title: impl Into<String>,
        publication_date: impl Into<String>,
        company_authors: Vec<AuthorAffiliation>,
    ) -> Option<Self> {
        if company_authors.is_empty() {
            return None;
        }

        Some(Self {
            pubmed_id: pubmed_id.into(),
            title: title.into(),
            publication_date: publication_date.into(),
            company_authors,
        })
    }

    /// Retained (author, affiliation) pairs.
    #[must_use]
    pub fn company_authors(&self) -> &[AuthorAffiliation] {
        &self.company_authors
    }

    /// Names of the non-academic authors, in record order.
    #[must_use]
    pub fn non_academic_authors(&self) -> Vec<&str> {
        self.company_authors.iter().map(|a| a.author.as_str()).collect()
    }

    /// Non-academic affiliations, aligned with [`Self::non_academic_authors`].
    #[must_use]
    pub fn company_affiliations(&self) -> Vec<&str> {
        self.company_authors.iter().map(|a| a.affiliation.as_str()).collect()
    }
}
