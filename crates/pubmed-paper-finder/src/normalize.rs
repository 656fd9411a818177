//! Flattening of raw PubMed records.
//!
//! Missing optional fields never fail; they fall back to the placeholders in
//! [`crate::models`].

use crate::models::{
    AuthorAffiliation, NO_TITLE, NormalizedPaper, RawRecord, UNKNOWN_DATE, UNKNOWN_ID, XmlElement,
};

/// Flatten one record into a [`NormalizedPaper`].
#[must_use]
pub fn normalize(record: &RawRecord) -> NormalizedPaper {
    let article = record.article();

    let pubmed_id = record
        .citation()
        .child("PMID")
        .map(XmlElement::trimmed_text)
        .unwrap_or_else(|| UNKNOWN_ID.to_string());

    let title = article
        .child("ArticleTitle")
        .map(XmlElement::trimmed_text)
        .unwrap_or_else(|| NO_TITLE.to_string());

    let authorships: Vec<AuthorAffiliation> = article
        .child("AuthorList")
        .map(|list| list.children_named("Author").flat_map(expand_author).collect())
        .unwrap_or_default();

    NormalizedPaper { pubmed_id, title, publication_date: publication_date(article), authorships }
}

/// Flatten a batch of records, preserving order.
#[must_use]
pub fn normalize_all(records: &[RawRecord]) -> Vec<NormalizedPaper> {
    records.iter().map(normalize).collect()
}

/// `Year`, else `MedlineDate`, else [`UNKNOWN_DATE`].
fn publication_date(article: &XmlElement) -> String {
    let Some(pub_date) = article.path(&["Journal", "JournalIssue", "PubDate"]) else {
        return UNKNOWN_DATE.to_string();
    };

    ["Year", "MedlineDate"]
        .iter()
        .filter_map(|field| pub_date.child(field))
        .map(XmlElement::trimmed_text)
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// One pair per `AffiliationInfo` of the author.
fn expand_author(author: &XmlElement) -> Vec<AuthorAffiliation> {
    let name = display_name(author);

    author
        .children_named("AffiliationInfo")
        .map(|info| {
            let affiliation =
                info.child("Affiliation").map(XmlElement::trimmed_text).unwrap_or_default();
            AuthorAffiliation::new(name.clone(), affiliation)
        })
        .collect()
}

/// "<ForeName> <LastName>", or the group name for collective authors.
fn display_name(author: &XmlElement) -> String {
    let fore = author.child("ForeName").map(XmlElement::trimmed_text);
    let last = author.child("LastName").map(XmlElement::trimmed_text);

    if fore.is_none() && last.is_none() {
        return author.child("CollectiveName").map(XmlElement::trimmed_text).unwrap_or_default();
    }

    format!("{} {}", fore.unwrap_or_default(), last.unwrap_or_default()).trim().to_string()
}
