//! JSON output formatting.

use serde_json::{Value, json};

use crate::error::OutputResult;
use crate::models::FilteredPaper;

/// JSON object for one paper, keyed like the CSV columns.
#[must_use]
pub fn paper_json(paper: &FilteredPaper) -> Value {
    json!({
        "PubmedID": paper.pubmed_id,
        "Title": paper.title,
        "PublicationDate": paper.publication_date,
        "NonAcademicAuthors": paper.non_academic_authors(),
        "CompanyAffiliations": paper.company_affiliations(),
    })
}

/// Pretty-printed JSON array of papers.
pub fn format_papers_json(papers: &[FilteredPaper]) -> OutputResult<String> {
    let values: Vec<Value> = papers.iter().map(paper_json).collect();
    Ok(serde_json::to_string_pretty(&values)?)
}
