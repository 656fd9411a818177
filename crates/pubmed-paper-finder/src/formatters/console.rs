//! Plain-text console output.

use crate::models::FilteredPaper;

/// Format one paper as a text block preceded by a blank line.
#[must_use]
pub fn format_paper_text(paper: &FilteredPaper) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", paper.title));
    output.push_str(&format!("PubMed ID: {}\n", paper.pubmed_id));
    output.push_str(&format!("Published: {}\n", paper.publication_date));
    output.push_str(&format!(
        "Non-academic Authors: {}\n",
        paper.non_academic_authors().join(", ")
    ));
    output.push_str(&format!("Affiliations: {}\n", paper.company_affiliations().join(", ")));

    output
}

/// Format all papers, one block each. Empty input gives an empty string.
#[must_use]
pub fn format_papers_text(papers: &[FilteredPaper]) -> String {
    papers.iter().map(format_paper_text).collect()
}
