//! CSV output, and reading it back.

use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{OutputError, OutputResult};
use crate::models::{AuthorAffiliation, FilteredPaper};

/// Column headers, in order.
pub const CSV_HEADER: [&str; 5] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-Academic Authors",
    "Company Affiliations",
];

/// Separator for multi-valued cells.
pub const MULTI_VALUE_SEPARATOR: &str = "; ";

/// Write papers as CSV (header row always included).
pub fn write_csv<W: Write>(writer: W, papers: &[FilteredPaper]) -> OutputResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for paper in papers {
        let authors = paper.non_academic_authors().join(MULTI_VALUE_SEPARATOR);
        let affiliations = paper.company_affiliations().join(MULTI_VALUE_SEPARATOR);

        wtr.write_record([
            paper.pubmed_id.as_str(),
            paper.title.as_str(),
            paper.publication_date.as_str(),
            authors.as_str(),
            affiliations.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write papers to it as UTF-8 CSV.
pub fn write_csv_file(path: impl AsRef<Path>, papers: &[FilteredPaper]) -> OutputResult<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_csv(file, papers)?;

    tracing::debug!(path = %path.display(), rows = papers.len(), "CSV written");
    Ok(())
}

/// Parse CSV produced by [`write_csv`].
///
/// Multi-valued cells are split on [`MULTI_VALUE_SEPARATOR`]. A row with a
/// single author keeps its affiliation cell whole, so affiliations that list
/// several institutions with `"; "` read back intact. With several authors the
/// split is ambiguous, and a row whose cells disagree in length is rejected.
pub fn read_csv<R: Read>(reader: R) -> OutputResult<Vec<FilteredPaper>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?;
    if headers.iter().ne(CSV_HEADER) {
        return Err(OutputError::malformed_row(0, format!("unexpected header: {headers:?}")));
    }

    let mut papers = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let row = index + 1;
        let record = result?;

        let field = |i: usize| record.get(i).unwrap_or_default();
        let authors: Vec<&str> = field(3).split(MULTI_VALUE_SEPARATOR).collect();
        let affiliations: Vec<&str> = if authors.len() == 1 {
            vec![field(4)]
        } else {
            field(4).split(MULTI_VALUE_SEPARATOR).collect()
        };

        if authors.len() != affiliations.len() {
            return Err(OutputError::malformed_row(
                row,
                format!(
                    "{} authors but {} affiliations",
                    authors.len(),
                    affiliations.len()
                ),
            ));
        }

        let pairs = authors
            .into_iter()
            .zip(affiliations)
            .map(|(author, affiliation)| AuthorAffiliation::new(author, affiliation))
            .collect();

        let paper = FilteredPaper::new(field(0), field(1), field(2), pairs)
            .ok_or_else(|| OutputError::malformed_row(row, "no non-academic authors"))?;
        papers.push(paper);
    }

    Ok(papers)
}

/// Read a CSV file written by [`write_csv_file`].
///
/// Same splitting rules as [`read_csv`]: rows with several authors whose
/// affiliations contain [`MULTI_VALUE_SEPARATOR`] cannot be read back.
pub fn read_csv_file(path: impl AsRef<Path>) -> OutputResult<Vec<FilteredPaper>> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}
