//! CSV output tests.

use pubmed_paper_finder::error::OutputError;
use pubmed_paper_finder::formatters::{
    CSV_HEADER, read_csv, read_csv_file, write_csv, write_csv_file,
};
use pubmed_paper_finder::models::{AuthorAffiliation, FilteredPaper};

fn sample_papers() -> Vec<FilteredPaper> {
    vec![
        FilteredPaper::new(
            "38000001",
            "Safety of Drug X, a \"first-in-class\" inhibitor",
            "2021",
            vec![
                AuthorAffiliation::new("Jane Doe", "Acme Pharma, Basel, Switzerland"),
                AuthorAffiliation::new("Robert Smith", "Genentech Inc."),
            ],
        )
        .unwrap(),
        FilteredPaper::new(
            "38000005",
            "Überblick über Biomarker",
            "2019 Jul-Aug",
            vec![AuthorAffiliation::new("Zoë Müller", "")],
        )
        .unwrap(),
    ]
}

fn to_csv_string(papers: &[FilteredPaper]) -> String {
    let mut buf = Vec::new();
    write_csv(&mut buf, papers).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_header_row() {
    let output = to_csv_string(&[]);
    assert_eq!(
        output,
        "PubmedID,Title,Publication Date,Non-Academic Authors,Company Affiliations\n"
    );
    assert_eq!(CSV_HEADER.len(), 5);
}

#[test]
fn test_multi_valued_cells_joined() {
    let output = to_csv_string(&sample_papers());
    let first_row = output.lines().nth(1).unwrap();

    assert!(first_row.starts_with("38000001,"));
    assert!(first_row.contains("Jane Doe; Robert Smith"));
    assert!(first_row.contains("\"Acme Pharma, Basel, Switzerland; Genentech Inc.\""));
    assert!(first_row.contains("\"Safety of Drug X, a \"\"first-in-class\"\" inhibitor\""));
}

#[test]
fn test_round_trip_in_memory() {
    let papers = sample_papers();
    let output = to_csv_string(&papers);

    let decoded = read_csv(output.as_bytes()).unwrap();
    assert_eq!(decoded, papers);
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    let papers = sample_papers();

    write_csv_file(&path, &papers).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(String::from_utf8(bytes).unwrap().contains("Zoë Müller"));

    let decoded = read_csv_file(&path).unwrap();
    assert_eq!(decoded.len(), 2);
    for (original, read_back) in papers.iter().zip(&decoded) {
        assert_eq!(read_back.pubmed_id, original.pubmed_id);
        assert_eq!(read_back.title, original.title);
        assert_eq!(read_back.publication_date, original.publication_date);
        assert_eq!(read_back.non_academic_authors(), original.non_academic_authors());
        assert_eq!(read_back.company_affiliations(), original.company_affiliations());
    }
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("results.csv");

    let err = write_csv_file(&path, &sample_papers()).unwrap_err();
    assert!(matches!(err, OutputError::Io(_)));
}

#[test]
fn test_read_rejects_unknown_header() {
    let input = "id,title\n1,x\n";
    let err = read_csv(input.as_bytes()).unwrap_err();
    assert!(matches!(err, OutputError::MalformedRow { row: 0, .. }));
}

#[test]
fn test_single_author_affiliation_with_separator_round_trips() {
    let papers = vec![
        FilteredPaper::new(
            "38000002",
            "Multi-site study",
            "2022",
            vec![AuthorAffiliation::new("Ann Lee", "Acme Corp; Basel, Switzerland")],
        )
        .unwrap(),
    ];

    let decoded = read_csv(to_csv_string(&papers).as_bytes()).unwrap();
    assert_eq!(decoded, papers);
}

#[test]
fn test_read_rejects_misaligned_cells() {
    let input = "PubmedID,Title,Publication Date,Non-Academic Authors,Company Affiliations\n\
                 1,T,2020,A; B,Acme\n";
    let err = read_csv(input.as_bytes()).unwrap_err();
    assert!(matches!(err, OutputError::MalformedRow { row: 1, .. }));
}
