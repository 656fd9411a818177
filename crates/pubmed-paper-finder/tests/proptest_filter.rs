//! Property-based tests for the classifier and filter.

use proptest::prelude::*;
use pubmed_paper_finder::classify::{ACADEMIC_KEYWORDS, AffiliationClassifier};
use pubmed_paper_finder::filter::filter_non_academic;
use pubmed_paper_finder::models::{AuthorAffiliation, NormalizedPaper};

fn arb_pair() -> impl Strategy<Value = AuthorAffiliation> {
    (
        "[A-Za-z ]{0,20}",
        prop_oneof![
            "[A-Za-z ,.]{0,40}",
            (proptest::sample::select(ACADEMIC_KEYWORDS), "[A-Za-z ]{0,10}")
                .prop_map(|(k, rest)| format!("{rest} {k} {rest}")),
        ],
    )
        .prop_map(|(author, affiliation)| AuthorAffiliation::new(author, affiliation))
}

fn arb_paper() -> impl Strategy<Value = NormalizedPaper> {
    ("[0-9]{1,8}", proptest::collection::vec(arb_pair(), 0..6)).prop_map(|(id, authorships)| {
        NormalizedPaper {
            pubmed_id: id,
            title: "T".to_string(),
            publication_date: "2020".to_string(),
            authorships,
        }
    })
}

proptest! {
    /// Changing case never changes the classification.
    #[test]
    fn classification_ignores_case(affiliation in "[A-Za-z ,.]{0,60}") {
        let classifier = AffiliationClassifier::default();
        prop_assert_eq!(
            classifier.is_academic(&affiliation),
            classifier.is_academic(&affiliation.to_uppercase())
        );
        prop_assert_eq!(
            classifier.is_academic(&affiliation),
            classifier.is_academic(&affiliation.to_lowercase())
        );
    }

    /// Embedding a keyword anywhere makes an affiliation academic.
    #[test]
    fn embedded_keyword_is_academic(
        prefix in "[A-Za-z ]{0,20}",
        suffix in "[A-Za-z ]{0,20}",
        keyword in proptest::sample::select(ACADEMIC_KEYWORDS),
    ) {
        let classifier = AffiliationClassifier::default();
        let affiliation = format!("{prefix}{}{suffix}", keyword.to_uppercase());
        prop_assert!(classifier.is_academic(&affiliation));
    }

    /// Filtered papers are non-empty, keep only non-academic pairs, and appear in input order.
    #[test]
    fn filter_keeps_only_non_academic_pairs(papers in prop::collection::vec(arb_paper(), 0..8)) {
        let classifier = AffiliationClassifier::default();
        let expected: Vec<(String, Vec<AuthorAffiliation>)> = papers
            .iter()
            .map(|p| {
                let kept: Vec<AuthorAffiliation> = p
                    .authorships
                    .iter()
                    .filter(|a| !classifier.is_academic(&a.affiliation))
                    .cloned()
                    .collect();
                (p.pubmed_id.clone(), kept)
            })
            .filter(|(_, kept)| !kept.is_empty())
            .collect();

        let filtered = filter_non_academic(papers, &classifier);

        prop_assert_eq!(filtered.len(), expected.len());
        for (paper, (id, kept)) in filtered.iter().zip(&expected) {
            prop_assert_eq!(&paper.pubmed_id, id);
            prop_assert_eq!(paper.company_authors(), kept.as_slice());
            prop_assert_eq!(paper.non_academic_authors().len(), paper.company_affiliations().len());
            prop_assert!(!paper.non_academic_authors().is_empty());
        }
    }
}
