//! Keyword heuristic for academic affiliations.

/// Substrings that mark an affiliation as academic. Matched case-insensitively.
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "hospital",
    "school",
    "institute",
    "dept",
    "department",
    "faculty",
    "center",
    "centre",
    "lab",
];

/// Outcome of classifying one affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffiliationKind {
    /// Matches an academic keyword; excluded from results.
    Academic,
    /// Matches no keyword; kept as a company affiliation.
    NonAcademic,
}

/// Classifies affiliations by substring match against a fixed keyword set.
///
/// Matching is plain substring containment on the lower-cased text, so
/// "Labcorp" counts as academic and an empty affiliation does not.
#[derive(Debug, Clone, Copy)]
pub struct AffiliationClassifier {
    keywords: &'static [&'static str],
}

impl AffiliationClassifier {
    /// Create a classifier over the given keywords, which must be lower-case.
    #[must_use]
    pub const fn new(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }

    /// Keywords this classifier matches.
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    /// Classify one affiliation string.
    #[must_use]
    pub fn classify(&self, affiliation: &str) -> AffiliationKind {
        if self.is_academic(affiliation) {
            AffiliationKind::Academic
        } else {
            AffiliationKind::NonAcademic
        }
    }

    /// True if any keyword occurs in the lower-cased affiliation.
    #[must_use]
    pub fn is_academic(&self, affiliation: &str) -> bool {
        let lowered = affiliation.to_lowercase();
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new(ACADEMIC_KEYWORDS)
    }
}
