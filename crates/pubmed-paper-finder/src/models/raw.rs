//! Raw PubMed records as returned by `efetch`.

use super::{XmlElement, XmlNode};
use crate::error::{ClientError, ClientResult};

/// One `<PubmedArticle>` from an efetch response.
///
/// Construction checks that the `MedlineCitation` and `Article` containers are
/// present, so every later read degrades to a default instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// `MedlineCitation` with its `Article` child taken out.
    citation: XmlElement,

    /// `MedlineCitation/Article`.
    article: XmlElement,
}

impl RawRecord {
    /// Validate and wrap a `<PubmedArticle>` element.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MalformedResponse`] if the element is not a
    /// `PubmedArticle` or lacks `MedlineCitation` / `Article`.
    pub fn from_element(mut element: XmlElement) -> ClientResult<Self> {
        if element.name != "PubmedArticle" {
            return Err(ClientError::malformed(format!(
                "expected <PubmedArticle>, found <{}>",
                element.name
            )));
        }

        let mut citation = element
            .take_child("MedlineCitation")
            .ok_or_else(|| ClientError::malformed("PubmedArticle without MedlineCitation"))?;

        let article = citation.take_child("Article").ok_or_else(|| {
            let pmid = citation.child("PMID").map(XmlElement::trimmed_text);
            ClientError::malformed(format!(
                "MedlineCitation without Article (PMID {})",
                pmid.as_deref().unwrap_or("?")
            ))
        })?;

        Ok(Self { citation, article })
    }

    /// Parse an efetch `<PubmedArticleSet>` document.
    ///
    /// Only `PubmedArticle` entries are returned; `PubmedBookArticle` and other
    /// siblings are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML is invalid, the root is not
    /// `PubmedArticleSet`, or any article is missing a required container.
    pub fn parse_article_set(xml: &str) -> ClientResult<Vec<Self>> {
        let root = XmlElement::parse(xml)?;
        if root.name != "PubmedArticleSet" {
            return Err(ClientError::malformed(format!(
                "expected <PubmedArticleSet>, found <{}>",
                root.name
            )));
        }

        root.nodes
            .into_iter()
            .filter_map(|node| match node {
                XmlNode::Element(el) if el.name == "PubmedArticle" => Some(el),
                _ => None,
            })
            .map(Self::from_element)
            .collect()
    }

    /// The `MedlineCitation` element, without its `Article`.
    #[must_use]
    pub const fn citation(&self) -> &XmlElement {
        &self.citation
    }

    /// The `MedlineCitation/Article` element.
    #[must_use]
    pub const fn article(&self) -> &XmlElement {
        &self.article
    }
}
