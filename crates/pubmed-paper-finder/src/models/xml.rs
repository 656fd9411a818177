//! Owned XML element tree for E-utilities responses.
//!
//! PubMed records are deeply nested and carry inline markup (`<i>`, `<sup>`)
//! inside text fields, so responses are read into a small generic tree that keeps
//! text and child elements in document order.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{ClientError, ClientResult};

/// A node inside an element: either a child element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// Child element.
    Element(XmlElement),
    /// Unescaped character data.
    Text(String),
}

/// An XML element with its content in document order. Attributes are not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Element name, including any namespace prefix.
    pub name: String,

    /// Child elements and text runs.
    pub nodes: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), nodes: Vec::new() }
    }

    /// Builder helper: append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.nodes.push(XmlNode::Element(child));
        self
    }

    /// Builder helper: append a text run.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(XmlNode::Text(text.into()));
        self
    }

    /// Iterate over child elements.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.nodes.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        })
    }

    /// Iterate over child elements with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> {
        self.children().filter(move |el| el.name == name)
    }

    /// First child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children().find(|el| el.name == name)
    }

    /// Follow a chain of child names, taking the first match at each step.
    #[must_use]
    pub fn path(&self, names: &[&str]) -> Option<&Self> {
        names.iter().try_fold(self, |el, name| el.child(name))
    }

    /// Remove and return the first child element with the given name.
    pub fn take_child(&mut self, name: &str) -> Option<Self> {
        let index = self
            .nodes
            .iter()
            .position(|node| matches!(node, XmlNode::Element(el) if el.name == name))?;

        match self.nodes.remove(index) {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        }
    }

    /// All text in this element and its descendants, concatenated in order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    /// Text content with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed_text(&self) -> String {
        self.text_content().trim().to_string()
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.nodes {
            match node {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Parse a document and return its root element.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Xml`] for syntax errors and
    /// [`ClientError::MalformedResponse`] for empty or truncated documents.
    pub fn parse(xml: &str) -> ClientResult<Self> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut stack: Vec<Self> = Vec::new();
        let mut root: Option<Self> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    stack.push(Self::new(String::from_utf8_lossy(e.name().as_ref())));
                }
                Event::Empty(e) => {
                    let el = Self::new(String::from_utf8_lossy(e.name().as_ref()));
                    attach(&mut stack, &mut root, el);
                }
                Event::End(_) => {
                    if let Some(el) = stack.pop() {
                        attach(&mut stack, &mut root, el);
                    }
                }
                Event::Text(e) => {
                    if let Some(current) = stack.last_mut() {
                        current.nodes.push(XmlNode::Text(e.unescape()?.into_owned()));
                    }
                }
                Event::CData(e) => {
                    if let Some(current) = stack.last_mut() {
                        let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                        current.nodes.push(XmlNode::Text(text));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(ClientError::malformed(format!(
                "document ended inside <{}>",
                open.name
            )));
        }

        root.ok_or_else(|| ClientError::malformed("document has no root element"))
    }
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, el: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.nodes.push(XmlNode::Element(el)),
        None => {
            if root.is_none() {
                *root = Some(el);
            }
        }
    }
}
