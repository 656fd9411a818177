//! Data models for PubMed records and filtered results.
//!
//! Raw responses are kept as an owned XML tree; everything downstream works on
//! the flattened [`NormalizedPaper`] and [`FilteredPaper`] types.

mod paper;
mod raw;
mod xml;

pub use paper::{
    AuthorAffiliation, FilteredPaper, NO_TITLE, NormalizedPaper, UNKNOWN_DATE, UNKNOWN_ID,
};
pub use raw::RawRecord;
pub use xml::{XmlElement, XmlNode};
