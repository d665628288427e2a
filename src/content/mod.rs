//! Semi-structured content fields
//!
//! Simulation descriptions/overviews and task introductions are JSON-encoded
//! strings interpreted only for display. Parsing is tolerant by contract:
//! anything unreadable degrades to a safe default with a logged warning,
//! never an error.

pub mod richtext;
pub mod sections;

pub use richtext::{clean_html, content_to_html};
pub use sections::{
    Document, Section, encode_document, encode_sections, normalize_sections, parse_document,
    parse_sections,
};
