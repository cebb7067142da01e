// Corpus model and loading — dated documents read from a CSV source.

pub mod document;
pub mod reader;

pub use document::{Document, DocumentId};
