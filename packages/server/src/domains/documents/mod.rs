//! Documents domain - turning uploaded PDF bytes into plain text.

pub mod extractor;

pub use extractor::{
    extract_pages, extract_text, extract_text_blocking, DocumentParseError, ExtractedText,
};
