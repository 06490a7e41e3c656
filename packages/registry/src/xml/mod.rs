//! XML helpers for reading parsed `roxmltree` documents.

mod utils;

pub use utils::{get_tag_name, parse_document, MarkupNode};
