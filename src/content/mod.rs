//! Content module - tagged content files and the body transform

mod fields;
mod markdown;

pub use fields::ContentFields;
pub use markdown::MarkdownRenderer;
