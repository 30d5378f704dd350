//! Convert a Markdown file to a styled HTML document.
//!
//! The Markdown-to-HTML conversion is delegated to the GitHub Markdown API;
//! locally we extract an optional front-matter block, substitute the result
//! into an HTML template and write it next to the source file.

pub mod assets;
pub mod compose;
pub mod convert;
pub mod document;
pub mod render;

pub use assets::{Assets, Theme};
pub use convert::convert;
pub use document::Document;
pub use render::{GithubRenderer, Render};
