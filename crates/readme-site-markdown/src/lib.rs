//! Markdown rendering for readme-site.
//!
//! The site builder only depends on the [`MarkdownRenderer`] trait. The
//! default implementation, [`CommonMarkRenderer`], is backed by pulldown-cmark.

pub mod options;
pub mod renderer;
pub mod slug;

pub use options::RenderOptions;
pub use renderer::{CommonMarkRenderer, MarkdownRenderer, RenderError};
