//! Site builder for readme-site.
//!
//! Renders a Markdown README and injects the result into an HTML template at
//! a literal placeholder.

pub mod builder;
pub mod output;
pub mod substitute;
pub mod templates;
pub mod watcher;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use substitute::{substitute_first, Substitution, DEFAULT_PLACEHOLDER};
pub use templates::starter_template;
pub use watcher::{FileWatcher, WatchEvent};
