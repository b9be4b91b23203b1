//! Markdown dialect options.

use pulldown_cmark::Options;
use serde::Deserialize;

/// Extensions enabled on top of CommonMark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// GFM tables
    pub tables: bool,

    /// Footnote references and definitions
    pub footnotes: bool,

    /// `~~strikethrough~~`
    pub strikethrough: bool,

    /// `- [ ]` task list items
    pub tasklists: bool,

    /// Emit `id` attributes on headings
    pub heading_ids: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            tasklists: true,
            heading_ids: true,
        }
    }
}

impl RenderOptions {
    /// Plain CommonMark with no extensions and no heading ids.
    pub fn commonmark() -> Self {
        Self {
            tables: false,
            footnotes: false,
            strikethrough: false,
            tasklists: false,
            heading_ids: false,
        }
    }

    /// Parser flags for pulldown-cmark.
    pub(crate) fn to_parser_options(self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options |= Options::ENABLE_TABLES;
        }
        if self.footnotes {
            options |= Options::ENABLE_FOOTNOTES;
        }
        if self.strikethrough {
            options |= Options::ENABLE_STRIKETHROUGH;
        }
        if self.tasklists {
            options |= Options::ENABLE_TASKLISTS;
        }
        options
    }
}
