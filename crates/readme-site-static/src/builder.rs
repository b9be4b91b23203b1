//! README page builder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use readme_site_markdown::{CommonMarkRenderer, MarkdownRenderer, RenderError, RenderOptions};

use crate::output::write_atomic;
use crate::substitute::{substitute_first, DEFAULT_PLACEHOLDER};

/// Configuration for building the page.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    /// Markdown source document
    pub source: PathBuf,

    /// HTML template containing the placeholder
    pub template: PathBuf,

    /// Output HTML file
    pub output: PathBuf,

    /// Literal token replaced by the rendered Markdown
    pub placeholder: String,

    /// Markdown dialect options for the default renderer
    pub markdown: RenderOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("README.md"),
            template: PathBuf::from("tool/template.html"),
            output: PathBuf::from("index.html"),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            markdown: RenderOptions::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// File that was written
    pub output: PathBuf,

    /// Size of the written document in bytes
    pub bytes: usize,

    /// Whether the template contained the placeholder
    pub substituted: bool,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to render markdown: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Builds the output page from a Markdown source and an HTML template.
pub struct SiteBuilder<R = CommonMarkRenderer> {
    config: BuildConfig,
    renderer: R,
}

impl SiteBuilder<CommonMarkRenderer> {
    /// Create a builder using the pulldown-cmark renderer.
    pub fn new(config: BuildConfig) -> Self {
        let renderer = CommonMarkRenderer::new(config.markdown);
        Self { config, renderer }
    }
}

impl<R: MarkdownRenderer> SiteBuilder<R> {
    /// Create a builder with a custom Markdown renderer.
    pub fn with_renderer(config: BuildConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// Read the inputs, render, substitute, and write the output.
    ///
    /// Nothing is written unless every earlier step succeeded.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let source = read_input(&self.config.source)?;
        let template = read_input(&self.config.template)?;

        let fragment = self.renderer.render(&source)?;
        tracing::debug!(
            "Rendered {} bytes of markdown with {}",
            source.len(),
            self.renderer.name()
        );

        let page = substitute_first(&template, &self.config.placeholder, &fragment);
        if !page.replaced {
            tracing::warn!(
                "Placeholder {} not found in {}; output is the template unchanged",
                self.config.placeholder,
                self.config.template.display()
            );
        }

        write_atomic(&self.config.output, &page.text).map_err(|source| BuildError::Write {
            path: self.config.output.clone(),
            source,
        })?;

        let duration = start.elapsed();

        Ok(BuildResult {
            output: self.config.output.clone(),
            bytes: page.text.len(),
            substituted: page.replaced,
            duration_ms: duration.as_millis() as u64,
        })
    }
}

fn read_input(path: &Path) -> Result<String, BuildError> {
    tracing::debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })
}
