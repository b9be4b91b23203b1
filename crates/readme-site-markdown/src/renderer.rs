//! Markdown renderers.

use pulldown_cmark::{html, CowStr, Event, Parser, Tag, TagEnd};

use crate::options::RenderOptions;
use crate::slug::Slugger;

/// Errors that can occur while rendering Markdown.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Renderer {renderer} failed: {message}")]
    Failed {
        renderer: &'static str,
        message: String,
    },
}

/// Converts Markdown text to an HTML fragment.
///
/// The site builder treats implementations as pure functions: the same input
/// must always produce the same output.
pub trait MarkdownRenderer: Send + Sync {
    /// Renderer identifier (e.g., "commonmark")
    fn name(&self) -> &'static str;

    /// Render a Markdown document to HTML.
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// pulldown-cmark backed renderer.
#[derive(Debug, Clone, Default)]
pub struct CommonMarkRenderer {
    options: RenderOptions,
}

impl CommonMarkRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn name(&self) -> &'static str {
        "commonmark"
    }

    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let parser = Parser::new_ext(markdown, self.options.to_parser_options());

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        if self.options.heading_ids {
            html::push_html(&mut html_output, with_heading_ids(parser).into_iter());
        } else {
            html::push_html(&mut html_output, parser);
        }

        Ok(html_output)
    }
}

/// Fill in `id` on every heading that does not already carry one.
fn with_heading_ids<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events: Vec<Event<'a>> = Vec::new();
    let mut slugger = Slugger::new();

    // (index of the Start(Heading) event, accumulated heading text)
    let mut current_heading: Option<(usize, String)> = None;

    for event in parser {
        match &event {
            Event::Start(Tag::Heading { .. }) => {
                current_heading = Some((events.len(), String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, ref mut heading_text)) = current_heading {
                    heading_text.push_str(text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((start, heading_text)) = current_heading.take() {
                    if let Event::Start(Tag::Heading { id, .. }) = &mut events[start] {
                        if id.is_none() {
                            *id = slugger.slug(&heading_text).map(CowStr::from);
                        }
                    }
                }
            }
            _ => {}
        }

        events.push(event);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(markdown: &str, options: RenderOptions) -> String {
        CommonMarkRenderer::new(options).render(markdown).unwrap()
    }

    #[test]
    fn renders_plain_commonmark() {
        let html = render("# Hello\n\nWorld", RenderOptions::commonmark());

        assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
    }

    #[test]
    fn adds_heading_ids_by_default() {
        let html = render("# Hello\n\nWorld", RenderOptions::default());

        assert_eq!(html, "<h1 id=\"hello\">Hello</h1>\n<p>World</p>\n");
    }

    #[test]
    fn heading_ids_are_hyphenated_like_github() {
        let html = render("# Hello World\n\n## Getting_Started!\n", RenderOptions::default());

        assert!(html.contains("<h1 id=\"hello-world\">Hello World</h1>"));
        assert!(html.contains("<h2 id=\"getting-started\">Getting_Started!</h2>"));
    }

    #[test]
    fn heading_ids_include_inline_code_and_dedupe() {
        let html = render(
            "## The `build` step\n\n## Usage\n\n## Usage\n",
            RenderOptions::default(),
        );

        assert!(html.contains("<h2 id=\"the-build-step\">The <code>build</code> step</h2>"));
        assert!(html.contains("<h2 id=\"usage\">Usage</h2>"));
        assert!(html.contains("<h2 id=\"usage-1\">Usage</h2>"));
    }

    #[test]
    fn punctuation_heading_has_no_id() {
        let html = render("# ???", RenderOptions::default());

        assert_eq!(html, "<h1>???</h1>\n");
    }

    #[test]
    fn renders_gfm_extensions() {
        let source = "| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n\n- [x] done\n";

        let html = render(source, RenderOptions::default());

        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn commonmark_leaves_tables_as_text() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n", RenderOptions::commonmark());

        assert!(!html.contains("<table>"));
    }

    #[test]
    fn renders_code_blocks_escaped() {
        let html = render("```html\n<b>x</b>\n```\n", RenderOptions::default());

        assert_eq!(
            html,
            "<pre><code class=\"language-html\">&lt;b&gt;x&lt;/b&gt;\n</code></pre>\n"
        );
    }

    #[test]
    fn is_deterministic() {
        let renderer = CommonMarkRenderer::default();
        let source = "# Title\n\nSome *text* and a [link](https://example.com).\n";

        assert_eq!(
            renderer.render(source).unwrap(),
            renderer.render(source).unwrap()
        );
    }
}
