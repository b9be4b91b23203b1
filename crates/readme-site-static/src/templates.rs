//! Starter HTML template written by `init`.

use minijinja::{context, Environment};

/// Render the starter page template.
///
/// The result is a complete HTML document whose `<body>` holds `placeholder`
/// verbatim, ready to be used as the build template.
pub fn starter_template(title: &str, placeholder: &str) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("starter.html", STARTER_TEMPLATE)?;

    let mut html = env.get_template("starter.html")?.render(context! {
        title => title,
        placeholder => placeholder,
    })?;
    html.push('\n');

    Ok(html)
}

const STARTER_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <style>
    body { max-width: 48rem; margin: 2rem auto; padding: 0 1rem; font-family: system-ui, sans-serif; line-height: 1.6; }
    pre { overflow-x: auto; padding: 1rem; background: #f6f8fa; border-radius: 6px; }
    code { font-family: ui-monospace, monospace; }
    table { border-collapse: collapse; }
    th, td { border: 1px solid #d0d7de; padding: 0.25rem 0.75rem; }
  </style>
</head>
<body>
  <main>
{{ placeholder | safe }}
  </main>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitute::{substitute_first, DEFAULT_PLACEHOLDER};

    #[test]
    fn keeps_placeholder_verbatim() {
        let html = starter_template("My Project", DEFAULT_PLACEHOLDER).unwrap();

        assert_eq!(html.matches("{{content}}").count(), 1);
        assert!(html.contains("<title>My Project</title>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn escapes_title() {
        let html = starter_template("Tom & Jerry <3", DEFAULT_PLACEHOLDER).unwrap();

        assert!(html.contains("<title>Tom &amp; Jerry &lt;3</title>"));
    }

    #[test]
    fn does_not_escape_custom_placeholder() {
        let html = starter_template("Docs", "<!-- README -->").unwrap();

        assert!(html.contains("\n<!-- README -->\n"));
    }

    #[test]
    fn starter_template_accepts_substitution() {
        let html = starter_template("Docs", DEFAULT_PLACEHOLDER).unwrap();

        let page = substitute_first(&html, DEFAULT_PLACEHOLDER, "<h1>Docs</h1>");

        assert!(page.replaced);
        assert!(page.text.contains("<main>\n<h1>Docs</h1>\n  </main>"));
    }
}
