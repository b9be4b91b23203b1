//! Optional site.toml configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use readme_site_markdown::RenderOptions;
use readme_site_static::{BuildConfig, DEFAULT_PLACEHOLDER};
use serde::Deserialize;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    paths: PathsConfig,
    #[serde(default)]
    template: TemplateConfig,
    #[serde(default)]
    markdown: RenderOptions,
}

#[derive(Debug, Deserialize)]
struct PathsConfig {
    #[serde(default = "default_source")]
    source: PathBuf,
    #[serde(default = "default_template")]
    template: PathBuf,
    #[serde(default = "default_output")]
    output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            template: default_template(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TemplateConfig {
    #[serde(default = "default_placeholder")]
    placeholder: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

fn default_source() -> PathBuf {
    BuildConfig::default().source
}
fn default_template() -> PathBuf {
    BuildConfig::default().template
}
fn default_output() -> PathBuf {
    BuildConfig::default().output
}
fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl ConfigFile {
    pub fn into_build_config(self) -> BuildConfig {
        BuildConfig {
            source: self.paths.source,
            template: self.paths.template,
            output: self.paths.output,
            placeholder: self.template.placeholder,
            markdown: self.markdown,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if config.template.placeholder.is_empty() {
        anyhow::bail!("{}: template.placeholder must not be empty", path.display());
    }

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Default contents written by `init`.
pub const DEFAULT_CONFIG: &str = r#"# readme-site configuration

[paths]
# Markdown source
source = "README.md"

# HTML template containing the placeholder
template = "tool/template.html"

# Generated page
output = "index.html"

[template]
# Replaced (first occurrence only) by the rendered README
placeholder = "{{content}}"

[markdown]
tables = true
footnotes = true
strikethrough = true
tasklists = true
heading_ids = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("site.toml")).unwrap();

        assert_eq!(config.into_build_config(), BuildConfig::default());
    }

    #[test]
    fn default_config_matches_builtin_defaults() {
        let config: ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.into_build_config(), BuildConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: ConfigFile = toml::from_str(
            r#"
[paths]
output = "public/index.html"

[markdown]
heading_ids = false
"#,
        )
        .unwrap();

        let build = config.into_build_config();
        assert_eq!(build.output, PathBuf::from("public/index.html"));
        assert_eq!(build.source, PathBuf::from("README.md"));
        assert_eq!(build.placeholder, "{{content}}");
        assert!(!build.markdown.heading_ids);
        assert!(build.markdown.tables);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[paths\nsource = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn empty_placeholder_is_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[template]\nplaceholder = \"\"\n").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(err.to_string().contains("placeholder"));
    }
}
