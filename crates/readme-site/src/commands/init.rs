//! Scaffold a template (and config) in a project.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use readme_site_static::{starter_template, BuildConfig};

use crate::config::{load_config, DEFAULT_CONFIG};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool, title: Option<String>) -> Result<()> {
    tracing::info!("Initializing readme-site...");

    let config = load_config(config_path)?.into_build_config();
    let title = title.unwrap_or_else(default_title);

    let created = scaffold(&config, config_path, yes, &title)?;
    if created.is_empty() {
        tracing::warn!("Nothing to do, all files already exist. Use --yes to overwrite.");
        return Ok(());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'readme-site' to build {}.", config.output.display());

    Ok(())
}

/// Write the config file, the starter template and a README if missing.
///
/// Existing config and template files are only replaced when `overwrite` is
/// set. An existing README is never touched. Returns the files written.
fn scaffold(
    config: &BuildConfig,
    config_path: &Path,
    overwrite: bool,
    title: &str,
) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    if !config_path.exists() || overwrite {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
        created.push(config_path.to_path_buf());
    }

    if !config.template.exists() || overwrite {
        if let Some(parent) = config.template.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let html = starter_template(title, &config.placeholder)
            .context("Failed to render starter template")?;
        fs::write(&config.template, html)
            .with_context(|| format!("Failed to write {}", config.template.display()))?;
        tracing::info!("Created {}", config.template.display());
        created.push(config.template.clone());
    }

    if !config.source.exists() {
        fs::write(&config.source, format!("# {}\n\nDescribe your project here.\n", title))
            .with_context(|| format!("Failed to write {}", config.source.display()))?;
        tracing::info!("Created {}", config.source.display());
        created.push(config.source.clone());
    }

    Ok(created)
}

/// Name of the current directory, used as the page title.
fn default_title() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "Documentation".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn temp_config() -> (TempDir, BuildConfig, PathBuf) {
        let temp = tempdir().unwrap();
        let config = BuildConfig {
            source: temp.path().join("README.md"),
            template: temp.path().join("tool").join("template.html"),
            output: temp.path().join("index.html"),
            ..Default::default()
        };
        let config_path = temp.path().join("site.toml");
        (temp, config, config_path)
    }

    #[test]
    fn scaffolds_missing_files() {
        let (_temp, config, config_path) = temp_config();

        let created = scaffold(&config, &config_path, false, "Demo").unwrap();

        assert_eq!(created.len(), 3);
        let template = fs::read_to_string(&config.template).unwrap();
        assert!(template.contains("{{content}}"));
        assert!(template.contains("<title>Demo</title>"));
        assert!(fs::read_to_string(&config.source)
            .unwrap()
            .starts_with("# Demo"));
        assert_eq!(fs::read_to_string(&config_path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn keeps_existing_files_without_overwrite() {
        let (_temp, config, config_path) = temp_config();
        fs::create_dir_all(config.template.parent().unwrap()).unwrap();
        fs::write(&config.template, "custom {{content}}").unwrap();
        fs::write(&config_path, "# mine\n").unwrap();

        let created = scaffold(&config, &config_path, false, "Demo").unwrap();

        assert_eq!(created, vec![config.source.clone()]);
        assert_eq!(
            fs::read_to_string(&config.template).unwrap(),
            "custom {{content}}"
        );
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "# mine\n");
    }

    #[test]
    fn overwrite_never_replaces_readme() {
        let (_temp, config, config_path) = temp_config();
        fs::write(&config.source, "# Real README\n").unwrap();

        let created = scaffold(&config, &config_path, true, "Demo").unwrap();

        assert!(!created.contains(&config.source));
        assert_eq!(
            fs::read_to_string(&config.source).unwrap(),
            "# Real README\n"
        );
    }

    #[test]
    fn scaffolded_project_builds() {
        let (_temp, config, config_path) = temp_config();
        scaffold(&config, &config_path, false, "Demo").unwrap();

        readme_site_static::SiteBuilder::new(config.clone())
            .build()
            .unwrap();

        let html = fs::read_to_string(&config.output).unwrap();
        assert!(html.contains("<h1 id=\"demo\">Demo</h1>"));
        assert!(!html.contains("{{content}}"));
    }
}
