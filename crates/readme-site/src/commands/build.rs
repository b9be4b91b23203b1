//! Page build command.

use std::path::Path;

use anyhow::Result;
use readme_site_static::{BuildResult, SiteBuilder};

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?.into_build_config();

    tracing::info!(
        "Building {} from {}...",
        config.output.display(),
        config.source.display()
    );

    let result = SiteBuilder::new(config).build()?;
    report(&result);

    Ok(())
}

pub(crate) fn report(result: &BuildResult) {
    tracing::info!(
        "Wrote {} ({} bytes) in {}ms",
        result.output.display(),
        result.bytes,
        result.duration_ms
    );
}
