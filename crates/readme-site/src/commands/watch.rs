//! Rebuild-on-change command.

use std::future::Future;
use std::path::Path;

use anyhow::{Context, Result};
use readme_site_markdown::MarkdownRenderer;
use readme_site_static::{BuildError, FileWatcher, SiteBuilder, WatchEvent};
use tokio::sync::mpsc::Receiver;

use crate::commands::build::report;
use crate::config::load_config;

/// Counters for one watch session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct WatchStats {
    builds: usize,
    failures: usize,
}

/// Run the watch command.
///
/// Builds once, then rebuilds whenever the source or template changes. Build
/// failures are logged and the watcher keeps running.
pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?.into_build_config();
    let watched = vec![config.source.clone(), config.template.clone()];
    let builder = SiteBuilder::new(config);

    rebuild(&builder);

    let (_watcher, mut rx) = FileWatcher::new(&watched).context("Failed to start file watcher")?;

    tracing::info!(
        "Watching {} and {} for changes (Ctrl+C to stop)",
        watched[0].display(),
        watched[1].display()
    );

    let stats = watch_loop(&builder, &mut rx, tokio::signal::ctrl_c()).await;
    tracing::debug!("Rebuilt {} times, {} failed", stats.builds, stats.failures);

    Ok(())
}

/// Rebuild on every event until the channel closes or `shutdown` resolves.
async fn watch_loop<R, F>(
    builder: &SiteBuilder<R>,
    rx: &mut Receiver<WatchEvent>,
    shutdown: F,
) -> WatchStats
where
    R: MarkdownRenderer,
    F: Future,
{
    // Created once so a signal arriving during a rebuild is not lost
    tokio::pin!(shutdown);
    let mut stats = WatchStats::default();

    loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else {
                    tracing::warn!("File watcher stopped");
                    break;
                };
                match &event {
                    WatchEvent::Changed(path) => tracing::info!("Changed: {}", path.display()),
                    WatchEvent::Removed(path) => tracing::warn!("Removed: {}", path.display()),
                }
                stats.builds += 1;
                if !rebuild(builder) {
                    stats.failures += 1;
                }
            }
            _ = &mut shutdown => {
                tracing::info!("Stopping");
                break;
            }
        }
    }

    stats
}

/// Build once, logging the outcome. Returns whether the build succeeded.
fn rebuild<R: MarkdownRenderer>(builder: &SiteBuilder<R>) -> bool {
    match builder.build() {
        Ok(result) => {
            report(&result);
            true
        }
        Err(e) => {
            tracing::error!("Build failed: {}", describe(e));
            false
        }
    }
}

/// One-line message with the full cause chain, `outer: inner: innermost`.
fn describe(error: BuildError) -> String {
    format!("{:#}", anyhow::Error::from(error))
}
