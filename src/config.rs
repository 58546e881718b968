use crate::cli::parser::Cli;
use crate::github::repo::RepoId;
use anyhow::{Context, Result};
use std::time::Duration;

/// Run parameters validated from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub repository: RepoId,
    pub search: String,
    pub interval: Duration,
}

impl Settings {
    /// Rejects an empty search substring and intervals that are not a
    /// positive, representable number of seconds.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if !cli.all_open && cli.search.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "Search substring must not be empty. Use --all-open to close every open issue."
            ));
        }

        let interval = Duration::try_from_secs_f64(cli.interval)
            .ok()
            .filter(|interval| !interval.is_zero())
            .with_context(|| {
                format!(
                    "Interval must be a positive number of seconds, got {}",
                    cli.interval
                )
            })?;

        Ok(Settings {
            repository: cli.repo.clone(),
            search: cli.search.clone(),
            interval,
        })
    }
}
