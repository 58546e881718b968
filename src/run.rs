use crate::cli::parser::Cli;
use crate::config;
use crate::confirm::{self, Decision};
use crate::github::client::GitHubClient;
use crate::github::close::BatchCloser;
use crate::github::search::IssueQuery;
use crate::output;
use crate::rate_limit::RateLimiter;
use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use std::io::{BufRead, Write};

/// Collects matching issues, asks the operator on `input`, then closes them.
///
/// Everything printed also goes to `stdout_additional` so tests can capture it.
/// Usage errors are printed by clap and exit the process with status 2.
pub async fn run(
    args: Vec<String>,
    mut stdout_additional: Option<&mut dyn Write>,
    input: &mut dyn BufRead,
) -> anyhow::Result<()> {
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            output::print(&err.to_string(), &mut stdout_additional)?;
            return Ok(());
        }
        Err(err) => err.exit(),
    };

    let settings = config::Settings::from_cli(&cli)?;

    let client = GitHubClient::new(&cli.api_base, &cli.oauth)
        .context("Failed to create HTTP client")?;

    let query = if cli.all_open {
        IssueQuery::AllOpen
    } else {
        IssueQuery::TitleContains(settings.search.clone())
    };
    tracing::debug!(repo = %settings.repository, ?query, "Collecting issues");

    let collected = query
        .collect(&client, client.api_base(), &settings.repository)
        .await
        .context("Failed to collect issues")?;

    if let Some(warning) = collected.truncation_warning() {
        tracing::warn!("{warning}");
        output::println(&warning, &mut stdout_additional)?;
    }

    output::print(
        &format!("{} issues found. Close these? [y/N]: ", collected.numbers.len()),
        &mut stdout_additional,
    )?;
    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    match confirm::decide(&answer) {
        Decision::Close => {
            let limiter = RateLimiter::new(settings.interval);
            tracing::debug!(interval = ?limiter.interval(), "Closing issues");
            let mut closer = BatchCloser::new(limiter);
            closer
                .close_all(
                    &client,
                    &settings.repository,
                    &collected.numbers,
                    |report| output::println(&report.to_string(), &mut stdout_additional),
                )
                .await?;
            output::println(
                "Done. You may need to re-run if there were more issues than the search was willing to return.",
                &mut stdout_additional,
            )?;
        }
        Decision::Abort => {
            output::println("OK. No action.", &mut stdout_additional)?;
        }
    }

    Ok(())
}
