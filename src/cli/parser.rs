use crate::github::repo::RepoId;
use clap::Parser;

/// Close open GitHub issues whose title contains a substring, or all open issues.
///
/// Handy for issues migrated from another repository with a `[CLOSED]` prefix.
#[derive(Parser, Debug, PartialEq)]
#[command(name = "issue-closer", version, about)]
pub struct Cli {
    /// Your OAuth2 token
    #[arg(short, long)]
    pub oauth: String,

    /// Repository to search (owner/name)
    #[arg(short, long)]
    pub repo: RepoId,

    /// The substring you want to match issue titles with
    #[arg(short, long, default_value = "[closed]")]
    pub search: String,

    /// Close all open issues (not pull requests) instead of searching
    #[arg(short, long, conflicts_with = "search")]
    pub all_open: bool,

    /// Minimum seconds between close requests
    #[arg(short, long, value_name = "SECONDS", default_value_t = 2.0)]
    pub interval: f64,

    /// GitHub REST API base URL
    #[arg(long, hide = true, default_value = crate::github::client::DEFAULT_API_BASE)]
    pub api_base: String,
}
