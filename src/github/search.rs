use crate::github::error::Result;
use crate::github::pagination::{PageFetcher, collect_pages};
use crate::github::repo::RepoId;
use serde::Deserialize;
use serde_json::Value;

/// Which open issues to collect.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueQuery {
    /// Open issues whose title contains the substring, via the search endpoint
    TitleContains(String),
    /// Every open issue in the repository, pull requests excluded
    AllOpen,
}

/// Issue numbers gathered by an [`IssueQuery`], plus what the server said
/// about how many it had.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collected {
    pub numbers: Vec<u64>,
    /// `total_count` of the first search page; list mode has none
    pub total_count: Option<u64>,
    /// Set when any search page reported `incomplete_results`
    pub incomplete: bool,
}

impl Collected {
    /// Message describing a result set the server cut short, if it was.
    pub fn truncation_warning(&self) -> Option<String> {
        let found = self.numbers.len() as u64;
        match self.total_count {
            Some(total) if total > found => Some(format!(
                "Warning: the search reported {total} matching issues but returned only {found}."
            )),
            _ if self.incomplete => Some(
                "Warning: the search timed out and returned incomplete results.".to_string(),
            ),
            _ => None,
        }
    }
}

/// Search URL for open issues in `repo` with `search` in the title.
///
/// The substring is interpolated as given.
pub fn search_url(api_base: &str, search: &str, repo: &RepoId) -> String {
    format!("{api_base}/search/issues?q={search}+state:open+in:title+repo:{repo}&per_page=100")
}

/// Issue listing URL for `repo`; the endpoint defaults to open issues.
pub fn list_url(api_base: &str, repo: &RepoId) -> String {
    format!("{api_base}/repos/{repo}/issues")
}

/// One page of `GET /search/issues`.
#[derive(Deserialize, Debug)]
pub struct SearchPage {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<IssueRef>,
}

/// The fields of an issue this tool reads.
#[derive(Deserialize, Debug)]
pub struct IssueRef {
    pub number: u64,
    /// Present and non-null only for pull requests
    #[serde(default)]
    pub pull_request: Option<Value>,
}

/// Decodes a search response page.
pub fn parse_search_page(body: &Value) -> Result<SearchPage> {
    Ok(SearchPage::deserialize(body)?)
}

/// Numbers of the entries of an issue listing that are not pull requests.
pub fn open_issue_numbers(body: &Value) -> Result<Vec<u64>> {
    Ok(Vec::<IssueRef>::deserialize(body)?
        .into_iter()
        .filter(|issue| issue.pull_request.is_none())
        .map(|issue| issue.number)
        .collect())
}

impl IssueQuery {
    pub async fn collect<P: PageFetcher>(
        &self,
        fetcher: &P,
        api_base: &str,
        repo: &RepoId,
    ) -> Result<Collected> {
        match self {
            IssueQuery::TitleContains(search) => {
                let mut total_count = None;
                let mut incomplete = false;
                let numbers =
                    collect_pages(fetcher, &search_url(api_base, search, repo), |body| {
                        let page = parse_search_page(body)?;
                        if total_count.is_none() {
                            total_count = page.total_count;
                        }
                        incomplete |= page.incomplete_results;
                        Ok(page.items.into_iter().map(|issue| issue.number).collect())
                    })
                    .await?;
                Ok(Collected {
                    numbers,
                    total_count,
                    incomplete,
                })
            }
            IssueQuery::AllOpen => {
                let numbers =
                    collect_pages(fetcher, &list_url(api_base, repo), open_issue_numbers).await?;
                Ok(Collected {
                    numbers,
                    ..Collected::default()
                })
            }
        }
    }
}
