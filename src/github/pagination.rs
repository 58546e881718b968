use crate::github::error::Result;
use serde_json::Value;

/// One response of a paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub body: Value,
    /// Target of the `rel="next"` link, absent on the last page
    pub next: Option<String>,
}

/// Source of pages. Implemented by the HTTP client and by test fakes.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn get_page(&self, url: &str) -> Result<Page>;
}

/// Extracts the `rel="next"` URL from an RFC 8288 `Link` header value.
///
/// Returns `None` when no link carries the `next` relation.
pub fn next_link(header: &str) -> Option<String> {
    let mut rest = header;
    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let end = after.find('>')?;
        let url = &after[..end];
        let tail = &after[end + 1..];
        let params_end = tail.find('<').unwrap_or(tail.len());
        if tail[..params_end].split(';').any(is_next_rel) {
            return Some(url.to_string());
        }
        rest = &tail[params_end..];
    }
    None
}

fn is_next_rel(param: &str) -> bool {
    let Some((key, value)) = param.split_once('=') else {
        return false;
    };
    key.trim().eq_ignore_ascii_case("rel")
        && value
            .trim()
            .trim_end_matches(',')
            .trim_matches('"')
            .split_whitespace()
            .any(|rel| rel.eq_ignore_ascii_case("next"))
}

/// Follows `next` links from `start_url` until the server stops supplying one,
/// appending whatever `project` extracts from each page body.
///
/// Issue numbers keep discovery order and are not deduplicated. The first
/// failing request or projection aborts the walk.
pub async fn collect_pages<P, F>(fetcher: &P, start_url: &str, mut project: F) -> Result<Vec<u64>>
where
    P: PageFetcher,
    F: FnMut(&Value) -> Result<Vec<u64>>,
{
    let mut numbers = Vec::new();
    let mut next_url = Some(start_url.to_string());
    let mut page_count = 0;

    while let Some(url) = next_url {
        let page = fetcher.get_page(&url).await?;
        let found = project(&page.body)?;
        page_count += 1;
        tracing::info!(page = page_count, found = found.len(), "Fetched page");
        numbers.extend(found);
        next_url = page.next;
    }

    Ok(numbers)
}
