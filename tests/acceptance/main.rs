use cucumber::World;
use std::collections::HashMap;
use std::fmt;
use std::process::ExitStatus;
use std::time::Duration;
use wiremock::MockServer;

#[derive(Default, World)]
pub struct CloserWorld {
    /// Issue numbers per search page, in page order
    pub search_pages: Vec<Vec<u64>>,
    pub search_total_count: Option<u64>,
    pub search_status: Option<u16>,
    /// Issue listing entries as (number, is_pull_request)
    pub listed_issues: Vec<(u64, bool)>,
    pub close_statuses: HashMap<u64, u16>,
    pub server: Option<MockServer>,
    pub captured_output: Vec<u8>,
    pub run_result: Option<anyhow::Result<()>>,
    pub elapsed: Option<Duration>,
    /// Contents of `.issue-closer/config.json` placed in the binary's working directory
    pub stray_config: Option<String>,
    pub captured_error: Vec<u8>,
    pub command_status: Option<ExitStatus>,
}

impl fmt::Debug for CloserWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloserWorld")
            .field("search_pages", &self.search_pages)
            .field("search_total_count", &self.search_total_count)
            .field("search_status", &self.search_status)
            .field("listed_issues", &self.listed_issues)
            .field("close_statuses", &self.close_statuses)
            .field("captured_output", &String::from_utf8_lossy(&self.captured_output))
            .field("run_result", &self.run_result)
            .field("elapsed", &self.elapsed)
            .field("stray_config", &self.stray_config)
            .field("captured_error", &String::from_utf8_lossy(&self.captured_error))
            .field("command_status", &self.command_status)
            .finish()
    }
}

#[tokio::main]
async fn main() {
    CloserWorld::run("features").await;
}
