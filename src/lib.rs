pub mod cli;
pub mod config;
pub mod confirm;
pub mod github;
pub mod output;
pub mod rate_limit;
pub mod run;
