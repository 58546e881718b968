pub mod client;
pub mod close;
pub mod error;
pub mod pagination;
pub mod repo;
pub mod search;
