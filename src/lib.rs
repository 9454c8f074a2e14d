// Export the archive search modules
pub mod archive;
pub mod args;
pub mod output;
pub mod search;

// Re-export tests for integration testing
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::archive::{
    fetch_snapshots, filter_captures, new_client, snapshot_url, CaptureRecord, SearchConfig,
    WAYBACK_BASE_URL,
};
pub use crate::args::Args;
pub use crate::output::write_urls;
pub use crate::search::run_searches;
