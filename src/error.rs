//! Error taxonomy for extraction and fetching.
//!
//! Every failure names the stage that failed, so callers can tell an
//! expected gap (the daily board is taken down outside business hours)
//! from structural drift of the upstream page.

use thiserror::Error;

/// Failures raised by the two extractors.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No element matched the table-discovery heuristic.
    #[error("could not find the café quote table in the page")]
    TableNotFound,

    /// A table matched, but every row was filtered out.
    #[error("quote table found, but it had no valid quote rows")]
    EmptyTable,

    /// The `__NEXT_DATA__` script island is absent.
    #[error("could not find the __NEXT_DATA__ island in the page")]
    DataIslandNotFound,

    /// The island was located but its payload is not valid JSON.
    #[error("the __NEXT_DATA__ payload is not valid JSON: {0}")]
    MalformedDataIsland(#[from] serde_json::Error),

    /// The JSON parsed, but the monthly history path is absent or not the
    /// expected list shape.
    #[error("page data has no monthly history section")]
    MissingHistorySection,

    /// The history section is present but flattened to zero records.
    #[error("monthly history section is present but empty")]
    EmptyHistory,
}

/// Convenience result type for the extractors.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Failures raised by the fetch collaborator.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a usable response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page answered with a non-success status.
    #[error("quote page returned HTTP {status}")]
    Status { status: u16 },
}

/// Umbrella error for the fetch-and-extract convenience functions.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
