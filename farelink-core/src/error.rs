/// Caller-visible failure modes of a search. Every failure resolves to one
/// of these; nothing in the search core panics.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Mandatory parameters missing or malformed. Reported before any cache
    /// or network activity.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The cache layer could not be reached. The orchestrator downgrades
    /// this to a miss; it never fails a search on its own.
    #[error("cache unavailable: {0}")]
    CacheUnavailable(String),

    /// The external data service rejected or failed the fetch.
    #[error("upstream fetch failed: {0}")]
    Upstream(String),

    /// The offload worker rejected the filter/sort request or stopped.
    /// Surfaced as a search failure since unfiltered results cannot be
    /// returned as success.
    #[error("query evaluation failed: {0}")]
    Evaluation(String),
}
