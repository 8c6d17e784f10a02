// crates/worldlens-core/src/error.rs

use thiserror::Error;

/// Ways a dataset fetch can settle badly.
///
/// Every variant renders to the human-readable message the view shows next
/// to its retry affordance; none are recovered locally. Supersession of an
/// in-flight request is *not* an error and deliberately has no variant here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The transport never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered, but not with a success status.
    #[error("the dataset endpoint answered with HTTP {0}")]
    Status(u16),

    /// The response body is not the expected homogeneous country array.
    #[error("malformed dataset payload: {0}")]
    Payload(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
