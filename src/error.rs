//! Errors reported at the checked entry points.
//!
//! The raw sorting and searching functions never fail. Absence of a search
//! target is `None`, not an error. Only input that makes the order itself
//! undefined is rejected, and only by the `try_*` entry points.

/// Result alias used by the checked entry points.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An element is not comparable with itself (for example `f64::NAN`),
    /// so no total order over the input exists.
    #[error("value at index {index} is not comparable")]
    InvalidInput { index: usize },

    /// The search target is not comparable with itself.
    #[error("search target is not comparable")]
    InvalidTarget,

    /// No algorithm is registered under the given name.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
