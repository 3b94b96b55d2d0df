//! Classic comparison sorts and positional searches over numeric slices.
//!
//! This crate is a reference implementation of the textbook algorithms, written to
//! be read. Each module documents the strategy, the cost, and the contract callers
//! can rely on (in place or allocating, stable or not, sorted input required or not).
//!
//! # Algorithms
//!
//! - **Sorting** ([`selection_sort`], [`bubble_sort`], [`insertion_sort`], [`merge_sort`],
//!   [`shell_sort`], [`quick_sort`], [`heap_sort`]) — all in place except merge sort
//! - **Searching** ([`linear_search`], [`binary_search`], [`interpolation_search`],
//!   [`fibonacci_search`]) — `None` means not found
//! - **Catalogue** ([`SortAlgorithm`], [`SearchAlgorithm`]) — runtime selection and
//!   checked entry points that reject incomparable values such as `NaN`
//!
//! The raw functions never fail. Only the `try_*` methods return [`Error`].

mod algorithm;
mod error;
mod search;
mod sort;

pub use algorithm::*;
pub use error::*;
pub use search::*;
pub use sort::*;
