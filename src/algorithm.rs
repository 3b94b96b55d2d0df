//! Algorithm catalogue and checked entry points.
//!
//! [`SortAlgorithm`] and [`SearchAlgorithm`] name every algorithm in the crate so
//! callers (the perf harness, benches, tests) can pick one at runtime and dispatch
//! through a single call. The `try_*` methods validate input before any work starts:
//! a value that does not compare with itself (`f64::NAN`) has no place in a total
//! order, so it is rejected with [`Error::InvalidInput`] and the caller's slice is
//! left exactly as it was.

use std::fmt;
use std::str::FromStr;

use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::search::{binary_search, fibonacci_search, interpolation_search, linear_search};
use crate::sort::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort, shell_sort,
};

/// Checks that every element is comparable with itself.
///
/// Returns the index of the first offending element.
pub fn ensure_comparable<T: PartialOrd>(values: &[T]) -> Result<()> {
    match values.iter().position(|v| v.partial_cmp(v).is_none()) {
        Some(index) => {
            tracing::debug!(index, len = values.len(), "rejecting incomparable input");
            Err(Error::InvalidInput { index })
        }
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Selection,
    Bubble,
    Insertion,
    Merge,
    Shell,
    Quick,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 7] = [
        SortAlgorithm::Selection,
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Shell,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Selection => "selection_sort",
            SortAlgorithm::Bubble => "bubble_sort",
            SortAlgorithm::Insertion => "insertion_sort",
            SortAlgorithm::Merge => "merge_sort",
            SortAlgorithm::Shell => "shell_sort",
            SortAlgorithm::Quick => "quick_sort",
            SortAlgorithm::Heap => "heap_sort",
        }
    }

    /// `false` only for merge sort, which builds a new vector.
    pub fn sorts_in_place(self) -> bool {
        !matches!(self, SortAlgorithm::Merge)
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Merge
        )
    }

    /// Sorts `values` with this algorithm.
    ///
    /// Merge sort's freshly allocated result is copied back into `values`, so every
    /// algorithm has the same observable effect through this entry point.
    pub fn sort<T: PartialOrd + Copy>(self, values: &mut [T]) {
        match self {
            SortAlgorithm::Selection => selection_sort(values),
            SortAlgorithm::Bubble => bubble_sort(values),
            SortAlgorithm::Insertion => insertion_sort(values),
            SortAlgorithm::Merge => {
                let sorted = merge_sort(values);
                values.copy_from_slice(&sorted);
            }
            SortAlgorithm::Shell => shell_sort(values),
            SortAlgorithm::Quick => quick_sort(values),
            SortAlgorithm::Heap => heap_sort(values),
        }
    }

    /// Validates `values`, then sorts them. On error `values` is untouched.
    pub fn try_sort<T: PartialOrd + Copy>(self, values: &mut [T]) -> Result<()> {
        ensure_comparable(values)?;
        self.sort(values);
        Ok(())
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    Interpolation,
    Fibonacci,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 4] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::Binary,
        SearchAlgorithm::Interpolation,
        SearchAlgorithm::Fibonacci,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear_search",
            SearchAlgorithm::Binary => "binary_search",
            SearchAlgorithm::Interpolation => "interpolation_search",
            SearchAlgorithm::Fibonacci => "fibonacci_search",
        }
    }

    /// Whether the input must already be ascending for the answer to be reliable.
    pub fn requires_sorted(self) -> bool {
        !matches!(self, SearchAlgorithm::Linear)
    }

    pub fn search<T: PartialOrd + ToPrimitive>(self, values: &[T], target: T) -> Option<usize> {
        match self {
            SearchAlgorithm::Linear => linear_search(values, target),
            SearchAlgorithm::Binary => binary_search(values, target),
            SearchAlgorithm::Interpolation => interpolation_search(values, target),
            SearchAlgorithm::Fibonacci => fibonacci_search(values, target),
        }
    }

    /// Validates `values` and `target`, then searches.
    ///
    /// Sortedness is not checked; an unsorted slice gives an unspecified answer,
    /// not an error.
    pub fn try_search<T>(self, values: &[T], target: T) -> Result<Option<usize>>
    where
        T: PartialOrd + ToPrimitive,
    {
        if target.partial_cmp(&target).is_none() {
            tracing::debug!(algorithm = self.name(), "rejecting incomparable target");
            return Err(Error::InvalidTarget);
        }
        ensure_comparable(values)?;
        Ok(self.search(values, target))
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
