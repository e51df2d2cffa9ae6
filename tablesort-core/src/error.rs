//! Errors raised by the tag front-end and field order parsing

use thiserror::Error;

/// Errors from parsing tag invocations or ordering specs.
///
/// Rendering and auto-sort never fail: bad `dir` values and untrusted
/// fields degrade to the unspecified or unordered case instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A template tag was given the wrong number of arguments.
    #[error("{tag} tag takes {expected}")]
    TagArity {
        /// Tag name, e.g. `anchor`
        tag: &'static str,
        /// Human-readable arity, e.g. `exactly one argument`
        expected: &'static str,
    },

    /// A field order was empty or carried more than one leading `-`.
    #[error("Invalid sort field: {0:?}")]
    InvalidField(String),
}

/// Result alias for fallible core operations.
pub type Result<T> = std::result::Result<T, SortError>;
