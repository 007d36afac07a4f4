//! Error types for the layout vocabulary.
//!
//! Everything in this crate sits at the type boundary of the grid: raw
//! strings and integers come in, typed values come out. Values that fall
//! outside the documented domain are rejected here so that resolution and
//! validation never have to deal with them.

use thiserror::Error;

/// Errors that can occur while parsing or constructing layout values.
///
/// # Examples
///
/// ```rust
/// use gridcss::types::SpacingLevel;
/// use gridcss::GridCssError;
///
/// let err = SpacingLevel::new(15).unwrap_err();
/// assert!(matches!(err, GridCssError::OutOfRange { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridCssError {
    /// Invalid syntax in an inline style or prop string.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("syntax error: {0}")]
    InvalidSyntax(String),

    /// A prop name that the grid does not know about.
    #[error("unknown prop: {0}")]
    UnknownProp(String),

    /// A prop was given a value outside its vocabulary.
    #[error("invalid value for {prop}: {value:?}")]
    InvalidValue { prop: &'static str, value: String },

    /// A numeric value outside its allowed range.
    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A breakpoint registry that is too short, unordered, or repeats a key.
    #[error("invalid breakpoint registry: {0}")]
    InvalidBreakpoints(String),
}
