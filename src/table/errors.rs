//! Lookup table error types.
//!
//! ┌ construction errors : bad inputs to [`crate::table::Table::new`]
//! │   ├ mismatched `args` / `vals` lengths
//! │   ├ empty input
//! │   ├ non-finite sample
//! │   ├ duplicate argument after sorting
//! │   ├ domain width overflowing f64
//! │   └ unrecognized interpolant name
//! │
//! ├ [`TableError::OutOfBounds`]        : evaluation outside `[arg_min, arg_max]`
//! ├ [`TableError::InvalidInterpolant`] : interpolant tag inconsistent with cached state
//! │
//! └ input errors : reading samples from a file
//!     ├ I/O failure
//!     └ malformed line

use std::io;
use thiserror::Error;

use super::interpolant::Interpolant;

/// Coarse classification of a [`TableError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Construction,
    OutOfBounds,
    InvalidInterpolant,
    Input,
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("unequal length: args has {args_len} elements, vals has {vals_len}")]
    UnequalLength { args_len: usize, vals_len: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("non-finite value in {input} at index {idx}")]
    NonFiniteVec { input: &'static str, idx: usize },

    #[error("duplicate argument {arg} after sorting")]
    DuplicateArg { arg: f64 },

    #[error("domain [{arg_min}, {arg_max}] is wider than f64 can represent")]
    DomainTooWide { arg_min: f64, arg_max: f64 },

    #[error("unknown interpolant {name:?}; expected one of linear, spline, floor, ceil")]
    UnknownInterpolant { name: String },

    #[error("lookup argument {got} out of bounds in [{arg_min}, {arg_max}]")]
    OutOfBounds { got: f64, arg_min: f64, arg_max: f64 },

    #[error("interpolant {interpolant} has no usable coefficient cache")]
    InvalidInterpolant { interpolant: Interpolant },

    #[error("failed to read table file {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl TableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::UnequalLength { .. }
            | TableError::EmptyInput
            | TableError::NonFiniteVec { .. }
            | TableError::DuplicateArg { .. }
            | TableError::DomainTooWide { .. }
            | TableError::UnknownInterpolant { .. } => ErrorKind::Construction,
            TableError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            TableError::InvalidInterpolant { .. } => ErrorKind::InvalidInterpolant,
            TableError::Io { .. } | TableError::Parse { .. } => ErrorKind::Input,
        }
    }
}
