use std::fmt;
use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Failures raised while reading an edge list.
///
/// Line numbers are 1-based and count every physical line, including blank
/// and comment lines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// Reading from the underlying source failed.
    #[error("failed to read edge list: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
    /// A source or target field was empty after trimming.
    #[error("line {line}: vertex label must not be empty")]
    EmptyLabel {
        /// Offending line.
        line: usize,
    },
    /// A target label was not followed by a weight.
    #[error("line {line}: target `{target}` has no weight")]
    MissingWeight {
        /// Offending line.
        line: usize,
        /// Target label left without a weight.
        target: String,
    },
    /// A weight field did not parse as a signed 64-bit integer.
    #[error("line {line}: invalid weight `{value}`: {source}")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Raw field contents.
        value: String,
        /// Parse failure.
        source: ParseIntError,
    },
}

/// Stable codes describing [`EdgeListError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EdgeListErrorCode {
    /// Reading from the source failed.
    Io,
    /// A vertex label was empty.
    EmptyLabel,
    /// A target had no weight.
    MissingWeight,
    /// A weight was not an integer.
    InvalidWeight,
}

impl EdgeListErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "EDGELIST_IO",
            Self::EmptyLabel => "EDGELIST_EMPTY_LABEL",
            Self::MissingWeight => "EDGELIST_MISSING_WEIGHT",
            Self::InvalidWeight => "EDGELIST_INVALID_WEIGHT",
        }
    }
}

impl fmt::Display for EdgeListErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EdgeListError {
    /// Retrieve the stable [`EdgeListErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> EdgeListErrorCode {
        match self {
            Self::Io { .. } => EdgeListErrorCode::Io,
            Self::EmptyLabel { .. } => EdgeListErrorCode::EmptyLabel,
            Self::MissingWeight { .. } => EdgeListErrorCode::MissingWeight,
            Self::InvalidWeight { .. } => EdgeListErrorCode::InvalidWeight,
        }
    }

    /// Returns the offending line for parse failures.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Io { .. } => None,
            Self::EmptyLabel { line }
            | Self::MissingWeight { line, .. }
            | Self::InvalidWeight { line, .. } => Some(*line),
        }
    }
}
