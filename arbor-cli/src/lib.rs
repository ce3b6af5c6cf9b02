//! Library half of the `arbor` binary.
//!
//! Keeping argument handling, execution and rendering here lets tests drive
//! the full pipeline in-process.

pub mod cli;
pub mod logging;
