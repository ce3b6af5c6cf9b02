//! Loader for labelled, delimiter-separated edge lists.
//!
//! Each record names a source vertex followed by `(target, weight)` pairs:
//!
//! ```text
//! Chicago,Denver,1003,Boston,983
//! Denver,Phoenix,821
//! ```

mod errors;
mod provider;

pub use errors::{EdgeListError, EdgeListErrorCode};
pub use provider::{EdgeListOptions, EdgeListProvider};
