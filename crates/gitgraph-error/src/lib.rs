//! # gitgraph-error
//!
//! One error type shared by every git-graph crate.
//!
//! - **ErrorKind**: what went wrong (e.g. `ModelUnavailable`, `UnsupportedFormat`)
//! - **Operation**: which step failed, with the call chain kept as context
//! - **Context**: key/value pairs that locate the failure (path, format, ...)
//! - **Source**: the wrapped underlying error, if any
//!
//! ## Usage
//!
//! ```rust
//! use gitgraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::UnsupportedFormat, "format not recognized")
//!         .with_operation("render::graphviz")
//!         .with_context("format", "xyz"))
//! }
//! ```
//!
//! Every failure is terminal for an invocation: there is no retry status.
//! External errors are wrapped at the call site with `set_source(err)`;
//! only `std::io::Error` converts implicitly.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the git-graph Error
pub type Result<T> = std::result::Result<T, Error>;
