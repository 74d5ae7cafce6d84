//! Repository object/reference model.
//!
//! [`RepoModel`] is a read-only snapshot of everything git-graph can draw:
//! blobs, trees, commits, branches, tags, remotes and upstream links.
//! [`open`] builds one from a repository on disk; tests and other callers
//! can also assemble one by hand.

pub mod builder;
pub mod model;

pub use builder::open;
pub use model::{HEAD, LocalHead, RepoModel, TreeEntry};
