//! Selective graph projection for git repositories.
//!
//! Turns a [`RepoModel`] into a color-coded DOT graph restricted to the
//! node categories a selection specifier asks for.
//!
//! # Module Structure
//!
//! - [`selection`]: selection keywords and letter strings
//! - [`category`]: the category table (letters, colors, labels, members)
//! - [`project`]: node selection and graph projection
//! - [`graph`]: the abstract graph and its DOT serialization
//! - [`dot`]: DOT format utilities

pub mod category;
pub mod dot;
pub mod graph;
pub mod project;
pub mod selection;

pub use category::{CATEGORIES, Category, LabelRule};
pub use dot::DotBuilder;
pub use graph::{GitGraph, GraphEdge, GraphNode};
pub use project::{node_selection, project};
pub use selection::{ALL_NODES, BRANCH_NODES, COMMIT_NODES, DEFAULT_NODES, resolve};

