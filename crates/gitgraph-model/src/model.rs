//! In-memory snapshot of a repository's objects and references.

use std::collections::{BTreeMap, BTreeSet};

/// Identity of the local head node.
pub const HEAD: &str = "HEAD";

/// One entry of a tree object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TreeEntry {
    /// Hash of the referenced blob or subtree
    pub hash: String,
    /// File or directory name inside the tree
    pub name: String,
}

impl TreeEntry {
    pub fn new(hash: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            name: name.into(),
        }
    }
}

/// The local head pointer.
///
/// `target` is the checked-out branch name when HEAD is symbolic, or a
/// commit hash when detached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalHead {
    pub id: String,
    pub target: String,
}

impl LocalHead {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            id: HEAD.to_string(),
            target: target.into(),
        }
    }
}

/// Snapshot of a repository's object/reference graph.
///
/// Ordered collections keep iteration, and so the rendered graph text,
/// deterministic for a given repository state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoModel {
    /// Blob hashes
    pub blobs: BTreeSet<String>,
    /// Tree hash -> entries
    pub trees: BTreeMap<String, Vec<TreeEntry>>,
    /// Commit hash -> parent hashes followed by the tree hash
    pub commits: BTreeMap<String, Vec<String>>,
    /// Local branch name -> commit hash
    pub local_branches: BTreeMap<String, String>,
    /// `None` when the repository has no readable HEAD
    pub local_head: Option<LocalHead>,
    /// `remote/branch` -> commit hash
    pub remote_branches: BTreeMap<String, String>,
    /// `remote/HEAD` -> `remote/branch` it follows
    pub remote_heads: BTreeMap<String, String>,
    /// Remote name -> remote branch identities under it
    pub remote_servers: BTreeMap<String, Vec<String>>,
    /// Annotated tag object hash -> tagged object hash
    pub annotated_tags: BTreeMap<String, String>,
    /// Tag name -> tag object hash (annotated) or commit hash (lightweight)
    pub tags: BTreeMap<String, String>,
    /// Local branch name -> `remote/branch` it tracks
    pub upstreams: BTreeMap<String, String>,
}

impl RepoModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of content-addressed objects (blobs, trees, commits, annotated tags).
    pub fn object_count(&self) -> usize {
        self.blobs.len() + self.trees.len() + self.commits.len() + self.annotated_tags.len()
    }

    /// Number of named references, HEAD excluded.
    pub fn reference_count(&self) -> usize {
        self.local_branches.len()
            + self.remote_branches.len()
            + self.remote_heads.len()
            + self.tags.len()
    }

    pub fn with_blob(mut self, hash: impl Into<String>) -> Self {
        self.blobs.insert(hash.into());
        self
    }

    /// Add a tree with `(child_hash, name)` entries.
    pub fn with_tree(mut self, hash: impl Into<String>, entries: &[(&str, &str)]) -> Self {
        let entries = entries
            .iter()
            .map(|(child, name)| TreeEntry::new(*child, *name))
            .collect();
        self.trees.insert(hash.into(), entries);
        self
    }

    /// Add a commit referencing `refs` (parents and tree).
    pub fn with_commit(mut self, hash: impl Into<String>, refs: &[&str]) -> Self {
        let refs = refs.iter().map(|r| r.to_string()).collect();
        self.commits.insert(hash.into(), refs);
        self
    }

    pub fn with_local_branch(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.local_branches.insert(name.into(), target.into());
        self
    }

    pub fn with_head(mut self, target: impl Into<String>) -> Self {
        self.local_head = Some(LocalHead::new(target));
        self
    }

    pub fn with_remote_branch(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.remote_branches.insert(name.into(), target.into());
        self
    }

    pub fn with_remote_head(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.remote_heads.insert(name.into(), target.into());
        self
    }

    pub fn with_remote_server(mut self, name: impl Into<String>, refs: &[&str]) -> Self {
        let refs = refs.iter().map(|r| r.to_string()).collect();
        self.remote_servers.insert(name.into(), refs);
        self
    }

    pub fn with_annotated_tag(mut self, hash: impl Into<String>, target: impl Into<String>) -> Self {
        self.annotated_tags.insert(hash.into(), target.into());
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.tags.insert(name.into(), target.into());
        self
    }

    pub fn with_upstream(mut self, branch: impl Into<String>, tracked: impl Into<String>) -> Self {
        self.upstreams.insert(branch.into(), tracked.into());
        self
    }
}
