//! Build a [`RepoModel`] from a git repository using libgit2.

use std::path::Path;
use std::time::Instant;

use git2::{BranchType, ObjectType, Oid, Reference, ReferenceType, Repository};
use tracing::{debug, info, warn};

use gitgraph_error::{Error, ErrorKind, Result};

use crate::model::{LocalHead, RepoModel, TreeEntry};

const HEADS_PREFIX: &str = "refs/heads/";
const REMOTES_PREFIX: &str = "refs/remotes/";
const TAGS_PREFIX: &str = "refs/tags/";

/// Open the repository at `path` and snapshot its objects and references.
///
/// `path` may be a working tree or a bare repository. Anything that is not
/// a repository fails with [`ErrorKind::ModelUnavailable`].
pub fn open(path: &Path) -> Result<RepoModel> {
    let repo = Repository::open(path).map_err(|err| {
        Error::model_unavailable(path.display().to_string())
            .with_operation("model::open")
            .set_source(err)
    })?;
    debug!("Opened git repository at {:?}", repo.path());
    ModelBuilder::new(&repo).build()
}

fn git_error(kind: ErrorKind, operation: &'static str, err: git2::Error) -> Error {
    Error::new(kind, err.message().to_string())
        .with_operation(operation)
        .set_source(err)
}

/// Walks a single repository once and fills a model.
pub struct ModelBuilder<'repo> {
    repo: &'repo Repository,
    model: RepoModel,
}

impl<'repo> ModelBuilder<'repo> {
    pub fn new(repo: &'repo Repository) -> Self {
        Self {
            repo,
            model: RepoModel::new(),
        }
    }

    pub fn build(mut self) -> Result<RepoModel> {
        let start = Instant::now();

        self.read_objects()?;
        self.read_references()?;
        self.read_head();
        self.read_remotes()?;
        self.read_upstreams()?;

        info!(
            objects = self.model.object_count(),
            references = self.model.reference_count(),
            "Model build: {:.2}s",
            start.elapsed().as_secs_f64()
        );
        Ok(self.model)
    }

    /// Enumerate the object database (loose and packed) and classify each object.
    fn read_objects(&mut self) -> Result<()> {
        let odb = self
            .repo
            .odb()
            .map_err(|err| git_error(ErrorKind::ModelUnavailable, "model::odb", err))?;

        let mut oids = Vec::new();
        odb.foreach(|oid| {
            oids.push(*oid);
            true
        })
        .map_err(|err| git_error(ErrorKind::ModelUnavailable, "model::odb_foreach", err))?;

        for oid in oids {
            let kind = match odb.read_header(oid) {
                Ok((_, kind)) => kind,
                Err(err) => {
                    warn!(%oid, error = %err, "skipping unreadable object");
                    continue;
                }
            };
            if let Err(err) = self.read_object(oid, kind) {
                warn!(%oid, error = %err, "skipping unreadable object");
            }
        }

        debug!(
            blobs = self.model.blobs.len(),
            trees = self.model.trees.len(),
            commits = self.model.commits.len(),
            annotated_tags = self.model.annotated_tags.len(),
            "objects read"
        );
        Ok(())
    }

    fn read_object(&mut self, oid: Oid, kind: ObjectType) -> Result<()> {
        let read_failed = |err: git2::Error| {
            git_error(ErrorKind::ObjectReadFailed, "model::read_object", err)
                .with_context("oid", oid.to_string())
        };

        match kind {
            ObjectType::Blob => {
                self.model.blobs.insert(oid.to_string());
            }
            ObjectType::Tree => {
                let tree = self.repo.find_tree(oid).map_err(read_failed)?;
                let entries = tree
                    .iter()
                    .map(|entry| {
                        TreeEntry::new(
                            entry.id().to_string(),
                            String::from_utf8_lossy(entry.name_bytes()),
                        )
                    })
                    .collect();
                self.model.trees.insert(oid.to_string(), entries);
            }
            ObjectType::Commit => {
                let commit = self.repo.find_commit(oid).map_err(read_failed)?;
                let refs = commit
                    .parent_ids()
                    .chain(std::iter::once(commit.tree_id()))
                    .map(|id| id.to_string())
                    .collect();
                self.model.commits.insert(oid.to_string(), refs);
            }
            ObjectType::Tag => {
                let tag = self.repo.find_tag(oid).map_err(read_failed)?;
                self.model
                    .annotated_tags
                    .insert(oid.to_string(), tag.target_id().to_string());
            }
            _ => {}
        }
        Ok(())
    }

    fn read_references(&mut self) -> Result<()> {
        let references = self
            .repo
            .references()
            .map_err(|err| git_error(ErrorKind::ModelUnavailable, "model::references", err))?;

        for reference in references {
            let reference = match reference {
                Ok(reference) => reference,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable reference");
                    continue;
                }
            };
            self.read_reference(&reference);
        }
        Ok(())
    }

    fn read_reference(&mut self, reference: &Reference<'_>) {
        let Some(name) = reference.name() else {
            return;
        };

        if let Some(branch) = name.strip_prefix(HEADS_PREFIX) {
            if let Some(oid) = reference.target() {
                self.model
                    .local_branches
                    .insert(branch.to_string(), oid.to_string());
            }
        } else if let Some(remote) = name.strip_prefix(REMOTES_PREFIX) {
            if reference.kind() == Some(ReferenceType::Symbolic) {
                if let Some(target) = reference.symbolic_target() {
                    let target = target.strip_prefix(REMOTES_PREFIX).unwrap_or(target);
                    self.model
                        .remote_heads
                        .insert(remote.to_string(), target.to_string());
                }
            } else if let Some(oid) = reference.target() {
                self.model
                    .remote_branches
                    .insert(remote.to_string(), oid.to_string());
            }
        } else if let Some(tag) = name.strip_prefix(TAGS_PREFIX)
            && let Some(oid) = reference.target()
        {
            self.model.tags.insert(tag.to_string(), oid.to_string());
        }
    }

    fn read_head(&mut self) {
        let head = match self.repo.find_reference("HEAD") {
            Ok(head) => head,
            Err(err) => {
                warn!(error = %err, "HEAD is unreadable");
                return;
            }
        };

        let target = match head.kind() {
            Some(ReferenceType::Symbolic) => head
                .symbolic_target()
                .map(|target| target.strip_prefix(HEADS_PREFIX).unwrap_or(target).to_string()),
            _ => head.target().map(|oid| oid.to_string()),
        };
        self.model.local_head = target.map(LocalHead::new);
    }

    /// Every configured remote, pointing at the remote branches fetched from it.
    fn read_remotes(&mut self) -> Result<()> {
        let remotes = self
            .repo
            .remotes()
            .map_err(|err| git_error(ErrorKind::ModelUnavailable, "model::remotes", err))?;

        for name in remotes.iter().flatten() {
            let prefix = format!("{name}/");
            let branches = self
                .model
                .remote_branches
                .keys()
                .filter(|branch| branch.starts_with(&prefix))
                .cloned()
                .collect();
            self.model.remote_servers.insert(name.to_string(), branches);
        }
        Ok(())
    }

    fn read_upstreams(&mut self) -> Result<()> {
        let branches = self
            .repo
            .branches(Some(BranchType::Local))
            .map_err(|err| git_error(ErrorKind::ModelUnavailable, "model::branches", err))?;

        for branch in branches {
            let Ok((branch, _)) = branch else {
                continue;
            };
            let Ok(Some(name)) = branch.name() else {
                continue;
            };
            // No upstream configured is the common case.
            let Ok(upstream) = branch.upstream() else {
                continue;
            };
            if let Ok(Some(tracked)) = upstream.name() {
                self.model
                    .upstreams
                    .insert(name.to_string(), tracked.to_string());
            }
        }
        Ok(())
    }
}
