//! Artifact persistence: write the DOT description under the repository
//! and render it next to itself.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use tracing::info;

use gitgraph_dot::GitGraph;
use gitgraph_error::{Error, ErrorKind, Result};

use crate::render::Renderer;

/// Output subdirectory under the repository root.
pub const OUTPUT_DIR: &str = ".gitGraph";

/// Description file names are `<timestamp>[_<n>]_git_graph.dot`.
pub const DOT_SUFFIX: &str = "_git_graph.dot";

/// Local time, second granularity.
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M_%S";

/// Same-second names tried before giving up.
const MAX_CLAIMS: usize = 1000;

/// Files produced by one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Artifact file name (`<dot file name>.<format>`), as reported to the user
    pub file_name: String,
    /// Full path of the rendered artifact
    pub path: PathBuf,
    /// Full path of the DOT description file
    pub dot_path: PathBuf,
}

/// Check `format` before handing it to the renderer's command line.
pub fn validate_format(format: &str) -> Result<()> {
    let valid = !format.is_empty()
        && format
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ':' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(Error::unsupported_format(format).with_operation("persist::validate_format"))
    }
}

/// Create `<repo>/.gitGraph` if needed. Concurrent callers all succeed.
pub fn ensure_output_dir(repo_path: &Path) -> Result<PathBuf> {
    let dir = repo_path.join(OUTPUT_DIR);
    fs::create_dir_all(&dir).map_err(|err| {
        Error::from(err)
            .with_operation("persist::create_output_dir")
            .with_context("path", dir.display().to_string())
    })?;
    Ok(dir)
}

/// Description file name for `stamp`, with a disambiguator after the first claim.
pub fn dot_file_name(stamp: &str, attempt: usize) -> String {
    if attempt == 0 {
        format!("{stamp}{DOT_SUFFIX}")
    } else {
        format!("{stamp}_{attempt}{DOT_SUFFIX}")
    }
}

/// Exclusively create a fresh description file in `dir`.
fn claim_dot_file(dir: &Path, stamp: &str) -> Result<(String, PathBuf, File)> {
    for attempt in 0..MAX_CLAIMS {
        let name = dot_file_name(stamp, attempt);
        let path = dir.join(&name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((name, path, file)),
            Err(err) if err.kind() == IoErrorKind::AlreadyExists => continue,
            Err(err) => {
                return Err(Error::from(err)
                    .with_operation("persist::claim_dot_file")
                    .with_context("path", path.display().to_string()));
            }
        }
    }
    Err(Error::new(
        ErrorKind::IoFailed,
        format!("no free description file name for {stamp}"),
    )
    .with_operation("persist::claim_dot_file")
    .with_context("dir", dir.display().to_string()))
}

/// Persist `graph` under `repo_path`, named after the current local time.
pub fn persist(
    graph: &GitGraph,
    repo_path: &Path,
    format: &str,
    conceal: bool,
    renderer: &dyn Renderer,
) -> Result<Artifact> {
    let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    persist_with_stamp(graph, repo_path, format, conceal, renderer, &stamp)
}

/// Persist `graph` using an explicit timestamp prefix.
///
/// Renders only when `conceal` is set, renders and opens the viewer otherwise.
pub fn persist_with_stamp(
    graph: &GitGraph,
    repo_path: &Path,
    format: &str,
    conceal: bool,
    renderer: &dyn Renderer,
    stamp: &str,
) -> Result<Artifact> {
    let start = Instant::now();
    validate_format(format)?;

    let dir = ensure_output_dir(repo_path)?;
    let (dot_name, dot_path, mut file) = claim_dot_file(&dir, stamp)?;
    file.write_all(graph.to_dot().as_bytes())
        .and_then(|_| file.flush())
        .map_err(|err| {
            Error::from(err)
                .with_operation("persist::write_dot")
                .with_context("path", dot_path.display().to_string())
        })?;
    drop(file);

    let file_name = format!("{dot_name}.{format}");
    let path = dir.join(&file_name);
    renderer
        .render(&dot_path, format, &path)
        .map_err(|err| err.with_context("source", dot_path.display().to_string()))?;
    if !conceal {
        renderer.view(&path)?;
    }

    info!(
        artifact = %path.display(),
        "Graph persisted: {:.2}s",
        start.elapsed().as_secs_f64()
    );

    Ok(Artifact {
        file_name,
        path,
        dot_path,
    })
}
