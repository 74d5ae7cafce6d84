//! Rendering engine adapter.
//!
//! [`Renderer`] is the seam between the persister and whatever turns DOT
//! source into an artifact. [`GraphvizRenderer`] shells out to Graphviz.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use gitgraph_error::{Error, ErrorKind, Result};

/// Graphviz layout binary looked up on `PATH`.
pub const DOT_BINARY: &str = "dot";

/// Turns a DOT description file into an artifact in a requested format.
pub trait Renderer {
    /// Render `source` as `format` into `output`.
    fn render(&self, source: &Path, format: &str, output: &Path) -> Result<()>;

    /// Open a rendered artifact in the platform viewer.
    fn view(&self, artifact: &Path) -> Result<()> {
        open::that(artifact).map_err(|err| {
            Error::new(ErrorKind::ViewerFailed, err.to_string())
                .with_operation("render::view")
                .with_context("path", artifact.display().to_string())
                .set_source(err)
        })
    }
}

/// Renderer backed by the Graphviz `dot` binary.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    binary: PathBuf,
}

impl GraphvizRenderer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Use `explicit` when given, otherwise find `dot` on `PATH`.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(binary) = explicit {
            return Ok(Self::new(binary));
        }
        let binary = which::which(DOT_BINARY).map_err(|err| {
            Error::renderer_not_found(DOT_BINARY)
                .with_operation("render::locate")
                .set_source(err)
        })?;
        debug!(binary = %binary.display(), "located graphviz");
        Ok(Self::new(binary))
    }

    #[cfg(test)]
    fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, source: &Path, format: &str, output: &Path) -> Result<()> {
        let binary = self.binary.display().to_string();
        let result = Command::new(&self.binary)
            .arg(format!("-T{format}"))
            .arg("-o")
            .arg(output)
            .arg(source)
            .output()
            .map_err(|err| {
                let err_kind = err.kind();
                let base = if err_kind == std::io::ErrorKind::NotFound {
                    Error::renderer_not_found(binary.clone())
                } else {
                    Error::new(ErrorKind::RenderFailed, err.to_string())
                };
                base.with_operation("render::graphviz").set_source(err)
            })?;

        if result.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
        // dot: `Format: "xyz" not recognized. Use one of: ...`
        let err = if stderr.contains("not recognized") {
            Error::unsupported_format(format)
        } else {
            Error::new(
                ErrorKind::RenderFailed,
                format!("{binary} exited with {}", result.status),
            )
        };
        Err(err
            .with_operation("render::graphviz")
            .with_context("stderr", stderr))
    }
}
