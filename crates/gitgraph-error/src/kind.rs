//! Error kinds for git-graph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on this to tell a bad repository path apart from a
/// rejected output format or a missing renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // Repository model errors
    // =========================================================================
    /// The repository model could not be built (not a repository, corrupt store)
    ModelUnavailable,

    /// A single object or reference could not be read
    ObjectReadFailed,

    // =========================================================================
    // Rendering errors
    // =========================================================================
    /// The rendering engine does not know the requested output format
    UnsupportedFormat,

    /// The rendering engine binary could not be located
    RendererNotFound,

    /// The rendering engine ran but failed
    RenderFailed,

    /// The rendered artifact could not be opened in a viewer
    ViewerFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether the failure came from the filesystem rather than git or Graphviz.
    pub fn is_filesystem(&self) -> bool {
        matches!(
            self,
            ErrorKind::FileNotFound | ErrorKind::PermissionDenied | ErrorKind::IoFailed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ModelUnavailable.to_string(), "ModelUnavailable");
        assert_eq!(ErrorKind::UnsupportedFormat.as_str(), "UnsupportedFormat");
    }

    #[test]
    fn test_is_filesystem() {
        assert!(ErrorKind::PermissionDenied.is_filesystem());
        assert!(ErrorKind::IoFailed.is_filesystem());
        assert!(!ErrorKind::RenderFailed.is_filesystem());
        assert!(!ErrorKind::ModelUnavailable.is_filesystem());
    }
}
