use std::path::PathBuf;

use thiserror::Error;

/// Structural anchors the router patcher relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `const router = Router();`
    RouterDeclaration,
    /// `export default router;`
    Export,
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anchor::RouterDeclaration => f.write_str(crate::router::ROUTER_DECLARATION),
            Anchor::Export => f.write_str(crate::router::EXPORT_STATEMENT),
        }
    }
}

/// The router-aggregator file does not have the shape the patcher expects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("router file is missing `{0}`")]
    MissingAnchor(Anchor),

    #[error(
        "router file exports the router (line {export_line}) before declaring it (line {declaration_line})"
    )]
    ExportBeforeDeclaration {
        declaration_line: usize,
        export_line: usize,
    },
}

/// Which kind of user-supplied name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Project,
    Resource,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Project => f.write_str("project"),
            NameKind::Resource => f.write_str("resource"),
        }
    }
}

/// Error type for every `exgen` command.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: NameKind,
        name: String,
        reason: &'static str,
    },

    #[error(
        "'{}' is not a project root (no src/ directory). Run this from the project root or pass --dir",
        .root.display()
    )]
    NotProjectRoot { root: PathBuf },

    #[error("directory '{}' already exists", .path.display())]
    ProjectExists { path: PathBuf },

    #[error("'{}' already exists (use --force to overwrite)", .path.display())]
    ResourceExists { path: PathBuf },

    #[error("cannot patch '{}': {source}", .path.display())]
    Patch {
        path: PathBuf,
        #[source]
        source: PatchError,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize package.json: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ScaffoldError::Io { path, source }
    }
}
