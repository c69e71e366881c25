use colored::Colorize;
use std::fmt;
use std::fs;
use std::path::Path;

use super::templates;
use crate::error::{NameKind, ScaffoldError};
use crate::names::ResourceName;
use crate::router;

/// Router-aggregator file, relative to the project root.
pub const ROUTER_FILE: &str = "src/routes/index.js";

/// Options for `exgen generate-resource`.
#[derive(Debug, Clone, Default)]
pub struct ResourceOptions {
    /// Overwrite existing controller/route files instead of failing.
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Overwritten,
    Modified,
    Unchanged,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Created => f.write_str("Created"),
            ChangeKind::Overwritten => f.write_str("Overwritten"),
            ChangeKind::Modified => f.write_str("Modified"),
            ChangeKind::Unchanged => f.write_str("Unchanged"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path relative to the project root, `/`-separated.
    pub path: String,
    pub kind: ChangeKind,
}

/// Report of a `generate-resource` run.
#[derive(Debug, Clone)]
pub struct GeneratedResource {
    pub name: String,
    pub files: Vec<FileChange>,
}

impl GeneratedResource {
    /// Report text, one `- <Kind>: <path>` line per file.
    pub fn summary(&self) -> String {
        let mut out = format!("{} Generated resource: {}\n", "✓".green(), self.name.green());
        for change in &self.files {
            let kind = match change.kind {
                ChangeKind::Created => change.kind.to_string().green(),
                ChangeKind::Overwritten => change.kind.to_string().yellow(),
                ChangeKind::Modified => change.kind.to_string().blue(),
                ChangeKind::Unchanged => change.kind.to_string().dimmed(),
            };
            out.push_str(&format!("   - {}: {}\n", kind, change.path.cyan()));
        }
        out
    }

    pub fn print_summary(&self) {
        print!("{}", self.summary());
    }
}

/// Generate a controller + route pair for `name` and wire it into
/// `src/routes/index.js` under `root`.
///
/// Returns an error if:
/// - `name` is not a valid JavaScript identifier
/// - the route file for `name` would be the router file itself
/// - `root` has no `src/` directory
/// - the router file is missing or lacks its declaration/export lines
/// - the controller or route file exists and `force` is not set
///
/// All checks happen before the first write.
pub fn resource(
    root: &Path,
    name: &str,
    opts: &ResourceOptions,
) -> Result<GeneratedResource, ScaffoldError> {
    let name = ResourceName::parse(name)?;
    let route_file = format!("src/routes/{name}.js");
    if route_file == ROUTER_FILE {
        return Err(ScaffoldError::InvalidName {
            kind: NameKind::Resource,
            name: name.to_string(),
            reason: "its route file would replace src/routes/index.js",
        });
    }

    if !root.join("src").is_dir() {
        return Err(ScaffoldError::NotProjectRoot {
            root: root.to_path_buf(),
        });
    }

    let router_path = root.join(ROUTER_FILE);
    let router_source =
        fs::read_to_string(&router_path).map_err(ScaffoldError::io(&router_path))?;
    let outcome =
        router::plan(&router_source, name.as_str()).map_err(|source| ScaffoldError::Patch {
            path: router_path.clone(),
            source,
        })?;

    let generated = [
        (
            format!("src/controllers/{name}.js"),
            templates::resource::controller(&name),
        ),
        (route_file, templates::resource::route(&name)),
    ];

    let mut files = Vec::with_capacity(generated.len() + 1);
    for (relative, _) in &generated {
        let path = root.join(relative);
        let kind = if !path.exists() {
            ChangeKind::Created
        } else if opts.force {
            ChangeKind::Overwritten
        } else {
            return Err(ScaffoldError::ResourceExists { path });
        };
        files.push(FileChange {
            path: relative.clone(),
            kind,
        });
    }

    tracing::info!(resource = %name, root = %root.display(), "generating resource");

    for ((relative, content), change) in generated.iter().zip(&files) {
        let path = root.join(relative);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(ScaffoldError::io(dir))?;
        }
        if change.kind == ChangeKind::Overwritten {
            tracing::warn!(path = %path.display(), "overwriting existing file");
        }
        fs::write(&path, content).map_err(ScaffoldError::io(&path))?;
        tracing::debug!(path = %path.display(), "wrote file");
    }

    let router_kind = if outcome.changed() {
        fs::write(&router_path, &outcome.text).map_err(ScaffoldError::io(&router_path))?;
        tracing::debug!(
            import_added = outcome.import_added,
            mount_added = outcome.mount_added,
            "patched router file"
        );
        ChangeKind::Modified
    } else {
        tracing::debug!("router file already wired");
        ChangeKind::Unchanged
    };
    files.push(FileChange {
        path: ROUTER_FILE.to_string(),
        kind: router_kind,
    });

    Ok(GeneratedResource {
        name: name.to_string(),
        files,
    })
}
