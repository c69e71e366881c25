use colored::Colorize;
use dialoguer::Confirm;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates;
use crate::error::ScaffoldError;
use crate::names::validate_project_name;

/// Resolved project options after CLI flag parsing or interactive prompts.
#[derive(Debug, Clone)]
pub struct NewProjectOptions {
    pub name: String,
    pub firebase: bool,
}

/// Raw CLI flags for `exgen new`, before resolution into [`NewProjectOptions`].
#[derive(Debug, Clone, Default)]
pub struct CliNewOpts {
    pub firebase: bool,
    pub interactive: bool,
}

/// Summary of a freshly created project.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub path: PathBuf,
    /// Project-relative paths of every file written.
    pub files: Vec<String>,
}

impl NewProject {
    /// Report text: created files followed by next steps.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} Project '{}' created successfully!\n",
            "✓".green(),
            self.name.green()
        );
        for file in &self.files {
            out.push_str(&format!("   - Created: {}\n", file.cyan()));
        }
        out.push_str(&format!(
            "\nTo get started:\n  cd {}\n  npm install\n  npm run dev\n",
            self.name
        ));
        out
    }

    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }
}

/// Create a new Express project named `name` inside `parent`.
///
/// `--firebase` adds `firebase-admin` and `src/lib/firebase.js`. With
/// `--interactive` and no `--firebase`, the user is asked whether to
/// include it.
pub fn run(parent: &Path, name: &str, cli_opts: CliNewOpts) -> Result<NewProject, ScaffoldError> {
    validate_project_name(name)?;

    let firebase = if cli_opts.firebase || !cli_opts.interactive {
        cli_opts.firebase
    } else {
        Confirm::new()
            .with_prompt("Include Firebase setup?")
            .default(false)
            .interact()?
    };

    generate_project(
        parent,
        &NewProjectOptions {
            name: name.to_string(),
            firebase,
        },
    )
}

fn generate_project(parent: &Path, opts: &NewProjectOptions) -> Result<NewProject, ScaffoldError> {
    let project_dir = parent.join(&opts.name);
    if project_dir.exists() {
        return Err(ScaffoldError::ProjectExists { path: project_dir });
    }

    tracing::info!(name = %opts.name, firebase = opts.firebase, "creating project");

    let mut dirs = vec!["src/routes", "src/controllers"];
    if opts.firebase {
        dirs.push("src/lib");
    }
    for dir in dirs {
        let path = project_dir.join(dir);
        fs::create_dir_all(&path).map_err(ScaffoldError::io(&path))?;
    }

    let mut files = vec![
        ("src/app.js", templates::project::app_js()),
        ("src/server.js", templates::project::server_js()),
        ("src/routes/index.js", templates::project::routes_index_js()),
    ];
    if opts.firebase {
        files.push(("src/lib/firebase.js", templates::project::firebase_js()));
    }
    files.push(("package.json", templates::project::package_json(opts)?));
    files.push((".env", templates::project::ENV_FILE.to_string()));
    files.push((".gitignore", templates::project::GITIGNORE.to_string()));

    for (relative, content) in &files {
        let path = project_dir.join(relative);
        fs::write(&path, content).map_err(ScaffoldError::io(&path))?;
        tracing::debug!(path = %path.display(), "wrote file");
    }

    Ok(NewProject {
        name: opts.name.clone(),
        path: project_dir,
        files: files.into_iter().map(|(relative, _)| relative.to_string()).collect(),
    })
}
