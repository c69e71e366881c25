use colored::Colorize;
use std::fs;
use std::path::Path;

use super::generate::ROUTER_FILE;
use crate::error::ScaffoldError;
use crate::router::RouterAnchors;

/// A sub-router mounted in the router-aggregator file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedRoute {
    pub path: String,
    pub binding: String,
    /// Module the binding is imported from, if the import was found.
    pub module: Option<String>,
    pub line: usize,
}

/// Read `src/routes/index.js` under `root` and list its mounts in file order.
pub fn list(root: &Path) -> Result<Vec<MountedRoute>, ScaffoldError> {
    let router_path = root.join(ROUTER_FILE);
    let content = fs::read_to_string(&router_path).map_err(ScaffoldError::io(&router_path))?;
    let anchors = RouterAnchors::scan(&content).map_err(|source| ScaffoldError::Patch {
        path: router_path.clone(),
        source,
    })?;

    Ok(anchors
        .mounts()
        .iter()
        .map(|mount| MountedRoute {
            path: mount.path.clone(),
            binding: mount.binding.clone(),
            module: anchors.module_for(&mount.binding).map(str::to_string),
            line: mount.line,
        })
        .collect())
}

pub fn run(root: &Path) -> Result<(), ScaffoldError> {
    let routes = list(root)?;

    if routes.is_empty() {
        println!("{}", "No resources mounted.".dimmed());
        return Ok(());
    }

    println!("{}", "Mounted resources:".bold());
    println!();
    println!(
        "  {:<20} {:<25} {}",
        "PATH".dimmed(),
        "ROUTER".dimmed(),
        "MODULE".dimmed()
    );
    println!("  {}", "-".repeat(70).dimmed());

    for route in &routes {
        let module = match &route.module {
            Some(module) => module.normal(),
            None => "(not imported)".yellow(),
        };
        println!(
            "  {:<20} {:<25} {}",
            format!("/api{}", route.path).green(),
            route.binding,
            module
        );
    }

    println!();
    println!("  {} resources total", routes.len());

    Ok(())
}
