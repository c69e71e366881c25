//! Command implementations for the `exgen` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

/// Resource generation: `exgen generate-resource <name>`.
///
/// Writes a controller and a route file, then wires the route into
/// `src/routes/index.js` through [`crate::router`].
pub mod generate;

/// Project scaffolding: `exgen new <name>`.
///
/// Creates the project directory with `package.json`, the Express app and
/// server entrypoints, the router-aggregator file, `.env` and `.gitignore`.
pub mod new_project;

/// Route listing: `exgen routes`.
pub mod routes;

/// Code templates for generated projects and resources.
pub mod templates;
