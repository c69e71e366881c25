//! # exgen-cli
//!
//! Command-line tool for scaffolding Express projects.
//!
//! This crate provides the `exgen` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `exgen new <name> [--firebase]` | Create a new Express project |
//! | `exgen generate-resource <name>` | Add a controller + route and mount it |
//! | `exgen routes` | List resources mounted in `src/routes/index.js` |
//!
//! ## Architecture
//!
//! - [`commands::new_project`]: project scaffolding (`exgen new`)
//! - [`commands::generate`]: resource generation (`exgen generate-resource`)
//! - [`commands::routes`]: mount listing (`exgen routes`)
//! - [`commands::templates`]: file bodies for projects and resources
//! - [`router`]: idempotent patching of the router-aggregator file
//! - [`names`]: project and resource name validation
//! - [`error`]: error types shared by all commands
//!
//! Every command takes the project root (or its parent, for `new`) as an
//! explicit path; only `main` looks at the working directory.

pub mod commands;
pub mod error;
pub mod logging;
pub mod names;
pub mod router;

pub use error::{PatchError, ScaffoldError};
