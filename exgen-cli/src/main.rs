use clap::{Parser, Subcommand};
use std::path::PathBuf;

use exgen_cli::commands::{generate, new_project, routes};
use exgen_cli::{logging, ScaffoldError};

#[derive(Parser)]
#[command(name = "exgen", version, about = "exgen: scaffold Express projects and resources")]
struct Cli {
    /// Directory to run in (project root, or parent directory for `new`)
    #[arg(short = 'C', long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Show debug logs (overridden by EXGEN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Express project
    New {
        /// Project name
        name: String,
        /// Include Firebase setup
        #[arg(long)]
        firebase: bool,
        /// Ask for optional features
        #[arg(short, long)]
        interactive: bool,
    },
    /// Generate a controller + route resource and mount it
    #[command(alias = "g")]
    GenerateResource {
        /// Resource name (e.g. user)
        name: String,
        /// Overwrite existing controller/route files
        #[arg(long)]
        force: bool,
    },
    /// List resources mounted in src/routes/index.js
    Routes,
}

fn run(cli: Cli) -> Result<(), ScaffoldError> {
    match cli.command {
        Commands::New {
            name,
            firebase,
            interactive,
        } => {
            let opts = new_project::CliNewOpts {
                firebase,
                interactive,
            };
            new_project::run(&cli.dir, &name, opts)?.print_summary();
        }
        Commands::GenerateResource { name, force } => {
            let opts = generate::ResourceOptions { force };
            generate::resource(&cli.dir, &name, &opts)?.print_summary();
        }
        Commands::Routes => routes::run(&cli.dir)?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
