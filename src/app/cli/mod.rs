//! CLI Adapter.

mod doctor;
mod init;
mod version;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "MJSDK_LOG";

#[derive(Parser)]
#[command(name = "mjcuadrado-net-sdk")]
#[command(version)]
#[command(
    about = "Scaffold .mjcuadrado-net-sdk/ project structure and diagnose the .NET environment",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .mjcuadrado-net-sdk/ and .claude/ scaffolding
    #[clap(visible_alias = "i")]
    Init {
        /// Project name; creates ./<name>/ instead of initializing in place
        project_name: Option<String>,
        /// Overwrite an existing scaffold without asking
        #[arg(short, long)]
        force: bool,
        /// Project author
        #[arg(long, value_name = "AUTHOR")]
        author: Option<String>,
        /// Target framework
        #[arg(long, value_name = "TFM")]
        framework: Option<String>,
    },
    /// Check the host toolchain and project structure
    #[clap(visible_alias = "dr")]
    Doctor {
        /// Show details for passing checks too
        #[arg(long)]
        verbose: bool,
    },
    /// Show version information
    Version {
        /// Include host details
        #[arg(long)]
        verbose: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Init { project_name, force, author, framework } => {
            init::run_init(project_name, force, author, framework).map(|_| 0)
        }
        Commands::Doctor { verbose } => doctor::run_doctor(verbose),
        Commands::Version { verbose } => {
            version::run_version(verbose);
            Ok(0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
