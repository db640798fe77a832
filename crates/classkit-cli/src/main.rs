//! classkit CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "classkit", version, about = "Classroom authoring toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through a scripted teacher/student lifecycle
    Demo,

    /// Validate course plan TOML files
    Validate {
        /// Path to a .toml course plan or directory
        #[arg(long)]
        plan: PathBuf,
    },

    /// Load a course plan and render the resulting registries
    Show {
        /// Path to a .toml course plan
        #[arg(long)]
        plan: PathBuf,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Create a starter course plan
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("classkit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo => commands::demo::execute(),
        Commands::Validate { plan } => commands::validate::execute(plan),
        Commands::Show { plan, format } => commands::show::execute(plan, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
