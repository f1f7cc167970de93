use clap::{Parser, Subcommand};
use std::process::ExitCode;

use orbit_view::config::Config;
use orbit_view::fetch;
use orbit_view::web::{self, AppState};

#[derive(Parser)]
#[command(name = "orbit-view")]
#[command(about = "Satellite orbit fetcher and 3D visualizer")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download element sets for the tracked satellites into the TLE file
    Fetch,
    /// Serve the interactive orbit view
    Serve,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    match cli.command {
        Commands::Fetch => run_fetch(&config).await,
        Commands::Serve => run_serve(&config).await,
    }
}

async fn run_fetch(config: &Config) -> ExitCode {
    match fetch::run(&config.fetch).await {
        Ok(count) => {
            println!("Saved TLEs for {} satellites.", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error saving TLEs: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_serve(config: &Config) -> ExitCode {
    let state = match AppState::from_config(&config.visualizer) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading TLE file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match web::run_server(&config.web.bind, state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
