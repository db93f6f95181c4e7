use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "coderev")]
#[command(about = "coderev - AI code reviewer for Rust sources", long_about = None, version)]
struct Cli {
    /// Directory holding config.toml and secret.json (default: ~/.config/coderev)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the browser UI
    Serve {
        /// Listen address, e.g. 127.0.0.1:8501
        #[arg(long)]
        bind: Option<String>,
        /// Gemini model name
        #[arg(long)]
        model: Option<String>,
    },
    /// Review a file once and print the bug report and fixed code
    Review {
        /// Source file, or `-` for stdin
        path: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Gemini model name
        #[arg(long)]
        model: Option<String>,
    },
    /// Print where config.toml and secret.json are looked up
    ConfigPath,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config_dir = cli.config_dir.as_deref();

    match cli.command {
        Commands::Serve { bind, model } => {
            let _guard = logging::init(logging::LogTarget::Server, config_dir);
            commands::serve::run(config_dir, bind, model).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Review { path, json, model } => {
            let _guard = logging::init(logging::LogTarget::OneShot, config_dir);
            commands::review::run(config_dir, &path, json, model).await
        }
        Commands::ConfigPath => {
            commands::config_path::run(config_dir)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
