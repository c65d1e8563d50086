//! Google Analytics MCP server binary

use std::process::ExitCode;

use clap::Parser;
use gam_server::{RunOptions, run};

/// Command line interface for the Google Analytics MCP server
#[derive(Parser, Debug)]
#[command(name = "gam")]
#[command(about = "Google Analytics MCP server - account, property and report tools over stdio")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the tool list as JSON and exit
    #[arg(long)]
    pub list_tools: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = RunOptions {
        config_path: cli.config.as_deref(),
        log_level: cli.log_level.as_deref(),
        list_tools: cli.list_tools,
    };
    match run(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gam: {e}");
            ExitCode::FAILURE
        }
    }
}
