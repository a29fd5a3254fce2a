//! `promptsmith` binary: serve the Anthropic prompt tools over MCP stdio.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use promptsmith_core::RunOptions;

#[derive(Parser, Debug)]
#[command(
    name = "promptsmith",
    version,
    about = "MCP stdio server for the Anthropic experimental prompt tools API"
)]
struct Args {
    /// Load environment variables from this file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,
    /// Override the Anthropic API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let options = RunOptions {
        env_file: args.env_file,
        base_url: args.base_url,
    };

    if let Err(error) = promptsmith_core::run(options).await {
        eprintln!("promptsmith error: {error}");
        process::exit(1);
    }
}
