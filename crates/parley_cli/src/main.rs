//! CLI entry point for parley.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::Cli;

/// Load the nearest `.env` (current directory or a parent) so `PARLEY_LOG_LEVEL`
/// and friends can live with the project.
fn load_dotenv() {
    let Ok(mut dir) = std::env::current_dir() else {
        return;
    };
    for _ in 0..32 {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            return;
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => return,
        }
    }
}

#[tokio::main]
async fn main() {
    load_dotenv();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = parley_observability::init(cli.observability_config()) {
        output::warning(&e.to_string());
    }

    if let Err(e) = commands::handle(cli).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
