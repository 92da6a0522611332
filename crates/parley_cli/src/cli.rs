//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};
use parley_observability::ObservabilityConfig;
use parley_tui::theme::Appearance;
use parley_tui::utils::DEFAULT_RENDER_WIDTH;

/// Log level control and chat message views for the terminal
#[derive(Parser, Debug)]
#[command(name = "parley", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level: none, error, warning, info, debug or all (anything else means error).
    /// Without it, `LOG_LEVEL` is used, then info.
    #[arg(short, long, global = true, env = "PARLEY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

impl Cli {
    /// Logging setup: environment first, then the flag. Colors only for text output.
    pub fn observability_config(&self) -> ObservabilityConfig {
        let mut config = ObservabilityConfig::from_env();
        config.service_name = "parley".to_string();
        if let Some(level) = &self.log_level {
            config = config.with_log_level(level);
        }
        let colorize = config.colorize && self.output == OutputFormat::Text;
        config.with_colorize(colorize)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show how user log levels map to internal levels
    Levels,
    /// Render one chat message read from a JSON file (or `-` for stdin)
    Render {
        /// Path to a ChatMessage JSON document, or `-`
        input: String,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Render a sample conversation
    Demo {
        #[command(flatten)]
        view: ViewArgs,
        /// How long to animate streaming spinners, in milliseconds (terminal only)
        #[arg(long, default_value_t = 1200)]
        animate_ms: u64,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct ViewArgs {
    /// Width in columns
    #[arg(short, long, default_value_t = DEFAULT_RENDER_WIDTH)]
    pub width: u16,
    /// Palette: dark or light
    #[arg(long, default_value = "dark")]
    pub appearance: Appearance,
}
