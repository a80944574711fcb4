mod core;
mod tui;

use clap::{Parser, ValueEnum};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use crate::core::config;
use crate::core::state::Tab;

/// Initial tab choices accepted by `--tab`.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StartTab {
    Generator,
    Editor,
}

impl From<StartTab> for Tab {
    fn from(tab: StartTab) -> Self {
        match tab {
            StartTab::Generator => Tab::Generator,
            StartTab::Editor => Tab::Editor,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "passpad",
    about = "Password generator and plain-text editor in one window"
)]
struct Args {
    /// File to open into the editor at startup
    file: Option<PathBuf>,

    /// Tab to show first (overrides the configured start tab)
    #[arg(long, value_enum)]
    tab: Option<StartTab>,

    /// Alternate config file instead of ~/.passpad/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to passpad.log in current directory
    // (stdout belongs to the TUI)
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("passpad.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("passpad starting up");

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("passpad: {e}");
            std::process::exit(1);
        }
    };

    // A file on the command line implies the editor tab unless --tab says
    // otherwise
    let cli_tab = args
        .tab
        .map(Tab::from)
        .or_else(|| args.file.is_some().then_some(Tab::Editor));
    let config = config::resolve(&file_config, cli_tab);

    let result = tui::run(config, args.file);
    log::info!("passpad shutting down");
    result
}
