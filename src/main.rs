use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use techhealth::core::config::{self, TechHealthConfig};
use techhealth::core::theme::ThemeMode;
use techhealth::tui;

#[derive(Parser)]
#[command(name = "techhealth", about = "TechHealth landing page and BMI calculator")]
struct Args {
    /// Theme to start with (overrides config file and TECHHEALTH_THEME)
    #[arg(short, long, value_enum)]
    theme: Option<ThemeMode>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to techhealth.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("techhealth.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}; falling back to defaults", e);
        eprintln!("techhealth: {e}; using defaults");
        TechHealthConfig::default()
    });
    let resolved = config::resolve(&file_config, args.theme);

    log::info!("TechHealth starting up with theme: {}", resolved.theme.label());

    tui::run(resolved)
}
