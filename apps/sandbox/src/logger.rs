use anyhow::{Context, Result};
use simplelog::{CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;

pub const LOG_FILE: &str = "impulse.log";

pub fn create_logger() -> Result<()> {
    CombinedLogger::init(vec![
        TermLogger::new(LevelFilter::Info, Config::default(), TerminalMode::Mixed),
        WriteLogger::new(
            LevelFilter::max(),
            Config::default(),
            File::create(LOG_FILE)
                .with_context(|| format!("Failed to create log file named: {}", LOG_FILE))?,
        ),
    ])?;
    Ok(())
}
