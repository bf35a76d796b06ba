use std::error::Error;
use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger};

/// Terminal logging through `env_logger` (honours `RUST_LOG`), or terminal plus
/// file through `simplelog` when a log file is given.
pub fn init(log_file: Option<&Path>, verbose: u8) -> Result<(), Box<dyn Error>> {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    match log_file {
        None => {
            let default = level.as_str().to_ascii_lowercase();
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
                .try_init()?;
        }
        Some(path) => {
            CombinedLogger::init(vec![
                TermLogger::new(
                    LevelFilter::Warn,
                    Config::default(),
                    TerminalMode::Stderr,
                    ColorChoice::Auto,
                ),
                WriteLogger::new(level, Config::default(), File::create(path)?),
            ])?;
            log::info!("logging to {}", path.display());
        }
    }
    Ok(())
}
