use std::path::Path;
use std::sync::Mutex;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;

use crate::defines::*;
use crate::errors::LoggingError;

static INSTALLED: Mutex<bool> = Mutex::new(false);

/// Install the process-wide logger writing under `logs/`.
pub fn setup_logging() -> Result<(), LoggingError> {
    setup_logging_in(Path::new(LOG_DIR))
}

/// Install the process-wide logger writing under `dir`.
/// Once a logger is installed, later calls do nothing.
pub fn setup_logging_in(dir: &Path) -> Result<(), LoggingError> {
    let mut installed = INSTALLED.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if *installed {
        return Ok(());
    }

    let config = build_config(dir)?;
    log4rs::init_config(config)?;
    *installed = true;
    Ok(())
}

/// INFO+ to a size-rotated file, WARN+ to stderr.
pub fn build_config(dir: &Path) -> Result<Config, LoggingError> {
    std::fs::create_dir_all(dir)?;
    let log_file = dir.join(LOG_FILE_NAME);
    let roll_pattern = format!("{}.{{}}", log_file.display());

    let roller = FixedWindowRoller::builder()
        .base(1)
        .build(&roll_pattern, LOG_BACKUP_COUNT)
        .map_err(|e| LoggingError::Roller(e.to_string()))?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(LOG_MAX_BYTES)), Box::new(roller));

    let file = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&log_file, Box::new(policy))?;

    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Info)))
                .build("file", Box::new(file)),
        )
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Warn)))
                .build("console", Box::new(console)),
        )
        .logger(Logger::builder().build(env!("CARGO_CRATE_NAME"), LevelFilter::Debug))
        .build(
            Root::builder()
                .appender("file")
                .appender("console")
                .build(LevelFilter::Warn),
        )?;

    Ok(config)
}
