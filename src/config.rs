//! Runtime configuration.
//!
//! Defaults live in constants; `.env` files and environment variables override them,
//! and command line flags override both.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Default log4rs configuration file.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
/// Environment variable overriding [`LOG_CONFIG_FILE`].
pub const ENV_LOG_CONFIG: &str = "CIDR_HCMASK_LOG_CONFIG";
/// Environment variable turning compaction on by default.
pub const ENV_COMPACT: &str = "CIDR_HCMASK_COMPACT";
/// Log line layout when no configuration file is found.
const DEFAULT_LOG_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {M} - {m}{n}";

/// Settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the log4rs configuration file.
    pub log_config: PathBuf,
    /// Compact masks unless told otherwise.
    pub compact: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(LOG_CONFIG_FILE),
            compact: false,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            settings.log_config = PathBuf::from(path.trim());
        }
        if let Some(value) = lookup(ENV_COMPACT) {
            match parse_flag(&value) {
                Some(flag) => settings.compact = flag,
                None => log::warn!("ignoring {ENV_COMPACT}={value:?}: not a boolean"),
            }
        }
        settings
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Initialize log4rs from `path`, or log warnings to stderr if it does not exist.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        log::debug!("logging configured from {}", path.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|e| format!("Error building log4rs config: {e}"))?;
    log4rs::init_config(config).map_err(|e| format!("Error initializing log4rs: {e}"))?;
    log::debug!("{} not found, using stderr logging", path.display());
    Ok(())
}
