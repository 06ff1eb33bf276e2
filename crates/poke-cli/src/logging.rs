use std::path;
use std::str::FromStr;

use anyhow::anyhow;
use anyhow::Result;
use poke_term::{Config, ConfigKey};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;

pub fn file_appender(log_file: &path::Path) -> Result<RollingFileAppender> {
    let directory = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => path::PathBuf::from("."),
    };
    let file_name = log_file
        .file_name()
        .ok_or_else(|| return anyhow!("invalid log file: {}", log_file.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(directory)?;

    return Ok(appender);
}

/// Installs the JSON file subscriber. Returns `None` when logging is off or the
/// log file can't be opened; the UI runs either way.
pub fn init_tracing() -> Result<Option<WorkerGuard>> {
    let level = LevelFilter::from_str(&Config::get(ConfigKey::LogLevel))?;
    if level == LevelFilter::OFF {
        return Ok(None);
    }

    let log_file = path::PathBuf::from(Config::get(ConfigKey::LogFile));
    let appender = match file_appender(&log_file) {
        Ok(appender) => appender,
        Err(err) => {
            eprintln!("poke-term: logging disabled, {err:#}");
            return Ok(None);
        }
    };

    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_max_level(level)
        .init();

    tracing::debug!(
        api_url = Config::get(ConfigKey::ApiUrl),
        catalog_limit = Config::get(ConfigKey::CatalogLimit),
        log_file = %log_file.display(),
        "config"
    );

    return Ok(Some(guard));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_fails_on_an_unwritable_log_file() {
        let res = file_appender(path::Path::new("/proc/poke-term-missing/poke-term.log"));

        assert!(res.is_err());
    }

    #[test]
    fn it_fails_on_a_path_without_a_file_name() {
        assert!(file_appender(path::Path::new("/")).is_err());
    }

    #[test]
    fn it_creates_the_log_file() {
        let directory = std::env::temp_dir().join(format!("poke-term-{}", std::process::id()));
        let log_file = directory.join("poke-term.log");

        file_appender(&log_file).unwrap();

        assert!(log_file.exists());
        std::fs::remove_dir_all(directory).unwrap();
    }

    #[test]
    fn it_skips_the_subscriber_when_logging_is_off() {
        Config::set(ConfigKey::LogLevel, "off");
        Config::set(ConfigKey::LogFile, "/proc/poke-term-missing/poke-term.log");

        assert!(init_tracing().unwrap().is_none());
    }
}
