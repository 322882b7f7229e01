//! Process-wide logger setup.
//!
//! The library only talks to the `log` facade; binaries call [`init_logging`] once.
//! Repeated calls are no-ops.

use std::sync::OnceLock;

use log::LevelFilter;

use crate::core::TangoError;

static LOGGING_LEVEL: OnceLock<LevelFilter> = OnceLock::new();

pub fn parse_level(level: &str) -> Result<LevelFilter, TangoError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(TangoError::Config(format!("unsupported log level `{}`", other))),
    }
}

/// Starts `env_logger` at `level`. `RUST_LOG` still refines per-module filters.
///
/// Returns the level this module installed. Fails when some other logger already
/// owns the `log` facade.
pub fn init_logging(level: &str) -> Result<LevelFilter, TangoError> {
    let filter = parse_level(level)?;

    if let Some(active) = LOGGING_LEVEL.get() {
        return Ok(*active);
    }

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| TangoError::Config(format!("failed to install logger: {}", e)))?;

    Ok(*LOGGING_LEVEL.get_or_init(|| filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("INFO").unwrap(), LevelFilter::Info);
        assert_eq!(parse_level(" warning ").unwrap(), LevelFilter::Warn);
        assert!(matches!(parse_level("verbose"), Err(TangoError::Config(_))));
    }

    #[test]
    fn test_init_is_idempotent() {
        let first = init_logging("debug").unwrap();
        let second = init_logging("error").unwrap();
        assert_eq!(first, second);
        assert!(init_logging("loud").is_err());
    }
}
