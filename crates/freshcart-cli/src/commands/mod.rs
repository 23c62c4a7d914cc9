//! Subcommand handlers. Each module exposes one `execute` function.

use chrono::NaiveDate;

use freshcart_adapters::{FixedClock, SystemClock};
use freshcart_core::{application::Clock, domain::YearMonth};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod check;
pub mod completions;
pub mod config;
pub mod form;
pub mod init;
pub mod rules;

/// The clock expiry checks run against.
///
/// `--today` wins over `validation.today`; with neither set the system
/// clock is used. A bad flag is a user error, a bad config value is a
/// configuration error.
pub fn clock_for(flag: Option<&str>, config: &AppConfig) -> CliResult<Box<dyn Clock>> {
    if let Some(raw) = flag {
        let month = parse_month(raw).map_err(|e| CliError::InvalidInput {
            message: format!("--today: {e}"),
            source: Some(Box::new(e)),
        })?;
        return Ok(Box::new(FixedClock::new(month)));
    }

    if let Some(raw) = config.validation.today.as_deref() {
        let month = parse_month(raw).map_err(|e| CliError::ConfigError {
            message: format!("validation.today: {e}"),
            source: Some(Box::new(e)),
        })?;
        return Ok(Box::new(FixedClock::new(month)));
    }

    Ok(Box::new(SystemClock::new()))
}

/// Accept `YYYY-MM` or a full `YYYY-MM-DD` date.
fn parse_month(raw: &str) -> Result<YearMonth, freshcart_core::domain::DomainError> {
    match raw.trim().parse::<YearMonth>() {
        Ok(month) => Ok(month),
        Err(err) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(YearMonth::from_date)
            .map_err(|_| err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_and_date() {
        assert_eq!(parse_month("2025-03").unwrap(), YearMonth::new(2025, 3).unwrap());
        assert_eq!(parse_month("2025-03-31").unwrap(), YearMonth::new(2025, 3).unwrap());
        assert!(parse_month("03/25").is_err());
    }

    #[test]
    fn flag_beats_config() {
        let mut cfg = AppConfig::default();
        cfg.validation.today = Some("2020-01".into());
        let clock = clock_for(Some("2025-03"), &cfg).unwrap();
        assert_eq!(clock.today(), YearMonth::new(2025, 3).unwrap());
    }

    #[test]
    fn config_month_used_without_flag() {
        let mut cfg = AppConfig::default();
        cfg.validation.today = Some("2020-01".into());
        let clock = clock_for(None, &cfg).unwrap();
        assert_eq!(clock.today(), YearMonth::new(2020, 1).unwrap());
    }

    #[test]
    fn bad_values_map_to_the_right_error() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            clock_for(Some("soon"), &cfg),
            Err(CliError::InvalidInput { .. })
        ));

        cfg.validation.today = Some("2025-13".into());
        assert!(matches!(
            clock_for(None, &cfg),
            Err(CliError::ConfigError { .. })
        ));
    }
}
