// SPDX-License-Identifier: MPL-2.0
//! Installs the `tracing` subscriber used by the demo binary.
//!
//! `RUST_LOG` takes precedence. Otherwise the `[general] log_level` config
//! value is used, and `info` when that is missing or unparsable.
//!
//! If a subscriber is already installed, this leaves it in place.

use crate::config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Builds the filter from `RUST_LOG`, then `configured`, then the default.
///
/// Returns the filter and a description of the first directive that failed
/// to parse, if any.
pub fn build_filter(configured: Option<&str>) -> (EnvFilter, Option<String>) {
    let mut problem = None;

    if std::env::var_os(LOG_ENV_VAR).is_some() {
        match EnvFilter::try_from_env(LOG_ENV_VAR) {
            Ok(filter) => return (filter, None),
            Err(err) => {
                problem = Some(format!("failed to parse {LOG_ENV_VAR}: {err}"));
            }
        }
    }

    if let Some(directive) = configured.map(str::trim).filter(|d| !d.is_empty()) {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return (filter, problem),
            Err(err) => {
                if problem.is_none() {
                    problem = Some(format!("invalid log_level {directive:?}: {err}"));
                }
            }
        }
    }

    (EnvFilter::new(DEFAULT_LOG_LEVEL), problem)
}

/// Installs a compact fmt subscriber on stderr.
///
/// Returns `false` when another subscriber was already set.
pub fn init(configured: Option<&str>) -> bool {
    let (filter, problem) = build_filter(configured);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if let Some(problem) = problem {
        tracing::warn!("{problem}");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configured_level_reports_problem() {
        if std::env::var_os(LOG_ENV_VAR).is_some() {
            return;
        }
        let (_filter, problem) = build_filter(Some("swipe_toast=loudest"));
        assert!(problem.is_some_and(|p| p.contains("log_level")));
    }

    #[test]
    fn valid_configured_level_is_silent() {
        if std::env::var_os(LOG_ENV_VAR).is_some() {
            return;
        }
        let (filter, problem) = build_filter(Some("swipe_toast=debug"));
        assert!(problem.is_none());
        assert!(filter.to_string().contains("swipe_toast=debug"));
    }

    #[test]
    fn blank_configured_level_falls_back_to_default() {
        if std::env::var_os(LOG_ENV_VAR).is_some() {
            return;
        }
        let (filter, problem) = build_filter(Some("   "));
        assert!(problem.is_none());
        assert_eq!(filter.to_string(), DEFAULT_LOG_LEVEL);
    }
}
