use std::env;

use crate::error::ConfigError;

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_TITLE: &str = "Tic-Tac-Toe Classic";
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [360.0, 520.0];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_filter: String,
    pub title: String,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl AppConfig {
    /// Reads `TTT_LOG`, `TTT_TITLE` and `TTT_WINDOW_SIZE` from the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let window_size = match lookup("TTT_WINDOW_SIZE") {
            Some(raw) => parse_window_size(&raw)?,
            None => defaults.window_size,
        };

        Ok(AppConfig {
            log_filter: lookup("TTT_LOG").unwrap_or(defaults.log_filter),
            title: lookup("TTT_TITLE").unwrap_or(defaults.title),
            window_size,
        })
    }
}

fn parse_window_size(raw: &str) -> Result<[f32; 2], ConfigError> {
    let invalid = || ConfigError::InvalidWindowSize(raw.to_string());

    let (width, height) = raw.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: f32 = width.trim().parse().map_err(|_| invalid())?;
    let height: f32 = height.trim().parse().map_err(|_| invalid())?;

    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(invalid());
    }

    Ok([width, height])
}
