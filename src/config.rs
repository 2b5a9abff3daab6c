//! Shell configuration parsed from environment variables.

use std::path::PathBuf;

use tracing::Level;

pub const DEFAULT_HOME: &str = ".lesson";
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid LESSON_LOG '{0}' (expected error, warn, info, debug, or trace)")]
    LogLevel(String),
    #[error("invalid LESSON_SEED '{0}' (expected an unsigned integer)")]
    Seed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the lesson snapshot.
    pub home: PathBuf,
    pub log_level: Level,
    /// Seed for playback shuffles; random when absent.
    pub seed: Option<u64>,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `LESSON_HOME`: default `.lesson`
    /// - `LESSON_LOG`: `error|warn|info|debug|trace`, default `info`
    /// - `LESSON_SEED`: u64
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source. Empty values count as
    /// unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let home = var("LESSON_HOME").map_or_else(|| PathBuf::from(DEFAULT_HOME), PathBuf::from);
        let log_level = match var("LESSON_LOG") {
            Some(raw) => parse_level(&raw)?,
            None => DEFAULT_LOG_LEVEL,
        };
        let seed = var("LESSON_SEED").map(|raw| parse_seed(&raw)).transpose()?;

        Ok(Self { home, log_level, seed })
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, home: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(home) = home {
            self.home = home;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

fn parse_level(raw: &str) -> Result<Level, ConfigError> {
    raw.trim().parse::<Level>().map_err(|_| ConfigError::LogLevel(raw.to_owned()))
}

fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse::<u64>().map_err(|_| ConfigError::Seed(raw.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
