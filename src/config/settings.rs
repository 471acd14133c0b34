//! Runtime settings for the augmenter engine
//!
//! Settings come from the process environment (optionally seeded from a
//! `.env` file). Every variable is optional; unset variables keep the
//! defaults, malformed ones are reported as [`AugmentError::Config`].

use std::env;
use std::str::FromStr;

use crate::error::{AugmentError, AugmentResult};
use crate::utils::diagnostics::MAX_DIAGNOSTIC_CAPACITY;
use crate::utils::logger::{self, LogFormat};

pub const ENV_ON_MISSING: &str = "AUGMENT_ON_MISSING";
pub const ENV_ON_OVERWRITE: &str = "AUGMENT_ON_OVERWRITE";
pub const ENV_DIAGNOSTIC_CAPACITY: &str = "AUGMENT_DIAGNOSTIC_CAPACITY";
pub const ENV_LOG_FORMAT: &str = "AUGMENT_LOG_FORMAT";

const DEFAULT_DIAGNOSTIC_CAPACITY: usize = 64;

/// What `component` does with references that do not resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Return the first existence error to the caller.
    #[default]
    Fail,
    /// Drop unresolved entries and compose what remains.
    Skip,
}

impl FromStr for MissingPolicy {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Ok(MissingPolicy::Fail),
            "skip" => Ok(MissingPolicy::Skip),
            other => Err(AugmentError::Config(format!(
                "{} must be 'fail' or 'skip', got '{}'",
                ENV_ON_MISSING, other
            ))),
        }
    }
}

/// What registration does when a name is already taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Last write wins.
    #[default]
    Replace,
    /// Refuse the whole registration.
    Reject,
}

impl FromStr for OverwritePolicy {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "replace" => Ok(OverwritePolicy::Replace),
            "reject" => Ok(OverwritePolicy::Reject),
            other => Err(AugmentError::Config(format!(
                "{} must be 'replace' or 'reject', got '{}'",
                ENV_ON_OVERWRITE, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentSettings {
    pub on_missing: MissingPolicy,
    pub on_overwrite: OverwritePolicy,
    /// Buffer size of the diagnostic broadcast channel
    pub diagnostic_capacity: usize,
    pub log_format: LogFormat,
}

impl Default for AugmentSettings {
    fn default() -> Self {
        Self {
            on_missing: MissingPolicy::default(),
            on_overwrite: OverwritePolicy::default(),
            diagnostic_capacity: DEFAULT_DIAGNOSTIC_CAPACITY,
            log_format: LogFormat::Text,
        }
    }
}

impl AugmentSettings {
    /// Loads settings from the environment after reading any `.env` file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// std::env::set_var("AUGMENT_ON_MISSING", "skip");
    /// let settings = AugmentSettings::from_env().unwrap();
    /// assert_eq!(settings.on_missing, MissingPolicy::Skip);
    /// ```
    pub fn from_env() -> AugmentResult<Self> {
        dotenv::dotenv().ok();
        Self::from_process_env()
    }

    /// Loads settings from the process environment only, without touching
    /// any `.env` file.
    pub fn from_process_env() -> AugmentResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AugmentResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_ON_MISSING) {
            settings.on_missing = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_ON_OVERWRITE) {
            settings.on_overwrite = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_DIAGNOSTIC_CAPACITY) {
            let capacity: usize = raw.trim().parse().map_err(|e| {
                AugmentError::Config(format!("{} must be a number: {}", ENV_DIAGNOSTIC_CAPACITY, e))
            })?;
            if capacity == 0 || capacity > MAX_DIAGNOSTIC_CAPACITY {
                return Err(AugmentError::Config(format!(
                    "{} must be between 1 and {}, got {}",
                    ENV_DIAGNOSTIC_CAPACITY, MAX_DIAGNOSTIC_CAPACITY, capacity
                )));
            }
            settings.diagnostic_capacity = capacity;
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            settings.log_format = raw.parse()?;
        }

        Ok(settings)
    }

    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.on_missing = policy;
        self
    }

    pub fn with_overwrite_policy(mut self, policy: OverwritePolicy) -> Self {
        self.on_overwrite = policy;
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Installs the global subscriber in the configured [`LogFormat`].
    ///
    /// Returns whether this call installed it; see [`logger::init_logging`].
    pub fn init_logging(&self) -> bool {
        logger::init_logging(self.log_format)
    }
}
