//! Global tracing subscriber setup

use std::str::FromStr;

use once_cell::sync::OnceCell;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::config::settings::ENV_LOG_FORMAT;
use crate::error::AugmentError;

/// Log output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text format with timestamp, level, target, and message
    Text,
    /// JSON format with structured fields: timestamp, level, target, message
    Json,
}

impl FromStr for LogFormat {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            other => Err(AugmentError::Config(format!(
                "{} must be 'text' or 'json', got '{}'",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

static LOGGING: OnceCell<bool> = OnceCell::new();

/// Installs the global tracing subscriber and bridges `log` records into it.
///
/// The format normally comes from the engine settings, see
/// [`crate::config::AugmentSettings::init_logging`].
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Only the first
/// call does any work; it returns whether the subscriber was installed (an
/// embedding application may already own the global subscriber).
pub fn init_logging(format: LogFormat) -> bool {
    *LOGGING.get_or_init(|| {
        if tracing_log::LogTracer::init().is_err() {
            return false;
        }

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(filter);

        let installed = match format {
            LogFormat::Text => tracing::subscriber::set_global_default(
                registry.with(tracing_subscriber::fmt::layer().with_target(true)),
            ),
            LogFormat::Json => tracing::subscriber::set_global_default(
                registry.with(tracing_subscriber::fmt::layer().json()),
            ),
        };

        match installed {
            Ok(()) => {
                tracing::debug!(?format, "augment logging initialized");
                true
            }
            Err(_) => false,
        }
    })
}
