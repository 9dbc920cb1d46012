//! Tracing setup: subscriber installation, span definitions, and event helpers.

pub mod events;
pub mod spans;

use std::sync::Once;

use neuronet_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "NEURONET_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with human-readable output.
///
/// Respects `NEURONET_LOG` for filtering and defaults to `neuronet=info`.
/// Only the first call in a process installs anything.
pub fn init_tracing() {
    install(env_filter("info"), false);
}

/// Initialize tracing from configuration. `NEURONET_LOG` still wins over
/// `log_level` when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    install(env_filter(&config.log_level), config.json_output);
}

/// Directive used when `NEURONET_LOG` is unset.
pub fn default_directive(level: &str) -> String {
    format!("neuronet={}", level.trim().to_ascii_lowercase())
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);
        let installed = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        // A host that already installed a global subscriber keeps it.
        if let Err(err) = installed {
            tracing::debug!(error = %err, "tracing subscriber already installed");
        }
    });
}
