//! Opt-in diagnostics for hosts that want to see what the library logs.
//!
//! The library only emits `tracing` events. Nothing is printed until the host
//! calls [`InitLogging`], which installs a stderr subscriber filtered by
//! `MARSHALING_TESTS_LOG` (same syntax as `RUST_LOG`).

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::error::MarshalStatus;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "MARSHALING_TESTS_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

static INIT: OnceLock<()> = OnceLock::new();

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber once per process.
///
/// A subscriber installed earlier by the host is left in place and counts as success.
pub fn init_logging() -> MarshalStatus {
    INIT.get_or_init(|| {
        let installed = tracing_subscriber::fmt()
            .with_env_filter(build_filter())
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(filter_var = LOG_ENV_VAR, "marshaling_tests logging initialized");
        }
    });
    MarshalStatus::Success
}

/// Enables stderr logging for the library. Safe to call repeatedly.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn InitLogging() -> MarshalStatus {
    init_logging()
}
