use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Level;

static IS_INIT: AtomicBool = AtomicBool::new(false);

/// Name of the environment variable that turns tracing on, e.g. `GSOLID_LOG=debug`.
pub const LOG_ENV: &str = "GSOLID_LOG";

/// Installs the subscriber only when `GSOLID_LOG` is set.
pub fn enable_tracing_on_demand() {
  if std::env::var_os(LOG_ENV).is_some() {
    init();
  }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
  use tracing_subscriber::{fmt, prelude::*, EnvFilter};
  if !IS_INIT.swap(true, Ordering::SeqCst) {
    tracing_subscriber::registry()
      .with(fmt::layer())
      .with(EnvFilter::from_env(LOG_ENV))
      .with(
        tracing_subscriber::filter::Targets::new().with_targets(vec![("gsolid", Level::TRACE)]),
      )
      .init();
  }
}
