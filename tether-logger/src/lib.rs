//! Logging helper
//!
//! Used by all test suites to implement consistent logging, with
//! output captured per-test.

// Imports
use {
	std::{env, sync::Once},
	tracing::level_filters::LevelFilter,
	tracing_subscriber::prelude::*,
};

/// Initializes logging.
///
/// Only the first call installs the subscriber, every other call is a no-op,
/// so that every test can call this without coordinating.
/// If another global subscriber was already installed, that one is kept.
pub fn init() {
	static INIT: Once = Once::new();
	INIT.call_once(self::init_inner);
}

/// Inner function for [`init`]
fn init_inner() {
	// Check if we should use colors
	let log_use_color = env::var("RUST_LOG_COLOR").map_or(true, |value| {
		matches!(value.trim().to_uppercase().as_str(), "1" | "YES" | "TRUE")
	});

	let filter = tracing_subscriber::EnvFilter::builder()
		.with_default_directive(LevelFilter::INFO.into())
		.from_env_lossy();
	let layer = tracing_subscriber::fmt::layer()
		.with_ansi(log_use_color)
		.with_test_writer()
		.with_filter(filter);

	// Note: Failing here means someone else set a global subscriber, which we respect.
	if let Err(err) = tracing_subscriber::registry().with(layer).try_init() {
		tracing::debug!(%err, "Logging was already initialized");
	}
}
