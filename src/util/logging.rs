//! Diagnostic logging setup
//!
//! Diagnostics always go to stderr so they never interleave with the
//! generated log stream on stdout. `RUST_LOG` is honoured; `--debug` raises
//! the default level to `debug`.

use env_logger::{Builder, Env, Target};

/// Default filter when `RUST_LOG` is unset
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

/// Initialise the global logger
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(debug: bool) {
    let env = Env::default().default_filter_or(default_filter(debug));
    let _ = Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp_millis()
        .try_init();
}
