//! Log subscriber for the `lineup` binary. Logs go to stderr so table
//! output on stdout stays pipeable.

use tracing_subscriber::EnvFilter;

/// Level implied by the number of `-v` flags.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Explicit `--log-filter` wins, then `RUST_LOG`, then the `-v` level.
pub fn build_filter(verbose: u8, explicit: Option<&str>) -> EnvFilter {
    if let Some(directives) = explicit {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return filter;
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

pub fn init_logging(verbose: u8, explicit: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, explicit))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
