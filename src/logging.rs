//! Tracing setup for the checker binary

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber with the requested base level
///
/// `RUST_LOG` overrides the flag when set; WebDriver transport chatter is
/// pinned to warn either way.
pub fn init(log_level: &str) {
    let default_filter = format!("govisit_watch={log_level},fantoccini=warn,hyper=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}
