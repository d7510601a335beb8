//! Tracing configuration for CohortDesk
//!
//! Structured logging to stderr, filtered by `RUST_LOG` with sensible
//! defaults: debug for our crates in development builds, info otherwise.

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let app_level = if is_dev { "debug" } else { "info" };
    vec![
        "info".to_string(),
        format!("cohortdesk={app_level}"),
        format!("cd_core={app_level}"),
        format!("cd_app={app_level}"),
        format!("cd_infra={app_level}"),
        // reqwest connection churn is noise at info
        "hyper=warn".to_string(),
        "reqwest=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the defaults.
pub fn init_tracing() {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(custom) => EnvFilter::new(custom),
        Err(_) => EnvFilter::new(build_filter_directives(is_development()).join(",")),
    };

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}
