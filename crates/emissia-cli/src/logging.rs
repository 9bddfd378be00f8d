// SPDX-License-Identifier: Apache-2.0

use emissia_core::{env_bool, ENV_EMISSIA_LOG_JSON, ENV_EMISSIA_LOG_LEVEL};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";

/// `EMISSIA_LOG_LEVEL`, then `RUST_LOG`, then [`DEFAULT_LOG_FILTER`].
fn log_filter() -> EnvFilter {
    std::env::var(ENV_EMISSIA_LOG_LEVEL)
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw.trim()).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Logs go to stderr so stdout stays machine-readable.
pub(crate) fn init_tracing(log_json_flag: bool) {
    let filter = log_filter();
    let log_json = log_json_flag || env_bool(ENV_EMISSIA_LOG_JSON, false);
    let installed = if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    if installed.is_err() {
        tracing::debug!("global tracing subscriber already installed");
    }
}
