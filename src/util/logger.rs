use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

static LOGGER_INIT: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_logger(app_name: &'static str) {
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let installed = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true)
            .try_init();

        if installed.is_ok() {
            tracing::info!(app = app_name, "logger initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logger("test");
        init_logger("test");
        assert!(LOGGER_INIT.get().is_some());
    }
}
