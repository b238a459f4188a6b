use std::sync::Once;

/// Graphics stack crates that are chatty at `info` and below.
const QUIET_DEPENDENCIES: &str = "wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "lumen_demos=debug,wgpu_core=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then
/// `config.default_level` with the graphics stack capped at `warn`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(
            config.env_filter.as_deref(),
            env.as_deref(),
            config.default_level,
        );

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_timestamp_millis()
            .init();

        log::debug!("logging initialized with filter \"{filter}\"");
    });
}

fn resolve_filter(
    explicit: Option<&str>,
    env: Option<&str>,
    default_level: log::LevelFilter,
) -> String {
    match explicit.or(env) {
        Some(filter) if !filter.trim().is_empty() => filter.to_string(),
        _ => format!("{},{QUIET_DEPENDENCIES}", default_level.as_str().to_ascii_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let f = resolve_filter(Some("debug"), Some("warn"), log::LevelFilter::Info);
        assert_eq!(f, "debug");
    }

    #[test]
    fn env_used_without_explicit_filter() {
        let f = resolve_filter(None, Some("lumen_demos=trace"), log::LevelFilter::Info);
        assert_eq!(f, "lumen_demos=trace");
    }

    #[test]
    fn default_level_quiets_graphics_stack() {
        let f = resolve_filter(None, None, log::LevelFilter::Info);
        assert_eq!(f, "info,wgpu_core=warn,wgpu_hal=warn,naga=warn");
    }

    #[test]
    fn blank_filter_falls_back_to_default() {
        let f = resolve_filter(Some("  "), None, log::LevelFilter::Warn);
        assert!(f.starts_with("warn,"));
    }
}
