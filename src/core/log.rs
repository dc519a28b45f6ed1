use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Level for the `fxconv` target and the fallback `RUST_LOG` directive.
///
/// Warnings stay visible without `--verbose`.
fn log_levels(verbose: bool) -> (LevelFilter, &'static str) {
    if verbose {
        (LevelFilter::DEBUG, "debug")
    } else {
        (LevelFilter::WARN, "warn")
    }
}

pub fn init_logging(verbose: bool) {
    let (level_filter, level) = log_levels(verbose);
    let app_filter = Targets::new().with_target("fxconv", level_filter);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries command output only
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_target(verbose)
                .with_writer(std::io::stderr),
        )
        .with(app_filter)
        .with(env_filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_visible_without_verbose() {
        let (level_filter, level) = log_levels(false);
        assert_eq!(level_filter, LevelFilter::WARN);
        assert_eq!(level, "warn");
    }

    #[test]
    fn test_verbose_enables_debug() {
        assert_eq!(log_levels(true), (LevelFilter::DEBUG, "debug"));
    }
}
