use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Filter directives for the subscriber. A non-empty `RUST_LOG` replaces the
/// verbosity flag entirely; otherwise `--verbose` lifts this crate to debug
/// while dependencies stay at warn.
pub(crate) fn filter_directives(verbose: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ if verbose => "warn,pricehist=debug".to_string(),
        _ => "warn".to_string(),
    }
}

/// Installs the global subscriber. See [`filter_directives`] for how
/// `RUST_LOG` and the verbosity flag combine.
pub fn init_logging(verbose: bool) {
    let directives = filter_directives(verbose, std::env::var("RUST_LOG").ok());
    let env_filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_lifts_only_this_crate() {
        assert_eq!(filter_directives(true, None), "warn,pricehist=debug");
        assert_eq!(filter_directives(false, None), "warn");
    }

    #[test]
    fn test_rust_log_overrides_flag() {
        assert_eq!(
            filter_directives(false, Some("pricehist=trace".to_string())),
            "pricehist=trace"
        );
        assert_eq!(
            filter_directives(true, Some("info".to_string())),
            "info"
        );
        assert_eq!(filter_directives(true, Some("  ".to_string())), "warn,pricehist=debug");
    }

    #[test]
    fn test_directives_parse() {
        for directives in [
            filter_directives(true, None),
            filter_directives(false, None),
            filter_directives(false, Some("pricehist=trace".to_string())),
        ] {
            assert!(EnvFilter::try_new(&directives).is_ok(), "{directives}");
        }
    }
}
