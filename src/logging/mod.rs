use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_FILTER,
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = result {
        tracing::debug!("tracing subscriber already installed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_filter_level() {
        assert_eq!(filter_for_verbosity(0), "info");
        assert_eq!(filter_for_verbosity(1), "debug");
        assert_eq!(filter_for_verbosity(2), "trace");
        assert_eq!(filter_for_verbosity(9), "trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(1);
    }
}
