use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins; otherwise crate-level debug when verbose, warn when not.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "capability_demo=debug,info"
    } else {
        "capability_demo=warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

// stdout 只留給示範輸出，日誌一律寫到 stderr
pub fn init_cli_logger(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(layer)
        .init();
}

pub fn init_json_logger(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(layer)
        .init();
}
