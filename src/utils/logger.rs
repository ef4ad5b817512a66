use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    let directives = if verbose {
        "halal_city_etl=debug,info"
    } else {
        "halal_city_etl=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn json_subscriber(verbose: bool) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .json()
                .with_current_span(false),
        )
}

/// JSON 格式日誌，方便批次排程收集
pub fn init_json_logger(verbose: bool) {
    json_subscriber(verbose).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_subscriber_accepts_events() {
        let subscriber = json_subscriber(true);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(city = "doha", "json logger ready");
        });
    }
}
