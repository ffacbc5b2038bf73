//! Error tracking and structured logging.
//!
//! Sentry is optional and only starts when `SENTRY_DSN` is set. The tracing
//! subscriber is always installed; warnings and errors (failed CMS fetches,
//! malformed objects) become Sentry events, info-level lines become
//! breadcrumbs on those events.

use std::borrow::Cow;

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::StorefrontConfig;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "cosmic_shop_storefront=info,tower_http=debug";

/// Flushes pending Sentry events when dropped. Hold it until the server exits.
#[must_use = "dropping the guard stops Sentry reporting"]
pub struct ObservabilityGuard {
    _sentry: Option<sentry::ClientInitGuard>,
}

/// Start Sentry and install the global tracing subscriber.
///
/// Sentry has to be initialized first so the tracing layer picks up its
/// client.
pub fn init(config: &StorefrontConfig) -> ObservabilityGuard {
    let sentry = config
        .sentry_dsn
        .as_deref()
        .map(|dsn| sentry::init((dsn, sentry_options(config))));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(event_filter))
        .init();

    if sentry.is_some() {
        tracing::info!(
            environment = config.sentry_environment.as_deref().unwrap_or("default"),
            "Sentry error tracking enabled"
        );
    }

    ObservabilityGuard { _sentry: sentry }
}

fn sentry_options(config: &StorefrontConfig) -> sentry::ClientOptions {
    sentry::ClientOptions {
        release: sentry::release_name!(),
        environment: config.sentry_environment.clone().map(Cow::Owned),
        sample_rate: config.sentry_sample_rate,
        traces_sample_rate: config.sentry_traces_sample_rate,
        attach_stacktrace: true,
        ..Default::default()
    }
}

fn event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO => sentry_tracing::EventFilter::Breadcrumb,
        // tower_http request spans log at debug; keep them out of Sentry
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use secrecy::SecretString;

    use super::*;
    use crate::config::CosmicConfig;

    fn config(environment: Option<&str>) -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            cosmic: CosmicConfig {
                api_url: "https://api.cosmicjs.com/v3".to_string(),
                bucket_slug: "shop-bucket".to_string(),
                read_key: SecretString::from("k8Qz7P3mXw9Lr2Vb5Nc1Hj6Tf4Ys"),
            },
            featured_limit: 8,
            static_dir: PathBuf::from("static"),
            sentry_dsn: None,
            sentry_environment: environment.map(str::to_string),
            sentry_sample_rate: 0.5,
            sentry_traces_sample_rate: 0.1,
        }
    }

    #[test]
    fn test_sentry_options_follow_config() {
        let options = sentry_options(&config(Some("staging")));
        assert_eq!(options.environment.as_deref(), Some("staging"));
        assert!((options.sample_rate - 0.5).abs() < f32::EPSILON);
        assert!((options.traces_sample_rate - 0.1).abs() < f32::EPSILON);
        assert!(options.attach_stacktrace);
    }

    #[test]
    fn test_sentry_options_without_environment() {
        let options = sentry_options(&config(None));
        assert!(options.environment.is_none());
    }
}
