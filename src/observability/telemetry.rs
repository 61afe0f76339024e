//! Error reporting lifecycle (Sentry).
//!
//! [`init`] is called once from `main` before the server starts and the
//! returned [`TelemetryGuard`] is shut down explicitly after the server
//! stops. A second `init` in the same process is rejected rather than
//! silently re-initialising the client.

use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use thiserror::Error;

use crate::config::TelemetryConfig;

/// Runtime tag attached to every event.
pub const RUNTIME: &str = "server";

static STARTED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("telemetry already initialised in this process")]
    AlreadyInitialized,

    #[error("invalid Sentry DSN: {0}")]
    Dsn(String),
}

/// Keeps the Sentry client alive until [`TelemetryGuard::shutdown`].
#[must_use = "dropping the guard stops error reporting"]
pub struct TelemetryGuard {
    client: Option<sentry::ClientInitGuard>,
}

impl TelemetryGuard {
    /// Whether events are being sent.
    pub fn is_enabled(&self) -> bool {
        self.client.as_ref().is_some_and(|guard| guard.is_enabled())
    }

    /// Flush pending events and stop the client.
    pub fn shutdown(self, timeout: Duration) {
        if let Some(guard) = self.client {
            if let Some(client) = sentry::Hub::current().client() {
                let flushed = client.close(Some(timeout));
                tracing::info!(flushed, "Telemetry shut down");
            }
            drop(guard);
        }
    }
}

/// Start error reporting. A config without DSN yields a disabled guard.
pub fn init(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    if STARTED.swap(true, Ordering::SeqCst) {
        return Err(TelemetryError::AlreadyInitialized);
    }

    let Some(raw) = config.dsn.as_deref() else {
        tracing::info!("Telemetry disabled (no DSN configured)");
        return Ok(TelemetryGuard { client: None });
    };

    let dsn = raw
        .parse::<sentry::types::Dsn>()
        .map_err(|e| TelemetryError::Dsn(e.to_string()))?;

    let guard = sentry::init(sentry::ClientOptions {
        dsn: Some(dsn),
        release: sentry::release_name!(),
        environment: Some(Cow::Owned(config.environment.clone())),
        sample_rate: config.sample_rate,
        ..Default::default()
    });

    sentry::configure_scope(|scope| scope.set_tag("runtime", RUNTIME));

    tracing::info!(environment = %config.environment, "Telemetry initialised");
    Ok(TelemetryGuard {
        client: Some(guard),
    })
}

/// Report an error with the route it happened on. No-op when disabled.
pub fn capture_error<E>(route: &str, error: &E)
where
    E: std::error::Error + ?Sized,
{
    sentry::with_scope(
        |scope| {
            scope.set_tag("route", route);
            scope.set_tag("runtime", RUNTIME);
        },
        || sentry::capture_error(error),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_once_per_process() {
        let guard = init(&TelemetryConfig::default()).expect("first init succeeds");
        assert!(!guard.is_enabled());
        assert!(matches!(
            init(&TelemetryConfig::default()),
            Err(TelemetryError::AlreadyInitialized)
        ));
        guard.shutdown(Duration::from_millis(10));
    }

    #[test]
    fn test_capture_without_client_is_noop() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        capture_error("/api/contact", &err);
    }
}
