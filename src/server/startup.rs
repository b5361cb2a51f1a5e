use std::{net::SocketAddr, time::Duration};

use axum::Router;
use axum_server::{tls_rustls::RustlsConfig, Handle};
use dioxus_logger::tracing::{self, Level};
use tokio::task::JoinHandle;

use crate::server::{config::Config, error::AppError, router, state::AppState};

/// How long in-flight requests may run once shutdown starts.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Initializes logging at the level named by `LOG_LEVEL`, `info` by default.
///
/// Runs before the configuration is loaded so configuration errors are logged.
pub fn init_logger() {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Selects `ring` as the process-wide rustls crypto provider.
///
/// The dependency graph enables more than one rustls backend, so rustls cannot
/// pick one on its own and must be told before any TLS configuration is built.
/// Installing twice is harmless.
pub fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }
}

/// Running HTTP listener.
pub struct HttpServer {
    handle: Handle,
    task: JoinHandle<std::io::Result<()>>,
    local_addr: SocketAddr,
}

impl HttpServer {
    /// Starts the ingress listener described by the configuration.
    ///
    /// Serves HTTPS when a certificate and key are configured, plain HTTP otherwise.
    ///
    /// # Arguments
    /// - `config` - Bind address, port, TLS material and the `TEST_GET` switch
    /// - `state` - Shared state handed to every request handler
    ///
    /// # Returns
    /// - `Ok(HttpServer)` - Listener bound and accepting connections
    /// - `Err(AppError)` - TLS material could not be loaded or the bind failed
    pub async fn start(config: &Config, state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::new(config.bind_address, config.port);

        let tls = match &config.tls {
            Some(paths) => {
                install_crypto_provider();
                Some(RustlsConfig::from_pem_file(&paths.cert, &paths.key).await?)
            }
            None => {
                tracing::warn!("NOT USING TLS");
                None
            }
        };

        let app = router::router(config.test_get).with_state(state);

        Self::serve(addr, app, tls).await
    }

    /// Binds `addr` and serves `app` in a background task.
    pub async fn serve(
        addr: SocketAddr,
        app: Router,
        tls: Option<RustlsConfig>,
    ) -> Result<Self, AppError> {
        let handle = Handle::new();
        let service = app.into_make_service();

        let task = match tls {
            Some(tls) => tokio::spawn(
                axum_server::bind_rustls(addr, tls)
                    .handle(handle.clone())
                    .serve(service),
            ),
            None => tokio::spawn(axum_server::bind(addr).handle(handle.clone()).serve(service)),
        };

        let Some(local_addr) = handle.listening().await else {
            // The server task ended before binding; surface its error.
            return Err(match task.await {
                Ok(Err(e)) => AppError::IoErr(e),
                Ok(Ok(())) => AppError::InternalError(format!(
                    "HTTP listener on {} stopped before accepting connections",
                    addr
                )),
                Err(e) => AppError::InternalError(format!("HTTP listener task failed: {}", e)),
            });
        };

        tracing::info!("Listening on {}", local_addr);

        Ok(Self {
            handle,
            task,
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections and waits for the listener to close.
    pub async fn stop(self) -> Result<(), AppError> {
        self.handle.graceful_shutdown(Some(SHUTDOWN_GRACE));

        match self.task.await {
            Ok(result) => Ok(result?),
            Err(e) => Err(AppError::InternalError(format!(
                "HTTP listener task failed: {}",
                e
            ))),
        }
    }
}
