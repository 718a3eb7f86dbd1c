//! Network module with deferred startup lifecycle.
//!
//! `new()` creates shared resources, `start()` binds the TCP listener, and
//! `serve()` accepts connections until the shutdown future resolves. Between
//! `start()` and `serve()` the caller can read the bound port.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::config::NetworkConfig;
use super::handlers::{
    create_job_handler, delete_job_handler, get_job_handler, health_handler, list_jobs_handler,
    liveness_handler, readiness_handler, update_job_handler, AppState,
};
use super::middleware::{build_http_layers, track_in_flight};
use super::shutdown::ShutdownController;
use crate::service::{JobService, ServiceConfig};

/// Owns the HTTP server lifecycle for the job API.
///
/// 1. `new()` -- allocates the shutdown controller
/// 2. `start()` -- binds the TCP listener to the configured address
/// 3. `serve()` -- serves requests until shutdown is signalled, then drains
pub struct NetworkModule {
    config: NetworkConfig,
    service_config: ServiceConfig,
    jobs: JobService,
    listener: Option<TcpListener>,
    shutdown: Arc<ShutdownController>,
}

impl NetworkModule {
    /// Creates a new network module without binding any port.
    #[must_use]
    pub fn new(config: NetworkConfig, service_config: ServiceConfig, jobs: JobService) -> Self {
        Self {
            config,
            service_config,
            jobs,
            listener: None,
            shutdown: Arc::new(ShutdownController::new()),
        }
    }

    /// Returns a shared reference to the shutdown controller.
    #[must_use]
    pub fn shutdown_controller(&self) -> Arc<ShutdownController> {
        Arc::clone(&self.shutdown)
    }

    /// Assembles the axum router with all routes and middleware.
    ///
    /// Routes:
    /// - `POST /jobs`, `GET /jobs` -- create, list (also with trailing slash)
    /// - `GET|PUT|DELETE /jobs/{id}` -- read, partial update, delete
    /// - `GET /health`, `/health/live`, `/health/ready` -- probes
    pub fn build_router(&self) -> Router {
        let state = AppState {
            jobs: self.jobs.clone(),
            shutdown: Arc::clone(&self.shutdown),
            config: Arc::new(self.config.clone()),
            service_config: Arc::new(self.service_config.clone()),
            start_time: Instant::now(),
        };
        build_router(state)
    }

    /// Binds the TCP listener and returns the actual port.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound (e.g., port in use).
    pub async fn start(&mut self) -> anyhow::Result<u16> {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        let port = listener.local_addr()?.port();

        info!(host = %self.config.host, port, "TCP listener bound");

        self.listener = Some(listener);
        Ok(port)
    }

    /// Serves requests until `shutdown` resolves.
    ///
    /// When the signal fires the health state moves to Draining and job
    /// routes start answering 503. After the listener closes, waits up to
    /// `drain_timeout` for in-flight requests before moving to Stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if `start()` was not called first, or if the server
    /// encounters a fatal I/O error.
    pub async fn serve(
        mut self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let listener = self
            .listener
            .take()
            .ok_or_else(|| anyhow::anyhow!("start() must be called before serve()"))?;
        let router = self.build_router();
        let controller = Arc::clone(&self.shutdown);
        let drain_timeout = self.config.drain_timeout;

        let signal_controller = Arc::clone(&controller);
        let signal = async move {
            shutdown.await;
            info!("shutdown signal received, draining");
            signal_controller.trigger_shutdown();
        };

        controller.set_ready();
        info!("serving job API");

        axum::serve(listener, router)
            .with_graceful_shutdown(signal)
            .await?;

        if controller.wait_for_drain(drain_timeout).await {
            info!("all in-flight requests drained");
        } else {
            warn!(
                in_flight = controller.in_flight_count(),
                "drain timeout expired with requests still in flight"
            );
        }
        Ok(())
    }
}

/// Builds the full router around an existing [`AppState`].
pub fn build_router(state: AppState) -> Router {
    let layers = build_http_layers(&state.config);

    let jobs = Router::new()
        .route("/jobs", get(list_jobs_handler).post(create_job_handler))
        .route("/jobs/", get(list_jobs_handler).post(create_job_handler))
        .route(
            "/jobs/{id}",
            get(get_job_handler)
                .put(update_job_handler)
                .delete(delete_job_handler),
        )
        .route_layer(from_fn_with_state(
            Arc::clone(&state.shutdown),
            track_in_flight,
        ));

    Router::new()
        .route("/health", get(health_handler))
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
        .merge(jobs)
        .layer(layers)
        .with_state(state)
}
