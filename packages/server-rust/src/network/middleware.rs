//! HTTP middleware stack for the job listing server.
//!
//! Builds the Tower middleware pipeline applied to all HTTP requests, plus
//! the in-flight tracking layer applied to job routes. Ordering follows the
//! outer-to-inner convention: the first layer listed is the outermost.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::HeaderName;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use super::config::NetworkConfig;
use super::shutdown::{HealthState, ShutdownController};

/// The composed Tower layer type produced by [`build_http_layers`].
type HttpLayers = tower::layer::util::Stack<
    PropagateRequestIdLayer,
    tower::layer::util::Stack<
        TimeoutLayer,
        tower::layer::util::Stack<
            CorsLayer,
            tower::layer::util::Stack<
                CompressionLayer,
                tower::layer::util::Stack<
                    TraceLayer<
                        tower_http::classify::SharedClassifier<
                            tower_http::classify::ServerErrorsAsFailures,
                        >,
                    >,
                    tower::layer::util::Stack<
                        SetRequestIdLayer<MakeRequestUuid>,
                        tower::layer::util::Identity,
                    >,
                >,
            >,
        >,
    >,
>;

/// Builds the HTTP-level Tower middleware stack from the network configuration.
///
/// **Outermost to innermost:**
/// 1. `SetRequestId` -- UUID v4 `X-Request-Id` on every request
/// 2. `Tracing` -- request/response spans
/// 3. `Compression` -- gzip responses
/// 4. `CORS` -- configured origins; job CRUD methods
/// 5. `Timeout` -- 408 after `request_timeout`
/// 6. `PropagateRequestId` -- copies `X-Request-Id` onto the response
#[must_use]
pub fn build_http_layers(config: &NetworkConfig) -> HttpLayers {
    let x_request_id = HeaderName::from_static("x-request-id");

    ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&config.cors_origins))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(PropagateRequestIdLayer::new(x_request_id))
        .into_inner()
}

/// Builds the CORS layer from the configured list of allowed origins.
///
/// A wildcard `"*"` allows any origin; otherwise unparsable entries are
/// skipped.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

/// Counts job requests as in flight and refuses new ones once draining.
///
/// Installed with `axum::middleware::from_fn_with_state` on job routes only,
/// so health probes keep answering during shutdown.
pub async fn track_in_flight(
    State(shutdown): State<Arc<ShutdownController>>,
    request: Request,
    next: Next,
) -> Response {
    if matches!(
        shutdown.health_state(),
        HealthState::Draining | HealthState::Stopped
    ) {
        debug!(uri = %request.uri(), "rejecting request while draining");
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }

    let _guard = shutdown.in_flight_guard();
    next.run(request).await
}
