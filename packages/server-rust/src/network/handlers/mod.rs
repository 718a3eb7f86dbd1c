//! HTTP handler definitions for the job listing server.
//!
//! This module defines `AppState` (the shared state carried through axum
//! extractors) and re-exports all handler functions for building the router.

pub mod health;
pub mod jobs;

pub use health::{health_handler, liveness_handler, readiness_handler};
pub use jobs::{
    create_job_handler, delete_job_handler, get_job_handler, list_jobs_handler,
    update_job_handler,
};

use std::sync::Arc;
use std::time::Instant;

use super::{NetworkConfig, ShutdownController};
use crate::service::{JobService, ServiceConfig};

/// Shared application state passed to all axum handlers via `State` extraction.
///
/// Holds `Arc` references to shared resources so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Job operations over the shared store.
    pub jobs: JobService,
    /// Graceful shutdown controller with health state and in-flight tracking.
    pub shutdown: Arc<ShutdownController>,
    /// Network configuration (bind address, CORS, timeouts).
    pub config: Arc<NetworkConfig>,
    /// Pagination defaults and limits for list requests.
    pub service_config: Arc<ServiceConfig>,
    /// Server process start time, used for uptime calculation.
    pub start_time: Instant,
}
