//! Job use-case service.
//!
//! [`JobService`] is the core-facing entry point the transport layer calls:
//! mutations go straight to the [`JobStore`](crate::storage::JobStore), and
//! listing runs the query pipeline over a store snapshot.

pub mod config;
pub mod jobs;

pub use config::ServiceConfig;
pub use jobs::{JobError, JobService};
