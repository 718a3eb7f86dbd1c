//! Job storage for the server.
//!
//! - [`JobStore`]: the trait every store implements (create/get/update/
//!   delete/list-all with monotonic id assignment)
//! - [`InMemoryJobStore`]: the process-lifetime implementation
//!
//! The store is constructed explicitly and shared as `Arc<dyn JobStore>`;
//! there is no global instance.

pub mod engine;
pub mod engines;

pub use engine::*;
pub use engines::InMemoryJobStore;
