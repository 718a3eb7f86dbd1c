//! Job store trait.
//!
//! Defines [`JobStore`], the single owner of the id → job mapping and of the
//! identifier counter. Implementations are in-memory and synchronous; every
//! operation completes in bounded time without I/O.

use joblist_core::{Job, JobId, JobPatch, NewJob};

/// Uniquely keyed job storage with monotonic identifier assignment.
///
/// Behaves as a monitor: each operation is atomic with respect to the others,
/// and at most one mutation is in flight at a time.
///
/// Wrapped in `Arc<dyn JobStore>` for sharing across async boundaries.
pub trait JobStore: Send + Sync + 'static {
    /// Assigns the next identifier, inserts the job, and returns it.
    ///
    /// Identifiers start at 1 and are never reused, even after deletion.
    fn create(&self, fields: NewJob) -> Job;

    /// Returns the job with `id`, or `None` if absent.
    fn get(&self, id: JobId) -> Option<Job>;

    /// Applies the `Set` fields of `patch` to the job with `id`.
    ///
    /// Returns the updated job, or `None` if `id` is unknown.
    fn update(&self, id: JobId, patch: JobPatch) -> Option<Job>;

    /// Removes the job with `id`. Returns `true` if it existed.
    fn delete(&self, id: JobId) -> bool;

    /// Returns an owned snapshot of all jobs in insertion order.
    ///
    /// The snapshot is unaffected by mutations made after it was taken.
    fn list_all(&self) -> Vec<Job>;

    /// Number of live jobs.
    fn len(&self) -> usize;

    /// Check if the store holds no jobs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
