//! Job service facade over a shared [`JobStore`].

use std::sync::Arc;

use joblist_core::{run_query, Job, JobId, JobPatch, ListQuery, NewJob, PageResult};
use tracing::{debug, info};

use crate::storage::JobStore;

/// Errors returned by job operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum JobError {
    #[error("job not found: {id}")]
    NotFound { id: JobId },
}

/// Core-facing job operations.
///
/// Cloning is cheap: the store is held behind an `Arc`.
#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn JobStore>,
}

impl JobService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    /// Returns a shared reference to the underlying store.
    #[must_use]
    pub fn store(&self) -> Arc<dyn JobStore> {
        Arc::clone(&self.store)
    }

    pub fn create_job(&self, fields: NewJob) -> Job {
        let job = self.store.create(fields);
        info!(job_id = job.id, "job created");
        job
    }

    /// Lists one page of jobs. `query` is assumed validated.
    #[must_use]
    pub fn list_jobs(&self, query: &ListQuery) -> PageResult {
        let result = run_query(self.store.list_all(), query);
        debug!(
            page = result.page,
            per_page = result.per_page,
            total = result.total,
            search = query.search.as_deref(),
            sort_by = ?query.sort_by,
            sort_order = ?query.sort_order,
            "jobs listed"
        );
        result
    }

    /// # Errors
    ///
    /// Returns [`JobError::NotFound`] if no job has this id.
    pub fn get_job(&self, id: JobId) -> Result<Job, JobError> {
        self.store.get(id).ok_or(JobError::NotFound { id })
    }

    /// Applies a partial update and returns the updated job.
    ///
    /// # Errors
    ///
    /// Returns [`JobError::NotFound`] if no job has this id.
    pub fn update_job(&self, id: JobId, patch: JobPatch) -> Result<Job, JobError> {
        let job = self
            .store
            .update(id, patch)
            .ok_or(JobError::NotFound { id })?;
        info!(job_id = id, "job updated");
        Ok(job)
    }

    /// # Errors
    ///
    /// Returns [`JobError::NotFound`] if no job has this id.
    pub fn delete_job(&self, id: JobId) -> Result<(), JobError> {
        if !self.store.delete(id) {
            return Err(JobError::NotFound { id });
        }
        info!(job_id = id, "job deleted");
        Ok(())
    }

    /// Number of live jobs.
    #[must_use]
    pub fn job_count(&self) -> usize {
        self.store.len()
    }
}
