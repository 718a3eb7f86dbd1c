//! In-memory [`JobStore`] implementation backed by a locked [`BTreeMap`].
//!
//! The map and the identifier counter sit behind one `parking_lot::RwLock`,
//! so id assignment and insertion happen under the same write guard. Keys are
//! assigned in increasing order, which makes `BTreeMap` iteration order equal
//! to insertion order.

use std::collections::BTreeMap;

use joblist_core::{Job, JobId, JobPatch, NewJob};
use parking_lot::RwLock;

use crate::storage::engine::JobStore;

#[derive(Debug, Default)]
struct Inner {
    jobs: BTreeMap<JobId, Job>,
    /// Last identifier handed out. 0 before the first create.
    last_id: JobId,
}

/// In-memory job storage for the lifetime of the process.
///
/// Readers share the lock; writers are exclusive. Reads return clones, so
/// no guard ever escapes a method.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    inner: RwLock<Inner>,
}

impl InMemoryJobStore {
    /// Creates a new, empty store. The first job created gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobStore for InMemoryJobStore {
    fn create(&self, fields: NewJob) -> Job {
        let mut inner = self.inner.write();
        inner.last_id += 1;
        let job = Job::from_new(inner.last_id, fields);
        inner.jobs.insert(job.id, job.clone());
        job
    }

    fn get(&self, id: JobId) -> Option<Job> {
        self.inner.read().jobs.get(&id).cloned()
    }

    fn update(&self, id: JobId, patch: JobPatch) -> Option<Job> {
        let mut inner = self.inner.write();
        let job = inner.jobs.get_mut(&id)?;
        job.apply(patch);
        Some(job.clone())
    }

    fn delete(&self, id: JobId) -> bool {
        self.inner.write().jobs.remove(&id).is_some()
    }

    fn list_all(&self) -> Vec<Job> {
        self.inner.read().jobs.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.inner.read().jobs.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use joblist_core::FieldUpdate;

    use super::*;

    fn fields(title: &str) -> NewJob {
        NewJob::new(title, "Remote", "Berlin")
    }

    #[test]
    fn ids_start_at_one_and_follow_creation_order() {
        let store = InMemoryJobStore::new();
        let ids: Vec<JobId> = (0..5).map(|i| store.create(fields(&format!("j{i}"))).id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let store = InMemoryJobStore::new();
        let first = store.create(fields("a"));
        let second = store.create(fields("b"));
        assert!(store.delete(second.id));
        assert!(store.delete(first.id));

        let third = store.create(fields("c"));
        assert_eq!(third.id, 3);
        assert!(!store.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_returns_created_job() {
        let store = InMemoryJobStore::new();
        let created = store.create(fields("Backend Engineer").with_salary(Some(1.0), Some(2.0)));

        let fetched = store.get(created.id).expect("job should exist");
        assert_eq!(fetched, created);
        assert!(store.get(99).is_none());
    }

    #[test]
    fn update_changes_only_set_fields() {
        let store = InMemoryJobStore::new();
        let created = store.create(fields("Backend Engineer").with_salary(Some(10.0), Some(20.0)));

        let updated = store
            .update(
                created.id,
                JobPatch {
                    title: FieldUpdate::Set("Staff Engineer".to_string()),
                    max_salary: FieldUpdate::Set(None),
                    ..JobPatch::default()
                },
            )
            .expect("job should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Staff Engineer");
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.region, created.region);
        assert_eq!(updated.min_salary, Some(10.0));
        assert_eq!(updated.max_salary, None);
        assert_eq!(store.get(created.id), Some(updated));
    }

    #[test]
    fn empty_update_is_identity() {
        let store = InMemoryJobStore::new();
        let created = store.create(fields("a"));
        assert_eq!(
            store.update(created.id, JobPatch::default()),
            store.get(created.id)
        );
    }

    #[test]
    fn update_unknown_id_returns_none() {
        let store = InMemoryJobStore::new();
        assert!(store.update(1, JobPatch::default()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn delete_then_get_is_absent_and_unknown_delete_is_noop() {
        let store = InMemoryJobStore::new();
        let created = store.create(fields("a"));
        store.create(fields("b"));

        assert!(store.delete(created.id));
        assert!(store.get(created.id).is_none());
        assert!(!store.delete(created.id));
        assert!(!store.delete(42));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn list_all_is_insertion_ordered_snapshot() {
        let store = InMemoryJobStore::new();
        for title in ["a", "b", "c"] {
            store.create(fields(title));
        }
        store.delete(2);

        let snapshot = store.list_all();
        let ids: Vec<JobId> = snapshot.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 3]);

        store.create(fields("d"));
        store.update(1, JobPatch {
            title: FieldUpdate::Set("changed".to_string()),
            ..JobPatch::default()
        });
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].title, "a");
    }

    #[test]
    fn concurrent_creates_assign_unique_ids() {
        let store = Arc::new(InMemoryJobStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|i| store.create(fields(&format!("t{t}-{i}"))).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<JobId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=400).collect::<Vec<_>>());
        assert_eq!(store.len(), 400);
    }
}
