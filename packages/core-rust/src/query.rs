//! Filter → sort → paginate pipeline over a snapshot of job records.
//!
//! The pipeline is stateless: [`run_query`] takes an owned snapshot and a
//! [`ListQuery`] and produces a [`PageResult`]. It never mutates the store.
//!
//! Ordering policy:
//! - Sorting is a stable ascending sort on the selected field. For
//!   [`SortOrder::Desc`] the ascending result is reversed as a whole, so jobs
//!   with equal keys appear in reverse snapshot order.
//! - Text fields compare lexicographically (byte order of UTF-8).
//! - Salary fields compare numerically; an unset salary sorts below every set
//!   salary. `OrderedFloat` gives NaN a fixed place above all other values.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::Job;

/// Default page size when the caller does not supply one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Upper bound on page size enforced by the transport layer.
pub const MAX_PER_PAGE: u32 = 100;

/// Field a job list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Title,
    Region,
    MinSalary,
    MaxSalary,
}

impl SortField {
    /// Extracts the typed sort key for this field from `job`.
    fn key(self, job: &Job) -> SortKey<'_> {
        match self {
            Self::Title => SortKey::Text(&job.title),
            Self::Region => SortKey::Text(&job.region),
            Self::MinSalary => SortKey::Number(job.min_salary.map(OrderedFloat)),
            Self::MaxSalary => SortKey::Number(job.max_salary.map(OrderedFloat)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Comparable projection of a job for one [`SortField`].
///
/// Only keys from the same field are ever compared, so the cross-variant
/// ordering derived here is never observed.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<'a> {
    Text(&'a str),
    /// `None` orders before every `Some`.
    Number(Option<OrderedFloat<f64>>),
}

/// Parameters for listing jobs. Assumed validated by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    /// Page size, at least 1.
    pub per_page: u32,
    /// Case-insensitive substring matched against title, description and region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortField>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
        }
    }
}

impl ListQuery {
    /// Unfiltered, unsorted query for one page.
    #[must_use]
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.sort_order = order;
        self
    }
}

/// One page of a filtered and sorted job list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// Jobs on this page. Serialized as `jobs`.
    #[serde(rename = "jobs")]
    pub items: Vec<Job>,
    /// Number of jobs matching the filter, across all pages.
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
    /// `ceil(total / per_page)`; 0 when nothing matched.
    pub total_pages: usize,
}

/// Runs the full pipeline over `snapshot`.
#[must_use]
pub fn run_query(snapshot: Vec<Job>, query: &ListQuery) -> PageResult {
    let mut jobs = filter_jobs(snapshot, query.search.as_deref());
    if let Some(field) = query.sort_by {
        sort_jobs(&mut jobs, field, query.sort_order);
    }

    let total = jobs.len();
    let total_pages = total_pages(total, query.per_page);
    let items = page_slice(jobs, query.page, query.per_page);

    trace!(
        total,
        total_pages,
        page = query.page,
        per_page = query.per_page,
        returned = items.len(),
        "job query evaluated"
    );

    PageResult {
        items,
        total,
        page: query.page,
        per_page: query.per_page,
        total_pages,
    }
}

/// Keeps jobs whose title, description or region contains `search`,
/// ignoring case. `None` and the empty string keep everything.
#[must_use]
pub fn filter_jobs(jobs: Vec<Job>, search: Option<&str>) -> Vec<Job> {
    let Some(needle) = search.filter(|s| !s.is_empty()) else {
        return jobs;
    };
    let needle = needle.to_lowercase();
    jobs.into_iter()
        .filter(|job| matches_search(job, &needle))
        .collect()
}

/// `needle` must already be lowercase.
fn matches_search(job: &Job, needle: &str) -> bool {
    [&job.title, &job.description, &job.region]
        .into_iter()
        .any(|text| text.to_lowercase().contains(needle))
}

/// Stable-sorts ascending by `field`, then reverses the whole sequence for
/// [`SortOrder::Desc`].
pub fn sort_jobs(jobs: &mut [Job], field: SortField, order: SortOrder) {
    jobs.sort_by(|a, b| field.key(a).cmp(&field.key(b)));
    if order == SortOrder::Desc {
        jobs.reverse();
    }
}

/// `ceil(total / per_page)`, or 0 when `total` or `per_page` is 0.
#[must_use]
pub fn total_pages(total: usize, per_page: u32) -> usize {
    let per_page = usize::try_from(per_page).unwrap_or(usize::MAX);
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Returns the jobs at `[(page-1)*per_page, page*per_page)`, clamped to the
/// sequence. Page 0 and page size 0 yield an empty page.
#[must_use]
pub fn page_slice(jobs: Vec<Job>, page: u32, per_page: u32) -> Vec<Job> {
    if page == 0 || per_page == 0 {
        return Vec::new();
    }
    let per_page = usize::try_from(per_page).unwrap_or(usize::MAX);
    let page_index = usize::try_from(page - 1).unwrap_or(usize::MAX);
    let start = page_index.saturating_mul(per_page);
    if start >= jobs.len() {
        return Vec::new();
    }

    jobs.into_iter().skip(start).take(per_page).collect()
}
