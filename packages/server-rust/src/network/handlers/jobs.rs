//! `/jobs` endpoint handlers.
//!
//! Handlers validate transport input, call [`JobService`](crate::service::JobService),
//! and translate outcomes into status codes. Extractor rejections are
//! reported as 422 through [`ApiError`].

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use joblist_core::{Job, JobId, JobPatch, ListQuery, NewJob, PageResult, SortField, SortOrder};
use serde::Deserialize;

use super::AppState;
use crate::network::error::ApiError;
use crate::service::ServiceConfig;

/// Raw list parameters as they arrive in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

impl ListParams {
    /// Applies defaults and bounds, producing a query the core can trust.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when `page` is 0 or `per_page` is
    /// outside `1..=max_per_page`.
    pub fn into_query(self, config: &ServiceConfig) -> Result<ListQuery, ApiError> {
        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(ApiError::Validation(
                "page must be greater than 0".to_string(),
            ));
        }

        let per_page = self.per_page.unwrap_or(config.default_per_page);
        if per_page == 0 || per_page > config.max_per_page {
            return Err(ApiError::Validation(format!(
                "per_page must be between 1 and {}",
                config.max_per_page
            )));
        }

        Ok(ListQuery {
            page,
            per_page,
            search: self.search,
            sort_by: self.sort_by,
            sort_order: self.sort_order.unwrap_or_default(),
        })
    }
}

/// `POST /jobs` -- creates a job and returns it with 201.
pub async fn create_job_handler(
    State(state): State<AppState>,
    body: Result<Json<NewJob>, JsonRejection>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let Json(fields) = body?;
    let job = state.jobs.create_job(fields);
    Ok((StatusCode::CREATED, Json(job)))
}

/// `GET /jobs` -- one page of jobs, filtered and sorted.
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<PageResult>, ApiError> {
    let Query(params) = params?;
    let query = params.into_query(&state.service_config)?;
    Ok(Json(state.jobs.list_jobs(&query)))
}

/// `GET /jobs/{id}`
pub async fn get_job_handler(
    State(state): State<AppState>,
    id: Result<Path<JobId>, PathRejection>,
) -> Result<Json<Job>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.jobs.get_job(id)?))
}

/// `PUT /jobs/{id}` -- partial update; omitted fields keep their values.
pub async fn update_job_handler(
    State(state): State<AppState>,
    id: Result<Path<JobId>, PathRejection>,
    body: Result<Json<JobPatch>, JsonRejection>,
) -> Result<Json<Job>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    Ok(Json(state.jobs.update_job(id, patch)?))
}

/// `DELETE /jobs/{id}` -- 204 on success.
pub async fn delete_job_handler(
    State(state): State<AppState>,
    id: Result<Path<JobId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.jobs.delete_job(id)?;
    Ok(StatusCode::NO_CONTENT)
}
