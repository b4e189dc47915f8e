//! # Class Handlers
//!
//! Search and registration of tutoring classes.
//!
//! Both handlers normalize their input through the typed request schemas in
//! `tutorhub_core` before touching storage, so a rejected request never
//! reaches the database.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use tutorhub_core::models::class::{ClassListing, CreateClassRequest, ListClassesQuery};

use crate::{middleware::error_handling::AppError, ApiState};

/// Lists classes available for a subject at a given weekday and time
///
/// # Endpoint
///
/// ```text
/// GET /classes?subject=Math&week_day=1&time=09:00
/// ```
///
/// A class matches when its subject equals `subject` exactly and at least one
/// of its schedule slots on `week_day` starts at or before `time` and ends
/// after it.
///
/// # Errors
///
/// * `TutorError::Validation("Missing filters")` - a filter is absent or empty
/// * `TutorError::Validation` - `week_day` or `time` is malformed
/// * `TutorError::Storage` - the query failed
#[axum::debug_handler]
pub async fn list_classes(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<ListClassesQuery>, QueryRejection>,
) -> Result<Json<Vec<ClassListing>>, AppError> {
    let Query(query) = query?;
    let filters = query.into_filters()?;

    let classes = state.classes.list_classes(&filters).await?;
    debug!(
        "Found {} classes for subject={}, week_day={}, time={}",
        classes.len(),
        filters.subject,
        filters.week_day,
        filters.time
    );

    Ok(Json(classes.into_iter().map(ClassListing::from).collect()))
}

/// Registers a tutor together with one class offering and its weekly schedule
///
/// # Endpoint
///
/// ```text
/// POST /classes
/// ```
///
/// Responds `201 Created` with an empty body. The user, class and schedule
/// rows are written in one transaction; on failure none of them persist and
/// the cause is returned as `400 {"error": ...}`.
#[axum::debug_handler]
pub async fn create_class(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateClassRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    let registration = payload.into_registration()?;

    state.classes.register_tutor(&registration).await?;

    Ok(StatusCode::CREATED)
}
