use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resumes::validation::{validate_name_update, validate_new_resume};
use crate::state::AppState;

pub const RESUME_NOT_FOUND: &str = "Resume not found";

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    pub title: Option<String>,
    pub template: Option<String>,
    pub name: Option<String>,
}

/// An absent `name` key is treated the same as an explicit null.
#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Non-numeric or out-of-range ids can never match a record.
pub(crate) fn resume_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound(RESUME_NOT_FOUND.to_string()))
}

/// GET /api/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let resumes = state.store.list().await.map_err(AppError::ListResumes)?;
    Ok(Json(resumes))
}

/// POST /api/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    payload: Result<Json<CreateResumeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let Json(req) = payload?;
    let new_resume = validate_new_resume(req.title, req.template, req.name)?;

    let resume = state.store.create(new_resume).await?;
    info!("Created resume {} via API", resume.id);

    Ok((StatusCode::CREATED, Json(resume)))
}

/// PATCH /api/resumes/:id/update_name
pub async fn handle_update_name(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateNameRequest>, JsonRejection>,
) -> Result<Json<ResumeRow>, AppError> {
    let id = resume_id(path)?;
    let Json(req) = payload?;

    // An unknown id is reported before the new name is inspected.
    if state.store.get(id).await?.is_none() {
        return Err(AppError::NotFound(RESUME_NOT_FOUND.to_string()));
    }
    let name = validate_name_update(req.name)?;

    let resume = state
        .store
        .update_name(id, name)
        .await?
        .ok_or_else(|| AppError::NotFound(RESUME_NOT_FOUND.to_string()))?;
    info!("Updated name of resume {id}");

    Ok(Json(resume))
}
