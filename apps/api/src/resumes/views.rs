use axum::{
    extract::{rejection::FormRejection, rejection::PathRejection, Path, State},
    response::{Html, Redirect},
    Form,
};
use minijinja::{context, Environment};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::resumes::handlers::resume_id;
use crate::resumes::validation::{blank_to_none, validate_new_resume};
use crate::state::AppState;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Builds the template environment once at startup. `.html` templates are
/// auto-escaped.
pub fn build_templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", INDEX_TEMPLATE)?;
    Ok(env)
}

#[derive(Debug, Deserialize)]
pub struct ResumeForm {
    pub title: Option<String>,
    pub template: Option<String>,
    pub name: Option<String>,
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let resumes = state.store.list().await?;
    let html = state
        .templates
        .get_template("index.html")?
        .render(context! { resumes => resumes })?;
    Ok(Html(html))
}

/// POST /add_resume
pub async fn handle_add_resume(
    State(state): State<AppState>,
    form: Result<Form<ResumeForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(form) = form?;
    let new_resume = validate_new_resume(form.title, form.template, blank_to_none(form.name))?;

    let resume = state.store.create(new_resume).await?;
    info!("Created resume {} via form", resume.id);

    Ok(Redirect::to("/"))
}

/// GET /delete_resume/:id
///
/// Deleting an id that does not exist is a no-op and still redirects.
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Redirect, AppError> {
    let id = resume_id(path)?;
    if state.store.delete(id).await? {
        info!("Deleted resume {id}");
    } else {
        warn!("Delete requested for unknown resume {id}");
    }
    Ok(Redirect::to("/"))
}
