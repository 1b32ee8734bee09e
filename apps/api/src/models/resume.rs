use serde::Serialize;
use sqlx::FromRow;

/// A persisted resume record. Serializes to the `{id, title, template, name}`
/// shape returned by every JSON endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ResumeRow {
    pub id: i32,
    pub title: String,
    pub template: String,
    pub name: Option<String>,
}

/// A validated resume that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResume {
    pub title: String,
    pub template: String,
    pub name: Option<String>,
}
