//! Input validation shared by the form and JSON create paths, so both entry
//! points accept and reject exactly the same records.

use crate::errors::AppError;
use crate::models::resume::NewResume;

/// Column width of `title`, `template` and `name`.
pub const MAX_FIELD_CHARS: usize = 100;

pub const MISSING_REQUIRED: &str = "Title and template are required";
pub const FIELD_TOO_LONG: &str = "Title, template and name must be at most 100 characters";
pub const NAME_TOO_LONG: &str = "Name must be at most 100 characters";
pub const CONTAINS_NUL: &str = "Title, template and name must not contain NUL characters";
pub const NAME_CONTAINS_NUL: &str = "Name must not contain NUL characters";

/// Builds a `NewResume` from raw input.
///
/// `title` and `template` must be present and non-empty. Whitespace-only values
/// are accepted as-is; only the empty string counts as missing.
pub fn validate_new_resume(
    title: Option<String>,
    template: Option<String>,
    name: Option<String>,
) -> Result<NewResume, AppError> {
    let (title, template) = match (title, template) {
        (Some(title), Some(template)) if !title.is_empty() && !template.is_empty() => {
            (title, template)
        }
        _ => return Err(AppError::Validation(MISSING_REQUIRED.to_string())),
    };

    let fields = [Some(&title), Some(&template), name.as_ref()];
    if fields.iter().flatten().any(|value| exceeds_column(value)) {
        return Err(AppError::Validation(FIELD_TOO_LONG.to_string()));
    }
    // Postgres text columns cannot store NUL.
    if fields.iter().flatten().any(|value| value.contains('\0')) {
        return Err(AppError::Validation(CONTAINS_NUL.to_string()));
    }

    Ok(NewResume {
        title,
        template,
        name,
    })
}

/// Renames are only checked against what the column can store.
pub fn validate_name_update(name: Option<String>) -> Result<Option<String>, AppError> {
    match name {
        Some(name) if exceeds_column(&name) => {
            Err(AppError::Validation(NAME_TOO_LONG.to_string()))
        }
        Some(name) if name.contains('\0') => {
            Err(AppError::Validation(NAME_CONTAINS_NUL.to_string()))
        }
        other => Ok(other),
    }
}

/// HTML forms submit blank inputs as empty strings.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn exceeds_column(value: &str) -> bool {
    value.chars().count() > MAX_FIELD_CHARS
}
