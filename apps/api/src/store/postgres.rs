use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::resume::{NewResume, ResumeRow};
use crate::store::ResumeStore;

/// `ResumeStore` over the `resumes` table. Each call checks a connection out
/// of the pool for the duration of a single statement.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn list(&self) -> Result<Vec<ResumeRow>, sqlx::Error> {
        sqlx::query_as::<_, ResumeRow>(
            "SELECT id, title, template, name FROM resumes ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get(&self, id: i32) -> Result<Option<ResumeRow>, sqlx::Error> {
        sqlx::query_as::<_, ResumeRow>(
            "SELECT id, title, template, name FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create(&self, resume: NewResume) -> Result<ResumeRow, sqlx::Error> {
        sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (title, template, name)
            VALUES ($1, $2, $3)
            RETURNING id, title, template, name
            "#,
        )
        .bind(&resume.title)
        .bind(&resume.template)
        .bind(&resume.name)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_name(
        &self,
        id: i32,
        name: Option<String>,
    ) -> Result<Option<ResumeRow>, sqlx::Error> {
        sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes
            SET name = $2
            WHERE id = $1
            RETURNING id, title, template, name
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
