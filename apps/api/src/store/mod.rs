//! Resume persistence behind a trait so handlers never touch a connection
//! directly.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; production wires in
//! `PgResumeStore`, tests use the in-memory store.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::models::resume::{NewResume, ResumeRow};

pub use postgres::PgResumeStore;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Every stored record in insertion order.
    async fn list(&self) -> Result<Vec<ResumeRow>, sqlx::Error>;

    /// The record with that id, if any.
    async fn get(&self, id: i32) -> Result<Option<ResumeRow>, sqlx::Error>;

    /// Persists a new record and returns it with its assigned id.
    async fn create(&self, resume: NewResume) -> Result<ResumeRow, sqlx::Error>;

    /// Overwrites `name` only. `None` when no record has that id.
    async fn update_name(
        &self,
        id: i32,
        name: Option<String>,
    ) -> Result<Option<ResumeRow>, sqlx::Error>;

    /// Removes the record. Returns `false` when nothing matched.
    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error>;
}
