use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use crate::models::resume::{NewResume, ResumeRow};
use crate::store::ResumeStore;

/// In-process `ResumeStore` for handler tests. Ids start at 1 and are never
/// reused, like a SERIAL column.
#[derive(Default)]
pub struct MemoryResumeStore {
    inner: Mutex<Inner>,
    /// When set, every call fails as if the pool were exhausted.
    pub fail: AtomicBool,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, ResumeRow>,
}

impl MemoryResumeStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail.store(true, Ordering::SeqCst);
        store
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn list(&self) -> Result<Vec<ResumeRow>, sqlx::Error> {
        self.check()?;
        Ok(self.inner.lock().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<ResumeRow>, sqlx::Error> {
        self.check()?;
        Ok(self.inner.lock().await.rows.get(&id).cloned())
    }

    async fn create(&self, resume: NewResume) -> Result<ResumeRow, sqlx::Error> {
        self.check()?;
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let row = ResumeRow {
            id: inner.last_id,
            title: resume.title,
            template: resume.template,
            name: resume.name,
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update_name(
        &self,
        id: i32,
        name: Option<String>,
    ) -> Result<Option<ResumeRow>, sqlx::Error> {
        self.check()?;
        let mut inner = self.inner.lock().await;
        Ok(inner.rows.get_mut(&id).map(|row| {
            row.name = name;
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, sqlx::Error> {
        self.check()?;
        Ok(self.inner.lock().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_resume(title: &str) -> NewResume {
        NewResume {
            title: title.to_string(),
            template: "modern".to_string(),
            name: None,
        }
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryResumeStore::default();
        let first = store.create(new_resume("A")).await.unwrap();
        assert!(store.delete(first.id).await.unwrap());

        let second = store.create(new_resume("B")).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn test_update_name_on_missing_id_returns_none() {
        let store = MemoryResumeStore::default();
        store.create(new_resume("A")).await.unwrap();

        assert!(store
            .update_name(42, Some("Jane".to_string()))
            .await
            .unwrap()
            .is_none());
        assert_eq!(store.list().await.unwrap()[0].name, None);
    }

    #[tokio::test]
    async fn test_get_returns_stored_row() {
        let store = MemoryResumeStore::default();
        let created = store.create(new_resume("A")).await.unwrap();

        assert_eq!(store.get(created.id).await.unwrap(), Some(created));
        assert_eq!(store.get(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failing_store_errors_on_every_call() {
        let store = MemoryResumeStore::failing();
        assert!(store.list().await.is_err());
        assert!(store.create(new_resume("A")).await.is_err());
        assert!(store.delete(1).await.is_err());
    }
}
