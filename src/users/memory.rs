use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    repo::{InsertOutcome, UserStore},
    repo_types::User,
};

#[derive(Default)]
struct Tables {
    by_id: HashMap<String, User>,
    id_by_email: HashMap<String, String>,
}

/// Process-local store. Used when no database is configured and in tests.
#[derive(Default)]
pub struct InMemoryUserStore {
    tables: RwLock<Tables>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryUserStore {
    pub async fn len(&self) -> usize {
        self.tables.read().await.by_id.len()
    }

    /// Number of records stored under `email`.
    pub async fn count_email(&self, email: &str) -> usize {
        self.tables
            .read()
            .await
            .by_id
            .values()
            .filter(|u| u.email == email)
            .count()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .id_by_email
            .get(email)
            .and_then(|id| tables.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        Ok(self.tables.read().await.by_id.get(id).cloned())
    }

    async fn insert(&self, user: &User) -> anyhow::Result<InsertOutcome> {
        let mut tables = self.tables.write().await;
        if tables.id_by_email.contains_key(&user.email) {
            return Ok(InsertOutcome::DuplicateEmail);
        }
        if tables.by_id.contains_key(&user.id) {
            anyhow::bail!("id {} already stored", user.id);
        }
        tables.id_by_email.insert(user.email.clone(), user.id.clone());
        tables.by_id.insert(user.id.clone(), user.clone());
        Ok(InsertOutcome::Created)
    }

    async fn delete(&self, id: &str) -> anyhow::Result<()> {
        let mut tables = self.tables.write().await;
        if let Some(user) = tables.by_id.remove(id) {
            tables.id_by_email.remove(&user.email);
        }
        Ok(())
    }
}
