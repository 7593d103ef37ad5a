//! In-memory User Repository
//!
//! Process-local implementation of the UserRepository trait, used as the
//! default backend and by the test suites.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::{Email, User, UserId, UserRepository};
use crate::shared::error::RepositoryError;

#[derive(Default)]
struct Store {
    users: HashMap<UserId, User>,
    /// email -> owning user id; the uniqueness index
    emails: HashMap<String, UserId>,
}

/// In-memory user repository.
///
/// Both maps sit behind one lock so that the uniqueness check and the write
/// in `save` happen atomically.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.store.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<User, RepositoryError> {
        let mut store = self.store.write();
        let email = user.email().as_str();

        if let Some(owner) = store.emails.get(email) {
            if owner != user.id() {
                return Err(RepositoryError::DuplicateEmail(email.to_string()));
            }
        }

        let previous = store.users.insert(*user.id(), user.clone());
        if let Some(previous) = previous {
            if previous.email() != user.email() {
                store.emails.remove(previous.email().as_str());
            }
        }
        store.emails.insert(email.to_string(), *user.id());

        Ok(user.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.store.read().users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let store = self.store.read();
        Ok(store
            .emails
            .get(email.as_str())
            .and_then(|id| store.users.get(id))
            .cloned())
    }

    async fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        let mut store = self.store.write();
        if let Some(user) = store.users.remove(id) {
            store.emails.remove(user.email().as_str());
        }
        Ok(())
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError> {
        Ok(self.store.read().emails.contains_key(email.as_str()))
    }

    async fn find_all_active_users(&self) -> Result<Vec<User>, RepositoryError> {
        let now = Utc::now();
        let mut active: Vec<User> = self
            .store
            .read()
            .users
            .values()
            .filter(|user| user.is_active_at(now))
            .cloned()
            .collect();
        active.sort_by_key(|user| user.created_at());
        Ok(active)
    }

    async fn count_users_created_after(&self, from: DateTime<Utc>) -> Result<u64, RepositoryError> {
        let count = self
            .store
            .read()
            .users
            .values()
            .filter(|user| user.created_at() > from)
            .count();
        Ok(count as u64)
    }
}
