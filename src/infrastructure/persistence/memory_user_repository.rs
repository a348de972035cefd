use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct UserStore {
    next_id: i64,
    users: Vec<User>,
}

/// In-memory [`UserRepository`] enforcing unique usernames.
#[derive(Default)]
pub struct MemoryUserRepository {
    store: RwLock<UserStore>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut store = self.store.write().await;

        if store.users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::conflict(
                "Username must be unique",
                json!({ "username": new_user.username }),
            ));
        }

        store.next_id += 1;
        let user = User {
            id: store.next_id,
            username: new_user.username,
            name: new_user.name,
            password_hash: new_user.password_hash,
            blog_ids: Vec::new(),
        };
        store.users.push(user.clone());

        debug!(id = user.id, username = %user.username, "User stored");
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|u| u.username == username).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.store.read().await.users.clone())
    }

    async fn attach_blog(&self, user_id: i64, blog_id: i64) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        let user = store
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": user_id })))?;

        user.blog_ids.push(blog_id);
        Ok(())
    }

    async fn detach_blog(&self, user_id: i64, blog_id: i64) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        let user = store
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": user_id })))?;

        user.blog_ids.retain(|id| *id != blog_id);
        debug!(user_id, blog_id, "Blog detached from user");
        Ok(())
    }
}
