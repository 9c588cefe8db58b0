//! 메모리 기반 사용자 저장소

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::User;
use crate::repositories::users::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::InternalError("user store lock poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.values().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new(email.to_string(), "테스터".to_string(), "$2b$04$hash".to_string())
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user("han@example.com")).await.unwrap();

        let result = repo.insert(&user("HAN@example.com")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_find_by_email_and_id() {
        let repo = InMemoryUserRepository::new();
        let stored = user("seo@example.com");
        repo.insert(&stored).await.unwrap();

        assert_eq!(
            repo.find_by_email("seo@example.com").await.unwrap(),
            Some(stored.clone())
        );
        assert_eq!(repo.find_by_id(stored.id).await.unwrap(), Some(stored));
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
