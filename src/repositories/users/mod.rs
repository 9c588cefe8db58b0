//! 사용자 리포지토리

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::domain::entities::User;

pub mod memory;
pub mod user_repo;

pub use memory::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    async fn insert(&self, user: &User) -> AppResult<()>;

    /// 정규화된(소문자) 이메일로 조회합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}
