//! Users Entity Module
//!
//! 로그인 계정을 표현하는 [`user::User`] 엔티티를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     "user@example.com".to_string(),
//!     "Display Name".to_string(),
//!     password_hash,
//! );
//! ```

pub mod user;

pub use user::{DEFAULT_ROLE, User, normalize_email};
