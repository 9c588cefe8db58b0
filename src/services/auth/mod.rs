//! 인증 및 보안 서비스 모듈
//!
//! JWT 액세스/리프레시 토큰 관리와 bcrypt 비밀번호 해시를 제공합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명, 발급자 검증, 만료 leeway 0
//! - 리프레시 토큰과 액세스 토큰의 용도 분리
//! - 환경별 bcrypt 작업 비용
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{PasswordHasher, TokenService};
//!
//! let tokens = TokenService::new(Arc::new(JwtSettings::from_env()));
//! let pair = tokens.generate_token_pair(&user)?;
//!
//! let hasher = PasswordHasher::new(PasswordHasherSettings::from_env());
//! let hash = hasher.hash("Secret123")?;
//! ```

pub mod password_hasher;
pub mod token_service;

pub use password_hasher::PasswordHasher;
pub use token_service::{TokenError, TokenService};
