//! 인증 관련 도메인 모델
//!
//! 인증 게이트가 만드는 [`CurrentUser`], 인증된 사용자 추출자 [`AuthenticatedUser`],
//! 스코프 권한 요구사항 [`RequiredRole`]을 제공합니다.

pub mod authenticated_user;
pub mod authentication_request;
pub mod current_user;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_request::RequiredRole;
pub use current_user::{CurrentUser, Unauthenticated};
