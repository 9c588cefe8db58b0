//! 요청 단위 현재 사용자
//!
//! 인증 게이트가 요청마다 정확히 한 번 결정하며 이후에는 읽기만 합니다.
//!
//! ```text
//! Authorization 헤더 없음      → Unauthenticated(MissingToken)
//! 서명/발급자/형식 오류         → Unauthenticated(InvalidToken)
//! 만료                          → Unauthenticated(TokenExpired)
//! 검증 성공                     → Authenticated(user)
//! ```

use crate::core::errors::{AppError, AppResult};
use crate::domain::auth::authenticated_user::AuthenticatedUser;

/// 익명 상태의 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unauthenticated {
    MissingToken,
    TokenExpired,
    InvalidToken,
}

impl Unauthenticated {
    /// 401 응답에 사용하는 메시지
    pub fn message(&self) -> &'static str {
        match self {
            Unauthenticated::MissingToken => "유효한 인증 토큰이 필요합니다",
            Unauthenticated::TokenExpired => "인증 토큰이 만료되었습니다",
            Unauthenticated::InvalidToken => "유효하지 않은 인증 토큰입니다",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CurrentUser {
    Authenticated(AuthenticatedUser),
    Unauthenticated(Unauthenticated),
}

impl Default for CurrentUser {
    fn default() -> Self {
        CurrentUser::Unauthenticated(Unauthenticated::MissingToken)
    }
}

impl CurrentUser {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, CurrentUser::Authenticated(_))
    }

    pub fn is_token_expired(&self) -> bool {
        matches!(
            self,
            CurrentUser::Unauthenticated(Unauthenticated::TokenExpired)
        )
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            CurrentUser::Authenticated(user) => Some(user),
            CurrentUser::Unauthenticated(_) => None,
        }
    }

    /// 인증된 사용자를 반환하고, 익명이면 `AuthenticationError`로 실패합니다.
    pub fn require(&self) -> AppResult<&AuthenticatedUser> {
        match self {
            CurrentUser::Authenticated(user) => Ok(user),
            CurrentUser::Unauthenticated(reason) => {
                Err(AppError::AuthenticationError(reason.message().to_string()))
            }
        }
    }
}
