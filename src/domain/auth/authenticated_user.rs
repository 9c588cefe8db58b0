use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::AppError;
use crate::domain::auth::current_user::CurrentUser;
use crate::domain::token::TokenClaims;

/// 검증된 액세스 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: Uuid,

    /// 사용자 이메일
    pub email: String,

    /// 사용자 역할 목록
    pub roles: Vec<String>,
}

impl TryFrom<TokenClaims> for AuthenticatedUser {
    type Error = AppError;

    fn try_from(claims: TokenClaims) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            AppError::AuthenticationError("토큰의 사용자 ID 형식이 올바르지 않습니다".to_string())
        })?;

        Ok(Self {
            user_id,
            email: claims.email,
            roles: claims.roles,
        })
    }
}

/// 인증된 사용자만 받는 추출자
///
/// 인증 게이트가 남긴 `CurrentUser`가 익명이면 401로 거부합니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let current_user = req
            .extensions()
            .get::<CurrentUser>()
            .cloned()
            .unwrap_or_default();

        ready(current_user.require().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::TokenKind;

    #[test]
    fn test_from_claims_keeps_identity() {
        let user_id = Uuid::new_v4();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            email: "kim@example.com".to_string(),
            roles: vec!["user".to_string(), "admin".to_string()],
            token_type: TokenKind::Access,
            iss: "expense-tracker".to_string(),
            iat: 0,
            exp: 0,
        };

        let user = AuthenticatedUser::try_from(claims).unwrap();

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "kim@example.com");
        assert_eq!(user.roles, vec!["user", "admin"]);
    }

    #[actix_web::test]
    async fn test_extractor_rejects_anonymous_request() {
        let req = actix_web::test::TestRequest::default().to_http_request();

        let result = AuthenticatedUser::extract(&req).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_from_claims_rejects_malformed_subject() {
        let claims = TokenClaims {
            sub: "not-a-uuid".to_string(),
            email: "kim@example.com".to_string(),
            roles: vec!["user".to_string()],
            token_type: TokenKind::Access,
            iss: "expense-tracker".to_string(),
            iat: 0,
            exp: 0,
        };

        assert!(AuthenticatedUser::try_from(claims).is_err());
    }
}
