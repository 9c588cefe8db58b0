//! JWT 토큰 관리 서비스 구현
//!
//! HS256 서명 기반의 액세스/리프레시 토큰 발급과 검증을 담당합니다.
//! 검증은 서명, 발급자, 만료 시간(leeway 0), 토큰 종류를 모두 확인합니다.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::config::JwtSettings;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::User;
use crate::domain::token::{TokenClaims, TokenKind, TokenPair};

/// 토큰 검증 실패 사유
///
/// 인증 게이트는 이 구분으로 `TokenExpired`와 `InvalidToken`을 나눕니다.
#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token: {0}")]
    Invalid(String),
}

impl From<TokenError> for AppError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired => {
                AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
            }
            TokenError::Invalid(_) => {
                AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
            }
        }
    }
}

/// JWT 토큰 관리 서비스
///
/// 설정은 시작 시점에 한 번 주입되며 이후 변경되지 않습니다.
#[derive(Clone)]
pub struct TokenService {
    settings: Arc<JwtSettings>,
}

impl TokenService {
    pub fn new(settings: Arc<JwtSettings>) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &JwtSettings {
        &self.settings
    }

    /// 사용자를 위한 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let lifetime = Duration::minutes(self.settings.expiration_minutes);
        self.sign(&self.claims_for(user, TokenKind::Access, lifetime))
    }

    /// 사용자를 위한 리프레시 토큰 생성
    pub fn generate_refresh_token(&self, user: &User) -> AppResult<String> {
        let lifetime = Duration::days(self.settings.refresh_expiration_days);
        self.sign(&self.claims_for(user, TokenKind::Refresh, lifetime))
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// ```rust,ignore
    /// let token_pair = token_service.generate_token_pair(&user)?;
    /// println!("Expires in: {} seconds", token_pair.expires_in);
    /// ```
    pub fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user)?,
            refresh_token: self.generate_refresh_token(user)?,
            expires_in: self.settings.expiration_seconds(),
            token_type: "Bearer".to_string(),
        })
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// 서명이 틀리면 만료 여부와 관계없이 `Invalid`입니다.
    /// 유효한 토큰이라도 `expected`와 종류가 다르면 `Invalid`입니다.
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<TokenClaims, TokenError> {
        let decoding_key = DecodingKey::from_secret(self.settings.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.settings.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })?;

        if claims.token_type != expected {
            return Err(TokenError::Invalid(format!(
                "expected {:?} token, got {:?}",
                expected, claims.token_type
            )));
        }

        Ok(claims)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// 스킴 비교는 대소문자를 구분하지 않으며, 토큰이 비어 있으면 `None`입니다.
    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        let (scheme, token) = auth_header.trim().split_once(' ')?;
        let token = token.trim();

        if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
            Some(token)
        } else {
            None
        }
    }

    fn claims_for(&self, user: &User, kind: TokenKind, lifetime: Duration) -> TokenClaims {
        let now = Utc::now();

        TokenClaims {
            sub: user.id_string(),
            email: user.email.clone(),
            roles: user.roles.clone(),
            token_type: kind,
            iss: self.settings.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        }
    }

    pub(crate) fn sign(&self, claims: &TokenClaims) -> AppResult<String> {
        let encoding_key = EncodingKey::from_secret(self.settings.secret.as_bytes());

        encode(&Header::new(Algorithm::HS256), claims, &encoding_key).context("JWT 토큰 생성 실패")
    }
}
