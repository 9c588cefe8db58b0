//! JWT 클레임과 발급 토큰 쌍
//!
//! RFC 7519 표준 클레임에 애플리케이션 클레임(이메일, 역할, 토큰 종류)을 더합니다.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 토큰 용도
///
/// 리프레시 토큰은 액세스 토큰 자리에 쓸 수 없고, 그 반대도 마찬가지입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 UUID)
/// - `email`: 사용자 이메일
/// - `roles`: 사용자 권한 목록
/// - `token_type`: `access` 또는 `refresh`
/// - `iss`: 발급자
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub roles: Vec<String>,
    pub token_type: TokenKind,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// 클라이언트에게 전달되는 토큰 쌍
///
/// OAuth 2.0 토큰 응답 형식을 따릅니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
    /// 항상 `Bearer`
    pub token_type: String,
}
