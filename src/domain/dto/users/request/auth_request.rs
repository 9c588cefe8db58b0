//! 인증 요청 DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 회원 가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "user@example.com")]
    pub email: String,
    #[schema(example = "홍길동")]
    pub display_name: String,
    /// 최소 8자, 대문자/소문자/숫자 포함
    #[schema(example = "Secret123")]
    pub password: String,
}

/// 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "user@example.com")]
    pub email: String,
    pub password: String,
}

/// 토큰 갱신 요청
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}
