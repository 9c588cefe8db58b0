//! OpenAPI 문서
//!
//! `/api-docs/openapi.json`에서 JSON을, `/swagger-ui/`에서 Swagger UI를 제공합니다.

use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::domain::dto::expenses::ExpenseRequest;
use crate::domain::dto::users::{LoginRequest, RefreshTokenRequest, RegisterRequest, UserResponse};
use crate::domain::entities::Expense;
use crate::domain::token::TokenPair;
use crate::handlers;
use crate::pipeline::validation::FieldError;
use crate::routes;

/// 모든 에러 응답의 본문
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// 기계 판독용 코드 (`validation_failed`, `authentication_required` 등)
    #[schema(example = "validation_failed")]
    pub error: String,
    pub message: String,
    /// `validation_failed`일 때만 포함
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// `bearer_auth` 보안 스킴 (HS256 JWT)
#[derive(Debug)]
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::me,
        handlers::expenses::list_expenses,
        handlers::expenses::create_expense,
        handlers::expenses::get_expense,
        handlers::expenses::update_expense,
        handlers::expenses::delete_expense,
        routes::health_check,
    ),
    components(schemas(
        ExpenseRequest,
        Expense,
        RegisterRequest,
        LoginRequest,
        RefreshTokenRequest,
        UserResponse,
        TokenPair,
        FieldError,
        ErrorResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "가입, 로그인, 토큰 갱신"),
        (name = "expenses", description = "지출 내역 관리"),
        (name = "health", description = "헬스체크"),
    ),
    info(
        title = "Expense Tracker API",
        description = "JWT 인증 기반 개인 지출 내역 관리 API"
    )
)]
pub struct ApiDoc;
