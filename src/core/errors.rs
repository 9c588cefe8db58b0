//! # Application Error Handling System
//!
//! 요청 파이프라인 전체에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 어느 계층에서 발생한 에러든 일관된 JSON 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! ### 1. 클라이언트 에러 (복구 가능)
//! - `ValidationFailed`: 검증 비헤이비어가 수집한 필드 단위 규칙 위반
//! - `InvalidPayload`: 모델 상태 필터가 잡아낸 바인딩/역직렬화 실패
//! - `AuthenticationError` / `AuthorizationError`: 인증·권한 게이트 거부
//! - `NotFound` / `ConflictError`: 핸들러가 보고하는 비즈니스 결과
//!
//! ### 2. 배선(wiring) 결함 (치명적)
//! - `NoHandlerFound`: 요청 타입에 등록된 핸들러가 없음
//! - `MultipleHandlersFound`: 요청 타입에 핸들러가 둘 이상 등록됨
//!
//! ### 3. 인프라 에러
//! - `DatabaseError`, `InternalError`
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | `error` 코드 |
//! |----------|-------------|--------------|
//! | `ValidationFailed` | 400 Bad Request | `validation_failed` |
//! | `InvalidPayload` | 400 Bad Request | `invalid_payload` |
//! | `AuthenticationError` | 401 Unauthorized | `authentication_required` |
//! | `AuthorizationError` | 403 Forbidden | `insufficient_permissions` |
//! | `NotFound` | 404 Not Found | `not_found` |
//! | `ConflictError` | 409 Conflict | `conflict` |
//! | 나머지 | 500 Internal Server Error | `internal_error` |

use actix_web::http::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::pipeline::validation::ValidationResult;

/// 애플리케이션 전역 에러 타입
///
/// 핸들러, 파이프라인 비헤이비어, 미들웨어 모두 이 타입으로 실패를 보고합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 검증 비헤이비어가 집계한 필드 단위 에러 (400 Bad Request)
    ///
    /// 핸들러는 이 에러가 발생한 요청을 절대 관찰하지 않습니다.
    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationResult),

    /// 전송 계층 바인딩 실패 (400 Bad Request)
    ///
    /// 잘못된 JSON, 누락된 필수 필드, 타입 불일치 등 파이프라인에 도달하기 전에
    /// 모델 상태 필터가 거부한 요청입니다.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 요청 타입에 등록된 핸들러가 없음 (500 Internal Server Error)
    #[error("No handler registered for request type {0}")]
    NoHandlerFound(&'static str),

    /// 요청 타입에 핸들러가 둘 이상 등록됨 (500 Internal Server Error)
    #[error("{count} handlers registered for request type {request}, expected exactly one")]
    MultipleHandlersFound { request: &'static str, count: usize },

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 기계 판독용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationFailed(_) => "validation_failed",
            AppError::InvalidPayload(_) => "invalid_payload",
            AppError::NotFound(_) => "not_found",
            AppError::ConflictError(_) => "conflict",
            AppError::AuthenticationError(_) => "authentication_required",
            AppError::AuthorizationError(_) => "insufficient_permissions",
            _ => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationFailed(_) | AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "validation_failed",
    ///   "message": "Validation failed: amount: must be greater than 0",
    ///   "errors": [{ "field": "amount", "message": "must be greater than 0" }]
    /// }
    /// ```
    ///
    /// `errors`는 `ValidationFailed`에만 포함됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        let body = match self {
            AppError::ValidationFailed(result) => json!({
                "error": self.code(),
                "message": self.to_string(),
                "errors": result.errors(),
            }),
            _ => json!({
                "error": self.code(),
                "message": self.to_string(),
            }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let token = encode(&header, &claims, &key).context("JWT 토큰 생성 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::validation::FieldError;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;

    #[test]
    fn test_validation_failed_response() {
        let error = AppError::ValidationFailed(ValidationResult::from(vec![FieldError::new(
            "amount",
            "must be greater than 0",
        )]));
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_payload_response() {
        let error = AppError::InvalidPayload("expected value at line 1".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Expense not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_wiring_defects_are_server_errors() {
        let missing = AppError::NoHandlerFound("GetExpense");
        let duplicated = AppError::MultipleHandlersFound {
            request: "GetExpense",
            count: 2,
        };

        assert_eq!(missing.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(duplicated.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(missing.code(), "internal_error");
    }

    #[actix_web::test]
    async fn test_validation_failed_body_lists_field_errors() {
        let error = AppError::ValidationFailed(ValidationResult::from(vec![FieldError::new(
            "amount",
            "must be greater than 0",
        )]));

        let bytes = to_bytes(error.error_response().into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "validation_failed");
        assert_eq!(body["errors"][0]["field"], "amount");
        assert_eq!(body["errors"][0]["message"], "must be greater than 0");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
