//! 모델 상태 필터
//!
//! JSON 본문, 경로, 쿼리 추출자의 에러 핸들러를 교체하여 바인딩 실패를
//! 컨트롤러와 디스패처가 실행되기 전에 `400 invalid_payload`로 변환합니다.

use actix_web::{HttpRequest, error, web};

use crate::core::errors::AppError;

/// JSON 본문 최대 크기
pub const JSON_LIMIT: usize = 64 * 1024;

fn reject(kind: &str, detail: impl std::fmt::Display, req: &HttpRequest) -> actix_web::Error {
    log::debug!("{} 바인딩 실패 {} {}: {}", kind, req.method(), req.path(), detail);
    AppError::InvalidPayload(detail.to_string()).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err: error::JsonPayloadError, req| reject("JSON", err, req))
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, req| reject("경로", err, req))
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: error::QueryPayloadError, req| reject("쿼리", err, req))
}

/// 앱 또는 스코프에 필터를 등록합니다.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config());
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test};
    use serde::Deserialize;
    use uuid::Uuid;

    #[derive(Deserialize)]
    struct Body {
        #[allow(dead_code)]
        amount: f64,
    }

    async fn create(_body: web::Json<Body>) -> HttpResponse {
        HttpResponse::Created().finish()
    }

    async fn fetch(_id: web::Path<Uuid>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn error_code(req: test::TestRequest) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .configure(configure)
                .route("/items", web::post().to(create))
                .route("/items/{id}", web::get().to(fetch)),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let body: serde_json::Value = test::read_body_json(res).await;

        (status, body["error"].as_str().unwrap_or_default().to_string())
    }

    #[actix_web::test]
    async fn test_malformed_json_is_invalid_payload() {
        let req = test::TestRequest::post()
            .uri("/items")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"amount\": ");

        assert_eq!(
            error_code(req).await,
            (StatusCode::BAD_REQUEST, "invalid_payload".to_string())
        );
    }

    #[actix_web::test]
    async fn test_wrong_type_is_invalid_payload() {
        let req = test::TestRequest::post()
            .uri("/items")
            .set_json(serde_json::json!({ "amount": "ten" }));

        assert_eq!(
            error_code(req).await,
            (StatusCode::BAD_REQUEST, "invalid_payload".to_string())
        );
    }

    #[actix_web::test]
    async fn test_unparsable_path_is_invalid_payload() {
        let req = test::TestRequest::get().uri("/items/42");

        assert_eq!(
            error_code(req).await,
            (StatusCode::BAD_REQUEST, "invalid_payload".to_string())
        );
    }
}
