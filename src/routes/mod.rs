//! API 라우트 설정 모듈
//!
//! 컨트롤러를 `/api/<controller>` 스코프로 묶어 등록합니다.
//!
//! | 스코프 | 보호 |
//! |--------|------|
//! | `/api/auth` | 없음 (`/me`는 `AuthenticatedUser` 추출자가 거부) |
//! | `/api/expenses` | `RequireAuth` |
//! | `/health`, `/swagger-ui/`, `/api-docs/openapi.json` | 없음 |

use actix_web::{HttpResponse, get, web};
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::handlers;
use crate::middlewares::RequireAuth;

/// 모든 라우트를 설정합니다
///
/// ```rust,ignore
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_expense_routes(cfg);

    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::refresh)
            .service(handlers::auth::me),
    );
}

fn configure_expense_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/expenses")
            .wrap(RequireAuth::new())
            .service(handlers::expenses::list_expenses)
            .service(handlers::expenses::create_expense)
            .service(handlers::expenses::get_expense)
            .service(handlers::expenses::update_expense)
            .service(handlers::expenses::delete_expense),
    );
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "서비스 정상")),
    tag = "health"
)]
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "expense_tracker_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
