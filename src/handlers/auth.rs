//! 인증 컨트롤러

use actix_web::{HttpResponse, get, post, web};

use crate::core::errors::AppError;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::users::{LoginRequest, RefreshTokenRequest, RegisterRequest};
use crate::pipeline::context::RequestContext;
use crate::services::accounts::{GetCurrentUser, LoginUser, RefreshToken, RegisterUser};
use crate::startup::AppState;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "가입 완료", body = crate::domain::dto::users::UserResponse),
        (status = 400, description = "검증 실패", body = crate::doc::ErrorResponse),
        (status = 409, description = "이미 사용 중인 이메일", body = crate::doc::ErrorResponse)
    ),
    tag = "auth"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    ctx: RequestContext,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .dispatcher
        .send(RegisterUser::from(payload.into_inner()), &ctx)
        .await?;

    Ok(HttpResponse::Created().json(user))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "토큰 발급", body = crate::domain::token::TokenPair),
        (status = 400, description = "검증 실패", body = crate::doc::ErrorResponse),
        (status = 401, description = "잘못된 자격 증명", body = crate::doc::ErrorResponse)
    ),
    tag = "auth"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    ctx: RequestContext,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let tokens = state
        .dispatcher
        .send(LoginUser::from(payload.into_inner()), &ctx)
        .await?;

    Ok(HttpResponse::Ok().json(tokens))
}

#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "새 토큰 쌍", body = crate::domain::token::TokenPair),
        (status = 401, description = "유효하지 않거나 만료된 리프레시 토큰", body = crate::doc::ErrorResponse)
    ),
    tag = "auth"
)]
#[post("/refresh")]
pub async fn refresh(
    state: web::Data<AppState>,
    ctx: RequestContext,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let tokens = state
        .dispatcher
        .send(RefreshToken::from(payload.into_inner()), &ctx)
        .await?;

    Ok(HttpResponse::Ok().json(tokens))
}

/// 익명 호출자는 `AuthenticatedUser` 추출자가 401로 거부합니다.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "본인 계정 정보", body = crate::domain::dto::users::UserResponse),
        (status = 401, description = "인증 필요", body = crate::doc::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
#[get("/me")]
pub async fn me(
    state: web::Data<AppState>,
    ctx: RequestContext,
    caller: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    log::debug!("본인 정보 조회: {}", caller.user_id);

    let user = state.dispatcher.send(GetCurrentUser, &ctx).await?;

    Ok(HttpResponse::Ok().json(user))
}
