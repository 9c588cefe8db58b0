//! 지출 내역 컨트롤러
//!
//! DTO를 요청 메시지로 변환해 디스패처로 보내는 일만 합니다. 소유권 확인과
//! 검증은 파이프라인과 핸들러가 담당합니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use uuid::Uuid;

use crate::core::errors::AppError;
use crate::domain::dto::expenses::{ExpenseQuery, ExpenseRequest};
use crate::pipeline::context::RequestContext;
use crate::services::expenses::{
    CreateExpense, DeleteExpense, GetExpense, ListExpenses, UpdateExpense,
};
use crate::startup::AppState;

#[utoipa::path(
    get,
    path = "/api/expenses",
    params(ExpenseQuery),
    responses(
        (status = 200, description = "호출자의 지출 내역 (최신순)", body = [crate::domain::entities::Expense]),
        (status = 400, description = "잘못된 조회 조건", body = crate::doc::ErrorResponse),
        (status = 401, description = "인증 필요", body = crate::doc::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "expenses"
)]
#[get("")]
pub async fn list_expenses(
    state: web::Data<AppState>,
    ctx: RequestContext,
    query: web::Query<ExpenseQuery>,
) -> Result<HttpResponse, AppError> {
    let expenses = state
        .dispatcher
        .send(ListExpenses::from(query.into_inner()), &ctx)
        .await?;

    Ok(HttpResponse::Ok().json(expenses))
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = ExpenseRequest,
    responses(
        (status = 201, description = "지출 생성", body = crate::domain::entities::Expense),
        (status = 400, description = "검증 실패", body = crate::doc::ErrorResponse),
        (status = 401, description = "인증 필요", body = crate::doc::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "expenses"
)]
#[post("")]
pub async fn create_expense(
    state: web::Data<AppState>,
    ctx: RequestContext,
    payload: web::Json<ExpenseRequest>,
) -> Result<HttpResponse, AppError> {
    let expense = state
        .dispatcher
        .send(CreateExpense::from(payload.into_inner()), &ctx)
        .await?;

    Ok(HttpResponse::Created().json(expense))
}

#[utoipa::path(
    get,
    path = "/api/expenses/{id}",
    params(("id" = Uuid, Path, description = "지출 ID")),
    responses(
        (status = 200, description = "지출 상세", body = crate::domain::entities::Expense),
        (status = 401, description = "인증 필요", body = crate::doc::ErrorResponse),
        (status = 404, description = "없거나 다른 사용자의 지출", body = crate::doc::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "expenses"
)]
#[get("/{id}")]
pub async fn get_expense(
    state: web::Data<AppState>,
    ctx: RequestContext,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let expense = state
        .dispatcher
        .send(GetExpense { id: id.into_inner() }, &ctx)
        .await?;

    Ok(HttpResponse::Ok().json(expense))
}

#[utoipa::path(
    put,
    path = "/api/expenses/{id}",
    params(("id" = Uuid, Path, description = "지출 ID")),
    request_body = ExpenseRequest,
    responses(
        (status = 200, description = "수정된 지출", body = crate::domain::entities::Expense),
        (status = 400, description = "검증 실패", body = crate::doc::ErrorResponse),
        (status = 401, description = "인증 필요", body = crate::doc::ErrorResponse),
        (status = 404, description = "없거나 다른 사용자의 지출", body = crate::doc::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "expenses"
)]
#[put("/{id}")]
pub async fn update_expense(
    state: web::Data<AppState>,
    ctx: RequestContext,
    id: web::Path<Uuid>,
    payload: web::Json<ExpenseRequest>,
) -> Result<HttpResponse, AppError> {
    let request = UpdateExpense::new(id.into_inner(), payload.into_inner());
    let expense = state.dispatcher.send(request, &ctx).await?;

    Ok(HttpResponse::Ok().json(expense))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{id}",
    params(("id" = Uuid, Path, description = "지출 ID")),
    responses(
        (status = 204, description = "삭제됨"),
        (status = 401, description = "인증 필요", body = crate::doc::ErrorResponse),
        (status = 404, description = "없거나 다른 사용자의 지출", body = crate::doc::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "expenses"
)]
#[delete("/{id}")]
pub async fn delete_expense(
    state: web::Data<AppState>,
    ctx: RequestContext,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state
        .dispatcher
        .send(DeleteExpense { id: id.into_inner() }, &ctx)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
