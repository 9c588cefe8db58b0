//! 지출 내역 요청 핸들러
//!
//! 모든 핸들러는 인증된 호출자를 요구하고 호출자 소유의 내역만 다룹니다.
//! 다른 사용자의 내역은 `NotFound`로 보고됩니다.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Expense;
use crate::pipeline::context::RequestContext;
use crate::pipeline::request::RequestHandler;
use crate::services::expenses::messages::{
    CreateExpense, DeleteExpense, GetExpense, ListExpenses, UpdateExpense,
};

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Expense {} not found", id))
}

pub struct CreateExpenseHandler;

#[async_trait]
impl RequestHandler<CreateExpense> for CreateExpenseHandler {
    async fn handle(&self, request: CreateExpense, ctx: &RequestContext) -> AppResult<Expense> {
        let owner = ctx.current_user.require()?;

        let expense = Expense::new(
            owner.user_id,
            request.description,
            request.amount,
            request.category,
            request.spent_on,
        );
        ctx.db.expenses().insert(&expense).await?;

        log::info!("지출 생성: {} (소유자 {})", expense.id, owner.user_id);
        Ok(expense)
    }
}

pub struct UpdateExpenseHandler;

#[async_trait]
impl RequestHandler<UpdateExpense> for UpdateExpenseHandler {
    async fn handle(&self, request: UpdateExpense, ctx: &RequestContext) -> AppResult<Expense> {
        let owner = ctx.current_user.require()?;
        let expenses = ctx.db.expenses();

        let mut expense = expenses
            .find_by_id(owner.user_id, request.id)
            .await?
            .ok_or_else(|| not_found(request.id))?;

        expense.apply_changes(
            request.description,
            request.amount,
            request.category,
            request.spent_on,
        );

        if !expenses.update(&expense).await? {
            return Err(not_found(request.id));
        }

        Ok(expense)
    }
}

pub struct DeleteExpenseHandler;

#[async_trait]
impl RequestHandler<DeleteExpense> for DeleteExpenseHandler {
    async fn handle(&self, request: DeleteExpense, ctx: &RequestContext) -> AppResult<()> {
        let owner = ctx.current_user.require()?;

        if !ctx.db.expenses().delete(owner.user_id, request.id).await? {
            return Err(not_found(request.id));
        }

        log::info!("지출 삭제: {} (소유자 {})", request.id, owner.user_id);
        Ok(())
    }
}

pub struct GetExpenseHandler;

#[async_trait]
impl RequestHandler<GetExpense> for GetExpenseHandler {
    async fn handle(&self, request: GetExpense, ctx: &RequestContext) -> AppResult<Expense> {
        let owner = ctx.current_user.require()?;

        ctx.db
            .expenses()
            .find_by_id(owner.user_id, request.id)
            .await?
            .ok_or_else(|| not_found(request.id))
    }
}

pub struct ListExpensesHandler;

#[async_trait]
impl RequestHandler<ListExpenses> for ListExpensesHandler {
    async fn handle(&self, request: ListExpenses, ctx: &RequestContext) -> AppResult<Vec<Expense>> {
        let owner = ctx.current_user.require()?;

        ctx.db.expenses().list(owner.user_id, &request.filter()).await
    }
}
