//! 지출 내역 리포지토리
//!
//! 모든 조회/수정/삭제는 소유자 ID로 범위가 제한됩니다. 다른 소유자의 내역은
//! 존재하지 않는 것과 구별되지 않습니다.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::domain::entities::Expense;

pub mod expense_repo;
pub mod memory;

pub use expense_repo::MongoExpenseRepository;
pub use memory::InMemoryExpenseRepository;

/// 목록 조회 조건 (모두 선택)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    /// 포함
    pub from: Option<NaiveDate>,
    /// 포함
    pub to: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| expense.category == category)
            && self.from.is_none_or(|from| expense.spent_on >= from)
            && self.to.is_none_or(|to| expense.spent_on <= to)
    }
}

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn insert(&self, expense: &Expense) -> AppResult<()>;

    async fn find_by_id(&self, owner_id: Uuid, id: Uuid) -> AppResult<Option<Expense>>;

    /// 지출 일자 내림차순, 같은 날은 생성 시각 내림차순
    async fn list(&self, owner_id: Uuid, filter: &ExpenseFilter) -> AppResult<Vec<Expense>>;

    /// 소유자와 ID가 일치하는 내역을 교체합니다. 대상이 없으면 `false`.
    async fn update(&self, expense: &Expense) -> AppResult<bool>;

    /// 대상이 없으면 `false`.
    async fn delete(&self, owner_id: Uuid, id: Uuid) -> AppResult<bool>;
}
