//! 메모리 기반 지출 내역 저장소
//!
//! 프로세스가 끝나면 사라집니다. 로컬 실행과 HTTP 통합 테스트에 사용합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Expense;
use crate::repositories::expenses::{ExpenseFilter, ExpenseRepository};

#[derive(Default)]
pub struct InMemoryExpenseRepository {
    expenses: RwLock<HashMap<Uuid, Expense>>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::InternalError("expense store lock poisoned".to_string())
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn insert(&self, expense: &Expense) -> AppResult<()> {
        let mut expenses = self.expenses.write().map_err(poisoned)?;
        expenses.insert(expense.id, expense.clone());
        Ok(())
    }

    async fn find_by_id(&self, owner_id: Uuid, id: Uuid) -> AppResult<Option<Expense>> {
        let expenses = self.expenses.read().map_err(poisoned)?;
        Ok(expenses
            .get(&id)
            .filter(|expense| expense.is_owned_by(owner_id))
            .cloned())
    }

    async fn list(&self, owner_id: Uuid, filter: &ExpenseFilter) -> AppResult<Vec<Expense>> {
        let expenses = self.expenses.read().map_err(poisoned)?;

        let mut found: Vec<Expense> = expenses
            .values()
            .filter(|expense| expense.is_owned_by(owner_id) && filter.matches(expense))
            .cloned()
            .collect();

        found.sort_by(|a, b| {
            b.spent_on
                .cmp(&a.spent_on)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        Ok(found)
    }

    async fn update(&self, expense: &Expense) -> AppResult<bool> {
        let mut expenses = self.expenses.write().map_err(poisoned)?;

        match expenses.get_mut(&expense.id) {
            Some(existing) if existing.is_owned_by(expense.owner_id) => {
                *existing = expense.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> AppResult<bool> {
        let mut expenses = self.expenses.write().map_err(poisoned)?;

        let owned = expenses
            .get(&id)
            .is_some_and(|expense| expense.is_owned_by(owner_id));
        if owned {
            expenses.remove(&id);
        }

        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    fn expense(owner: Uuid, category: &str, day: u32) -> Expense {
        Expense::new(
            owner,
            format!("{} {}", category, day),
            10.0,
            category.to_string(),
            NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
        )
    }

    #[actix_web::test]
    async fn test_other_owners_cannot_see_or_touch() {
        let repo = InMemoryExpenseRepository::new();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let mine = expense(owner, "food", 1);
        repo.insert(&mine).await.unwrap();

        assert!(repo.find_by_id(stranger, mine.id).await.unwrap().is_none());
        assert!(!repo.delete(stranger, mine.id).await.unwrap());

        let mut hijacked = mine.clone();
        hijacked.owner_id = stranger;
        assert!(!repo.update(&hijacked).await.unwrap());

        assert_eq!(repo.find_by_id(owner, mine.id).await.unwrap(), Some(mine));
    }

    #[actix_web::test]
    async fn test_list_filters_and_sorts_newest_first() {
        let repo = InMemoryExpenseRepository::new();
        let owner = Uuid::new_v4();
        for (category, day) in [("food", 3), ("travel", 5), ("food", 9), ("food", 1)] {
            repo.insert(&expense(owner, category, day)).await.unwrap();
        }
        repo.insert(&expense(Uuid::new_v4(), "food", 4)).await.unwrap();

        let food = repo
            .list(
                owner,
                &ExpenseFilter {
                    category: Some("food".to_string()),
                    ..ExpenseFilter::default()
                },
            )
            .await
            .unwrap();

        let days: Vec<u32> = food.iter().map(|e| e.spent_on.day()).collect();
        assert_eq!(days, vec![9, 3, 1]);
    }

    #[actix_web::test]
    async fn test_delete_removes_owned_expense() {
        let repo = InMemoryExpenseRepository::new();
        let owner = Uuid::new_v4();
        let item = expense(owner, "food", 2);
        repo.insert(&item).await.unwrap();

        assert!(repo.delete(owner, item.id).await.unwrap());
        assert!(!repo.delete(owner, item.id).await.unwrap());
        assert!(repo.list(owner, &ExpenseFilter::default()).await.unwrap().is_empty());
    }
}
