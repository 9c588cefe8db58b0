//! 지출 내역 요청 메시지
//!
//! 컨트롤러가 DTO에서 변환하여 디스패처로 보내는 불변 값입니다. 필드 규칙은
//! `#[derive(Validate)]`로 선언하고, 여러 필드를 함께 보는 규칙은
//! [`super::validators`]에 있습니다.

use chrono::NaiveDate;
use uuid::Uuid;
use validator::Validate;

use crate::domain::dto::expenses::{ExpenseQuery, ExpenseRequest};
use crate::domain::entities::Expense;
use crate::pipeline::request::Request;
use crate::repositories::expenses::ExpenseFilter;

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CreateExpense {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub amount: f64,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub category: String,
    pub spent_on: NaiveDate,
}

impl Request for CreateExpense {
    type Response = Expense;
}

impl From<ExpenseRequest> for CreateExpense {
    fn from(body: ExpenseRequest) -> Self {
        Self {
            description: body.description.trim().to_string(),
            amount: body.amount,
            category: body.category.trim().to_string(),
            spent_on: body.spent_on,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct UpdateExpense {
    pub id: Uuid,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub amount: f64,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub category: String,
    pub spent_on: NaiveDate,
}

impl Request for UpdateExpense {
    type Response = Expense;
}

impl UpdateExpense {
    pub fn new(id: Uuid, body: ExpenseRequest) -> Self {
        Self {
            id,
            description: body.description.trim().to_string(),
            amount: body.amount,
            category: body.category.trim().to_string(),
            spent_on: body.spent_on,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteExpense {
    pub id: Uuid,
}

impl Request for DeleteExpense {
    type Response = ();
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetExpense {
    pub id: Uuid,
}

impl Request for GetExpense {
    type Response = Expense;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListExpenses {
    pub category: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl Request for ListExpenses {
    type Response = Vec<Expense>;
}

impl From<ExpenseQuery> for ListExpenses {
    fn from(query: ExpenseQuery) -> Self {
        Self {
            category: query.category,
            from: query.from,
            to: query.to,
        }
    }
}

impl ListExpenses {
    pub fn filter(&self) -> ExpenseFilter {
        ExpenseFilter {
            category: self.category.clone(),
            from: self.from,
            to: self.to,
        }
    }
}
