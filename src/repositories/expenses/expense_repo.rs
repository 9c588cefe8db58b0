//! # 지출 내역 MongoDB 리포지토리
//!
//! ## 문서 형식
//!
//! - **컬렉션명**: `expenses`
//! - `_id`, `owner_id`: UUID 문자열
//! - `spent_on`: `YYYY-MM-DD` 문자열 (사전순 = 날짜순이므로 범위 조회/정렬에 그대로 사용)
//! - `created_at`, `updated_at`: Unix 밀리초
//! - **인덱스**: `(owner_id, spent_on desc)`

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Expense;
use crate::repositories::expenses::{ExpenseFilter, ExpenseRepository};

const COLLECTION: &str = "expenses";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExpenseDocument {
    #[serde(rename = "_id")]
    id: String,
    owner_id: String,
    description: String,
    amount: f64,
    category: String,
    spent_on: String,
    created_at: i64,
    updated_at: i64,
}

impl From<&Expense> for ExpenseDocument {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            owner_id: expense.owner_id.to_string(),
            description: expense.description.clone(),
            amount: expense.amount,
            category: expense.category.clone(),
            spent_on: expense.spent_on.format(DATE_FORMAT).to_string(),
            created_at: expense.created_at.timestamp_millis(),
            updated_at: expense.updated_at.timestamp_millis(),
        }
    }
}

impl TryFrom<ExpenseDocument> for Expense {
    type Error = AppError;

    fn try_from(document: ExpenseDocument) -> Result<Self, Self::Error> {
        let corrupt = |field: &str| {
            AppError::DatabaseError(format!("expense {} has a malformed {}", document.id, field))
        };

        Ok(Expense {
            id: Uuid::parse_str(&document.id).map_err(|_| corrupt("_id"))?,
            owner_id: Uuid::parse_str(&document.owner_id).map_err(|_| corrupt("owner_id"))?,
            spent_on: NaiveDate::parse_from_str(&document.spent_on, DATE_FORMAT)
                .map_err(|_| corrupt("spent_on"))?,
            created_at: DateTime::<Utc>::from_timestamp_millis(document.created_at)
                .ok_or_else(|| corrupt("created_at"))?,
            updated_at: DateTime::<Utc>::from_timestamp_millis(document.updated_at)
                .ok_or_else(|| corrupt("updated_at"))?,
            description: document.description,
            amount: document.amount,
            category: document.category,
        })
    }
}

/// MongoDB 기반 지출 내역 저장소
pub struct MongoExpenseRepository {
    collection: Collection<ExpenseDocument>,
}

impl MongoExpenseRepository {
    pub fn new(database: &mongodb::Database) -> Self {
        Self {
            collection: database.collection::<ExpenseDocument>(COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let owner_date_index = IndexModel::builder()
            .keys(doc! { "owner_id": 1, "spent_on": -1 })
            .options(
                IndexOptions::builder()
                    .name("owner_spent_on".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(owner_date_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    fn key(owner_id: Uuid, id: Uuid) -> Document {
        doc! { "_id": id.to_string(), "owner_id": owner_id.to_string() }
    }

    fn filter_document(owner_id: Uuid, filter: &ExpenseFilter) -> Document {
        let mut query = doc! { "owner_id": owner_id.to_string() };

        if let Some(category) = &filter.category {
            query.insert("category", category.as_str());
        }

        let mut range = Document::new();
        if let Some(from) = filter.from {
            range.insert("$gte", from.format(DATE_FORMAT).to_string());
        }
        if let Some(to) = filter.to {
            range.insert("$lte", to.format(DATE_FORMAT).to_string());
        }
        if !range.is_empty() {
            query.insert("spent_on", range);
        }

        query
    }
}

#[async_trait]
impl ExpenseRepository for MongoExpenseRepository {
    async fn insert(&self, expense: &Expense) -> AppResult<()> {
        self.collection
            .insert_one(ExpenseDocument::from(expense))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, owner_id: Uuid, id: Uuid) -> AppResult<Option<Expense>> {
        self.collection
            .find_one(Self::key(owner_id, id))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(Expense::try_from)
            .transpose()
    }

    async fn list(&self, owner_id: Uuid, filter: &ExpenseFilter) -> AppResult<Vec<Expense>> {
        let documents: Vec<ExpenseDocument> = self
            .collection
            .find(Self::filter_document(owner_id, filter))
            .sort(doc! { "spent_on": -1, "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        documents.into_iter().map(Expense::try_from).collect()
    }

    async fn update(&self, expense: &Expense) -> AppResult<bool> {
        let result = self
            .collection
            .replace_one(
                Self::key(expense.owner_id, expense.id),
                ExpenseDocument::from(expense),
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(Self::key(owner_id, id))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
