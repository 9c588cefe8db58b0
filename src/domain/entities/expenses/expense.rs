//! Expense Entity Implementation

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// 지출 내역 엔티티
///
/// 항상 한 명의 소유자(`owner_id`)에 속하며, 다른 사용자는 조회할 수 없습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub description: String,
    /// 금액 (0보다 크고 소수점 둘째 자리까지)
    pub amount: f64,
    pub category: String,
    /// 지출 일자
    pub spent_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        owner_id: Uuid,
        description: String,
        amount: f64,
        category: String,
        spent_on: NaiveDate,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            owner_id,
            description,
            amount,
            category,
            spent_on,
            created_at: now,
            updated_at: now,
        }
    }

    /// 수정 가능한 필드를 모두 교체하고 수정 시각을 갱신합니다.
    pub fn apply_changes(
        &mut self,
        description: String,
        amount: f64,
        category: String,
        spent_on: NaiveDate,
    ) {
        self.description = description;
        self.amount = amount;
        self.category = category;
        self.spent_on = spent_on;
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, owner_id: Uuid) -> bool {
        self.owner_id == owner_id
    }
}
