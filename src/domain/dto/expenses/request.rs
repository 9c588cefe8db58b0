//! 지출 내역 요청 DTO

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::utils::string_utils::deserialize_optional_string;

/// 지출 생성/수정 요청 본문
///
/// 네 필드 모두 필수입니다. 누락되거나 타입이 틀리면 모델 상태 필터가 400으로 거부합니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExpenseRequest {
    #[schema(example = "점심 식사")]
    pub description: String,
    #[schema(example = 12.5)]
    pub amount: f64,
    #[schema(example = "food")]
    pub category: String,
    /// `YYYY-MM-DD`
    #[schema(example = "2024-03-01")]
    pub spent_on: NaiveDate,
}

/// 지출 목록 조회 쿼리
///
/// `?category=food&from=2024-01-01&to=2024-01-31`
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpenseQuery {
    /// 빈 문자열은 필터 없음으로 취급
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}
