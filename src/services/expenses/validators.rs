//! 지출 내역 교차 필드 검증기

use chrono::{Datelike, NaiveDate};

use crate::pipeline::validation::{ValidationResult, Validator};
use crate::services::expenses::messages::{CreateExpense, ListExpenses, UpdateExpense};

/// 허용되는 최대 금액
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// 저장 가능한 연도 범위. 날짜는 `%Y-%m-%d` 문자열로 저장되어 사전순으로 비교됩니다.
const STORABLE_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

const STORABLE_DATE_MESSAGE: &str = "must be between 0001-01-01 and 9999-12-31";

fn is_storable(date: NaiveDate) -> bool {
    STORABLE_YEARS.contains(&date.year())
}

/// 금액 필드를 가진 요청
pub trait MonetaryAmount {
    fn amount(&self) -> f64;
}

impl MonetaryAmount for CreateExpense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl MonetaryAmount for UpdateExpense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// 금액은 소수점 둘째 자리까지, 최대 10억
///
/// 0 이하 금액은 선언적 규칙이 보고하므로 여기서는 보지 않습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonetaryAmountRule;

impl MonetaryAmountRule {
    /// 센트 단위로 반올림한 값이 원래 값과 같아야 합니다.
    fn has_at_most_two_decimals(amount: f64) -> bool {
        (amount * 100.0).round() / 100.0 == amount
    }
}

impl<R> Validator<R> for MonetaryAmountRule
where
    R: MonetaryAmount + Send + Sync + 'static,
{
    fn validate(&self, request: &R) -> ValidationResult {
        let amount = request.amount();
        let mut result = ValidationResult::valid();

        if !amount.is_finite() {
            result.push("amount", "must be a finite number");
            return result;
        }
        if amount > MAX_AMOUNT {
            result.push("amount", "must not exceed 1000000000");
        }
        if !Self::has_at_most_two_decimals(amount) {
            result.push("amount", "must have at most 2 decimal places");
        }

        result
    }
}

/// 지출일 필드를 가진 요청
pub trait SpentOn {
    fn spent_on(&self) -> NaiveDate;
}

impl SpentOn for CreateExpense {
    fn spent_on(&self) -> NaiveDate {
        self.spent_on
    }
}

impl SpentOn for UpdateExpense {
    fn spent_on(&self) -> NaiveDate {
        self.spent_on
    }
}

/// 지출일은 0001-01-01 ~ 9999-12-31
#[derive(Debug, Clone, Copy, Default)]
pub struct SpentOnRule;

impl<R> Validator<R> for SpentOnRule
where
    R: SpentOn + Send + Sync + 'static,
{
    fn validate(&self, request: &R) -> ValidationResult {
        let mut result = ValidationResult::valid();
        if !is_storable(request.spent_on()) {
            result.push("spent_on", STORABLE_DATE_MESSAGE);
        }
        result
    }
}

/// 목록 조회 기간은 `from` ≤ `to`, 양 끝은 저장 가능한 날짜
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeRule;

impl DateRangeRule {
    fn is_ordered(from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        match (from, to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }
}

impl Validator<ListExpenses> for DateRangeRule {
    fn validate(&self, request: &ListExpenses) -> ValidationResult {
        let mut result = ValidationResult::valid();

        for (field, bound) in [("from", request.from), ("to", request.to)] {
            if bound.is_some_and(|date| !is_storable(date)) {
                result.push(field, STORABLE_DATE_MESSAGE);
            }
        }
        if result.is_valid() && !Self::is_ordered(request.from, request.to) {
            result.push("from", "must not be after `to`");
        }

        result
    }
}
