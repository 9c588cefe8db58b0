//! 지출 내역 기능
//!
//! - [`messages`]: 요청 메시지 (`CreateExpense`, `UpdateExpense`, `DeleteExpense`,
//!   `GetExpense`, `ListExpenses`)
//! - [`validators`]: 금액 정밀도/상한, 지출일 범위, 조회 기간 규칙
//! - [`handlers`]: 메시지별 핸들러

pub mod handlers;
pub mod messages;
pub mod validators;

pub use handlers::*;
pub use messages::*;
pub use validators::{DateRangeRule, MonetaryAmountRule, SpentOnRule};
