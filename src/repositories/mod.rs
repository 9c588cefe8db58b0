//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 trait으로 정의되고 두 가지 구현을 가집니다.
//!
//! - **MongoDB**: 운영 저장소 (`DATABASE_BACKEND=mongodb`)
//! - **In-memory**: 로컬 실행과 통합 테스트용 (`DATABASE_BACKEND=memory`)
//!
//! 핸들러는 구현을 알지 못하고 요청 범위 핸들(`DbScope`)을 통해 trait 객체만 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let expenses = ctx.db.expenses();
//! let found = expenses.find_by_id(owner_id, expense_id).await?;
//! ```

pub mod expenses;
pub mod users;

pub use expenses::{ExpenseFilter, ExpenseRepository};
pub use users::UserRepository;
