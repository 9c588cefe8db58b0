//! # Domain Entities Module
//!
//! 저장소에 영속되는 핵심 엔티티를 정의합니다. 엔티티는 저장소 형식과 무관하게
//! `Uuid`와 `chrono` 타입으로 표현되며, MongoDB 문서 변환은 리포지토리가 담당합니다.
//!
//! ```text
//! entities/
//! ├── expenses/   ← Expense (소유자 단위로 격리되는 지출 내역)
//! └── users/      ← User (이메일/비밀번호 계정)
//! ```

pub mod expenses;
pub mod users;

pub use expenses::Expense;
pub use users::User;
