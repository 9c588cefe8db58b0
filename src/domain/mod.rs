//! # Domain Layer Module
//!
//! 엔티티, 전송 객체, 인증/토큰 모델을 정의하는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 엔티티 (Expense, User)
//! ├── dto       - HTTP 요청/응답 본문
//! ├── auth      - 현재 사용자, 인증된 사용자, 역할 요구사항
//! └── token     - JWT 클레임과 토큰 쌍
//!      │
//!      ▼
//! Application Layer (services: 요청 메시지, 핸들러, 검증기)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```

pub mod auth;
pub mod dto;
pub mod entities;
pub mod token;

pub use dto::*;
pub use entities::*;
