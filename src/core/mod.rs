//! # Core Framework Module
//!
//! 요청 파이프라인이 공유하는 핵심 구성 요소를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 타입별 등록 테이블
//! - **TypeRegistry**: `TypeId` 기반으로 핸들러/검증기를 보관
//! - **명시적 등록**: 시작 시점의 Composition Root에서만 채워짐
//! - **읽기 전용 공유**: 시작 이후 잠금 없이 동시 조회
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//! - **자동 변환**: thiserror 기반 에러 체인 관리

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
