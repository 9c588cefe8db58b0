//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 선택적 문자열 정리와 serde deserializer
//! - [`display_terminal`] - 시작 과정 터미널 출력

pub mod display_terminal;
pub mod string_utils;
