//! # Configuration Module
//!
//! 환경 변수 기반 설정을 타입이 있는 구조체로 읽어옵니다. 모든 설정은 `main`에서
//! 한 번 로드되어 불변 값으로 전달되며, 각 구조체는 테스트용 `from_source`
//! 생성자를 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, Rate Limiting 설정
//! - [`auth_config`] - JWT 서명, 비밀번호 해시 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, JwtSettings, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let jwt = JwtSettings::from_env();
//! let database = Database::connect(&DatabaseConfig::from_env()).await?;
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
