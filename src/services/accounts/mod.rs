//! 계정 기능: 가입, 로그인, 토큰 갱신, 본인 정보 조회

pub mod handlers;
pub mod messages;

pub use handlers::*;
pub use messages::*;
