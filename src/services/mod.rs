//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 기능 영역마다 요청 메시지(`messages`), 교차 필드 검증기(`validators`),
//! 핸들러(`handlers`)를 둡니다. 핸들러는 시작 시점에 디스패처에 등록됩니다.
//!
//! - [`accounts`]: 가입, 로그인, 토큰 갱신, 본인 정보
//! - [`expenses`]: 지출 내역 CRUD
//! - [`auth`]: 토큰 서비스와 비밀번호 해시

pub mod accounts;
pub mod auth;
pub mod expenses;
