//! HTTP 컨트롤러
//!
//! 컨트롤러는 `/api/<controller>` 아래에 묶이며, 요청 본문/경로/쿼리를 메시지로
//! 변환한 뒤 [`Dispatcher`](crate::pipeline::dispatcher::Dispatcher)로 보냅니다.

pub mod auth;
pub mod expenses;
