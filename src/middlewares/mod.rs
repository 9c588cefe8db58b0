//! 미들웨어 모듈
//!
//! 요청 처리 순서 (바깥쪽부터):
//!
//! ```text
//! Cors
//!   → Logger
//!     → NormalizePath (MergeOnly)
//!       → JwtAuthentication (CurrentUser 결정, 거부하지 않음)
//!         → Governor (요청 속도 제한)
//!           → RequireAuth (보호된 스코프만, 401/403)
//!             → 모델 상태 필터 (추출자 설정, 400 invalid_payload)
//!               → 컨트롤러 → Dispatcher
//! ```
//!
//! 추출자는 스코프 미들웨어 안쪽에서 실행되므로, 보호된 경로에 익명으로
//! 잘못된 본문을 보내면 400이 아니라 401을 받습니다.

pub mod auth_middleware;
mod auth_inner;
pub mod authorize;
pub mod model_state;

pub use auth_inner::authenticate;
pub use auth_middleware::{JwtAuthentication, TOKEN_EXPIRED_HEADER};
pub use authorize::RequireAuth;
