//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 데이터 구조를 정의합니다. 컨트롤러는 DTO를 받아
//! 파이프라인 요청 메시지로 변환한 뒤 디스패처에 넘깁니다.
//!
//! DTO 자체에는 규칙 검증이 없습니다. 역직렬화 실패는 모델 상태 필터가,
//! 필드 규칙은 요청 메시지에 등록된 검증기가 담당합니다.
//!
//! ```text
//! dto/
//! ├── expenses/
//! │   └── request.rs      # ExpenseRequest, ExpenseQuery
//! └── users/
//!     ├── request/        # RegisterRequest, LoginRequest, RefreshTokenRequest
//!     └── response/       # UserResponse
//! ```

pub mod expenses;
pub mod users;

pub use expenses::*;
pub use users::*;
