//! # Request Pipeline
//!
//! 컨트롤러가 만든 요청 메시지를 핸들러까지 전달하는 중재자(mediator) 파이프라인입니다.
//!
//! ```text
//! Controller
//!   │  dispatcher.send(CreateExpense { .. }, &ctx)
//!   ▼
//! Dispatcher ── 핸들러 해석 (0개/2개 이상이면 실패)
//!   │
//!   ▼
//! ValidationBehavior ── 등록된 검증기 전부 실행, 실패 시 단락
//!   │
//!   ▼
//! RequestHandler<CreateExpense>
//! ```
//!
//! 핸들러, 비헤이비어, 검증기는 모두 시작 시점에 `startup` 모듈에서 명시적으로
//! 등록되며 이후에는 변경되지 않습니다.

pub mod behavior;
pub mod context;
pub mod dispatcher;
pub mod request;
pub mod validation;

pub use behavior::{Behavior, Next};
pub use context::RequestContext;
pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use request::{Envelope, Erased, ErasedHandler, HandlerAdapter, Request, RequestHandler};
pub use validation::{
    DeclarativeRules, FieldError, ValidationBehavior, ValidationResult, Validator,
    ValidatorRegistry,
};
