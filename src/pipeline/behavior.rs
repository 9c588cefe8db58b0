//! 파이프라인 비헤이비어
//!
//! 비헤이비어는 핸들러 호출을 감싸는 파이프라인 단계입니다. 시작 시점에 명시적인
//! 순서로 등록되며, 디스패치마다 다음과 같은 호출 체인으로 구성됩니다:
//!
//! ```text
//! send(request)
//!   └─ behaviors[0].handle(envelope, next)
//!        └─ behaviors[1].handle(envelope, next)
//!             └─ ...
//!                  └─ handler.call(envelope)
//! ```
//!
//! 각 비헤이비어는 `next.run(...)`을 호출하여 다음 단계로 넘기거나(pass-through),
//! 호출하지 않고 바로 반환하여 체인을 단락(short-circuit)시킬 수 있습니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::pipeline::context::RequestContext;
use crate::pipeline::request::{Envelope, Erased, ErasedHandler};

/// 모든 요청 타입에 적용되는 파이프라인 단계
#[async_trait]
pub trait Behavior: Send + Sync {
    /// 로그와 시작 요약에 표시되는 이름
    fn name(&self) -> &'static str;

    async fn handle(
        &self,
        envelope: Envelope,
        ctx: &RequestContext,
        next: Next<'_>,
    ) -> AppResult<Erased>;
}

/// 체인에 남은 단계
///
/// 소비(move)되는 값이므로 한 비헤이비어가 다음 단계를 두 번 호출할 수 없습니다.
pub struct Next<'a> {
    behaviors: &'a [Arc<dyn Behavior>],
    handler: &'a dyn ErasedHandler,
}

impl<'a> Next<'a> {
    pub(crate) fn new(behaviors: &'a [Arc<dyn Behavior>], handler: &'a dyn ErasedHandler) -> Self {
        Self { behaviors, handler }
    }

    /// 남은 체인을 실행합니다.
    pub async fn run(self, envelope: Envelope, ctx: &RequestContext) -> AppResult<Erased> {
        match self.behaviors.split_first() {
            Some((current, rest)) => {
                let next = Next {
                    behaviors: rest,
                    handler: self.handler,
                };
                current.handle(envelope, ctx, next).await
            }
            None => self.handler.call(envelope, ctx).await,
        }
    }
}
