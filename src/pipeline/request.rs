//! 요청 메시지와 핸들러 계약
//!
//! 모든 명령(command)과 조회(query)는 [`Request`]를 구현하는 불변 값이며,
//! 응답 타입을 연관 타입으로 선언합니다. 디스패처 내부에서는 비헤이비어 체인이
//! 모든 요청 타입에 공통으로 적용될 수 있도록 [`Envelope`]로 타입을 지워서 전달합니다.

use std::any::{Any, TypeId};
use std::marker::PhantomData;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::short_type_name;
use crate::pipeline::context::RequestContext;

/// 디스패치 가능한 요청 메시지
///
/// ```rust,ignore
/// pub struct GetExpense { pub id: Uuid }
///
/// impl Request for GetExpense {
///     type Response = Expense;
/// }
/// ```
pub trait Request: Send + 'static {
    /// 핸들러가 반환하는 응답 타입
    type Response: Send + 'static;
}

/// 특정 요청 타입을 처리하는 핸들러
///
/// 요청 타입당 정확히 하나만 등록되어야 합니다.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync + 'static {
    async fn handle(&self, request: R, ctx: &RequestContext) -> AppResult<R::Response>;
}

/// 타입이 지워진 응답 값
pub type Erased = Box<dyn Any + Send>;

/// 타입이 지워진 요청 메시지
///
/// 비헤이비어는 `type_id()`로 요청 종류를 식별하고 `message()`로 내용을 읽을 수
/// 있지만 메시지를 바꿀 수는 없습니다. 핸들러는 원래 값을 그대로 받습니다.
pub struct Envelope {
    type_id: TypeId,
    type_name: &'static str,
    message: Box<dyn Any + Send>,
}

impl Envelope {
    pub fn new<R: Request>(request: R) -> Self {
        Self {
            type_id: TypeId::of::<R>(),
            type_name: short_type_name(std::any::type_name::<R>()),
            message: Box::new(request),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn message(&self) -> &(dyn Any + Send) {
        self.message.as_ref()
    }

    /// 원래의 요청 값을 꺼냅니다.
    pub fn into_inner<R: Request>(self) -> AppResult<R> {
        let type_name = self.type_name;
        self.message
            .downcast::<R>()
            .map(|request| *request)
            .map_err(|_| {
                AppError::InternalError(format!(
                    "envelope for {} does not hold a {}",
                    type_name,
                    short_type_name(std::any::type_name::<R>())
                ))
            })
    }
}

/// 핸들러 테이블에 보관되는 타입이 지워진 핸들러
#[async_trait]
pub trait ErasedHandler: Send + Sync {
    async fn call(&self, envelope: Envelope, ctx: &RequestContext) -> AppResult<Erased>;
}

/// 타입이 있는 [`RequestHandler`]를 [`ErasedHandler`]로 감싸는 어댑터
pub struct HandlerAdapter<R, H> {
    handler: H,
    _request: PhantomData<fn(R)>,
}

impl<R, H> HandlerAdapter<R, H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _request: PhantomData,
        }
    }
}

#[async_trait]
impl<R, H> ErasedHandler for HandlerAdapter<R, H>
where
    R: Request,
    H: RequestHandler<R>,
{
    async fn call(&self, envelope: Envelope, ctx: &RequestContext) -> AppResult<Erased> {
        let request = envelope.into_inner::<R>()?;
        let response = self.handler.handle(request, ctx).await?;
        Ok(Box::new(response))
    }
}
