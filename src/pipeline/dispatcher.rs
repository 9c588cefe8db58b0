//! # Dispatcher (Mediator)
//!
//! 요청 메시지를 해당 타입에 등록된 단 하나의 핸들러로 라우팅합니다.
//! 핸들러를 호출하기 전에 등록 순서대로 비헤이비어 체인을 통과시킵니다.
//!
//! ## 핸들러 해석 규칙
//!
//! | 등록된 핸들러 수 | 결과 |
//! |------------------|------|
//! | 0 | `AppError::NoHandlerFound` |
//! | 1 | 비헤이비어 체인 → 핸들러 호출 |
//! | 2 이상 | `AppError::MultipleHandlersFound` |
//!
//! 중복 등록은 배선 결함이므로 시작 시점에 [`Dispatcher::verify`]로 먼저 잡아냅니다.

use std::any::TypeId;
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{TypeRegistry, short_type_name};
use crate::pipeline::behavior::{Behavior, Next};
use crate::pipeline::context::RequestContext;
use crate::pipeline::request::{Envelope, ErasedHandler, HandlerAdapter, Request, RequestHandler};

/// 시작 시점에 핸들러와 비헤이비어를 모으는 빌더
#[derive(Default)]
pub struct DispatcherBuilder {
    handlers: TypeRegistry<dyn ErasedHandler>,
    behaviors: Vec<Arc<dyn Behavior>>,
}

impl DispatcherBuilder {
    /// 요청 타입 `R`의 핸들러를 등록합니다.
    pub fn handler<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R>,
    {
        self.handlers
            .register::<R>(Arc::new(HandlerAdapter::<R, H>::new(handler)));
        self
    }

    /// 비헤이비어를 체인 끝에 추가합니다. 먼저 추가한 것이 바깥쪽에서 실행됩니다.
    pub fn behavior<B>(mut self, behavior: B) -> Self
    where
        B: Behavior + 'static,
    {
        self.behaviors.push(Arc::new(behavior));
        self
    }

    pub fn build(self) -> Dispatcher {
        Dispatcher {
            handlers: self.handlers,
            behaviors: self.behaviors,
        }
    }
}

/// 요청 → 핸들러 라우터
///
/// 시작 이후 불변이므로 `Arc`로 감싸 모든 워커가 잠금 없이 공유합니다.
pub struct Dispatcher {
    handlers: TypeRegistry<dyn ErasedHandler>,
    behaviors: Vec<Arc<dyn Behavior>>,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// 요청을 디스패치하고 핸들러의 응답을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NoHandlerFound` / `AppError::MultipleHandlersFound` - 배선 결함
    /// * 비헤이비어가 단락시킨 에러 (예: `AppError::ValidationFailed`)
    /// * 핸들러가 반환한 에러
    pub async fn send<R: Request>(&self, request: R, ctx: &RequestContext) -> AppResult<R::Response> {
        let handler = self.resolve::<R>()?;
        let envelope = Envelope::new(request);
        let type_name = envelope.type_name();

        log::debug!("디스패치: {}", type_name);

        let response = Next::new(&self.behaviors, handler.as_ref())
            .run(envelope, ctx)
            .await?;

        response
            .downcast::<R::Response>()
            .map(|response| *response)
            .map_err(|_| {
                AppError::InternalError(format!(
                    "handler for {} returned an unexpected response type",
                    type_name
                ))
            })
    }

    fn resolve<R: Request>(&self) -> AppResult<&Arc<dyn ErasedHandler>> {
        let type_name = short_type_name(std::any::type_name::<R>());

        match self.handlers.lookup(TypeId::of::<R>()) {
            [] => Err(AppError::NoHandlerFound(type_name)),
            [handler] => Ok(handler),
            handlers => Err(AppError::MultipleHandlersFound {
                request: type_name,
                count: handlers.len(),
            }),
        }
    }

    /// 모든 요청 타입에 핸들러가 정확히 하나씩인지 확인합니다.
    ///
    /// 시작 시점에 호출하여 중복 등록을 런타임 이전에 발견합니다.
    pub fn verify(&self) -> AppResult<()> {
        for registration in self.handlers.registrations() {
            if registration.entries.len() > 1 {
                return Err(AppError::MultipleHandlersFound {
                    request: registration.type_name,
                    count: registration.entries.len(),
                });
            }
        }
        Ok(())
    }

    /// 요청 타입 `R`에 핸들러가 정확히 하나 등록되어 있는지 확인합니다.
    pub fn ensure_handles<R: Request>(&self) -> AppResult<()> {
        self.resolve::<R>().map(|_| ())
    }

    /// 등록된 요청 타입 이름 (정렬됨)
    pub fn request_types(&self) -> Vec<&'static str> {
        self.handlers
            .registrations()
            .iter()
            .map(|registration| registration.type_name)
            .collect()
    }

    /// 실행 순서대로 나열된 비헤이비어 이름
    pub fn behavior_names(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|behavior| behavior.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::domain::auth::current_user::CurrentUser;
    use crate::pipeline::request::Erased;
    use crate::pipeline::validation::{
        FieldError, ValidationBehavior, ValidationResult, Validator, ValidatorRegistry,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ctx() -> RequestContext {
        RequestContext::new(CurrentUser::default(), Database::in_memory().scope())
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Echo {
        text: String,
    }

    impl Request for Echo {
        type Response = Echo;
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Lookup {
        id: u64,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: u64,
        label: String,
    }

    impl Request for Lookup {
        type Response = Record;
    }

    #[derive(Debug)]
    struct Charge {
        amount: i64,
        memo: String,
    }

    impl Request for Charge {
        type Response = ();
    }

    /// 받은 요청을 그대로 돌려주며 호출 횟수를 셉니다.
    #[derive(Clone, Default)]
    struct EchoHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RequestHandler<Echo> for EchoHandler {
        async fn handle(&self, request: Echo, _ctx: &RequestContext) -> AppResult<Echo> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(request)
        }
    }

    struct LookupHandler;

    #[async_trait]
    impl RequestHandler<Lookup> for LookupHandler {
        async fn handle(&self, request: Lookup, _ctx: &RequestContext) -> AppResult<Record> {
            Ok(Record {
                id: request.id,
                label: format!("record-{}", request.id),
            })
        }
    }

    #[derive(Clone, Default)]
    struct ChargeHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RequestHandler<Charge> for ChargeHandler {
        async fn handle(&self, _request: Charge, _ctx: &RequestContext) -> AppResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct PositiveAmount;

    impl Validator<Charge> for PositiveAmount {
        fn validate(&self, request: &Charge) -> ValidationResult {
            let mut result = ValidationResult::valid();
            if request.amount <= 0 {
                result.push("amount", "must be greater than 0");
            }
            result
        }
    }

    struct MemoRequired;

    impl Validator<Charge> for MemoRequired {
        fn validate(&self, request: &Charge) -> ValidationResult {
            let mut result = ValidationResult::valid();
            if request.memo.is_empty() {
                result.push("memo", "must not be empty");
            }
            result
        }
    }

    /// 실행 순서를 기록하는 비헤이비어
    struct Recording {
        label: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl Behavior for Recording {
        fn name(&self) -> &'static str {
            self.label
        }

        async fn handle(
            &self,
            envelope: Envelope,
            ctx: &RequestContext,
            next: Next<'_>,
        ) -> AppResult<Erased> {
            self.log.lock().unwrap().push(self.label);
            next.run(envelope, ctx).await
        }
    }

    /// 다음 단계를 호출하지 않고 바로 반환하는 비헤이비어
    struct Reject;

    #[async_trait]
    impl Behavior for Reject {
        fn name(&self) -> &'static str {
            "reject"
        }

        async fn handle(
            &self,
            _envelope: Envelope,
            _ctx: &RequestContext,
            _next: Next<'_>,
        ) -> AppResult<Erased> {
            Err(AppError::AuthorizationError("rejected".to_string()))
        }
    }

    fn charge_validators() -> Arc<ValidatorRegistry> {
        let mut validators = ValidatorRegistry::new();
        validators
            .register::<Charge, _>(PositiveAmount)
            .register::<Charge, _>(MemoRequired);
        Arc::new(validators)
    }

    #[actix_web::test]
    async fn test_request_without_validators_reaches_handler_unchanged() {
        let handler = EchoHandler::default();
        let dispatcher = Dispatcher::builder()
            .behavior(ValidationBehavior::new(charge_validators()))
            .handler::<Echo, _>(handler.clone())
            .build();

        let request = Echo {
            text: "  untouched  ".to_string(),
        };
        let response = dispatcher.send(request.clone(), &ctx()).await.unwrap();

        assert_eq!(response, request);
        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_invalid_request_never_reaches_handler() {
        let handler = ChargeHandler::default();
        let dispatcher = Dispatcher::builder()
            .behavior(ValidationBehavior::new(charge_validators()))
            .handler::<Charge, _>(handler.clone())
            .build();

        let result = dispatcher
            .send(
                Charge {
                    amount: -5,
                    memo: String::new(),
                },
                &ctx(),
            )
            .await;

        match result {
            Err(AppError::ValidationFailed(errors)) => assert_eq!(
                errors.errors(),
                &[
                    FieldError::new("amount", "must be greater than 0"),
                    FieldError::new("memo", "must not be empty"),
                ]
            ),
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
        assert_eq!(handler.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_single_failing_validator_is_enough_to_reject() {
        let handler = ChargeHandler::default();
        let dispatcher = Dispatcher::builder()
            .behavior(ValidationBehavior::new(charge_validators()))
            .handler::<Charge, _>(handler.clone())
            .build();

        let result = dispatcher
            .send(
                Charge {
                    amount: 10,
                    memo: String::new(),
                },
                &ctx(),
            )
            .await;

        assert!(matches!(result, Err(AppError::ValidationFailed(_))));
        assert_eq!(handler.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_valid_request_reaches_handler() {
        let handler = ChargeHandler::default();
        let dispatcher = Dispatcher::builder()
            .behavior(ValidationBehavior::new(charge_validators()))
            .handler::<Charge, _>(handler.clone())
            .build();

        let request = || Charge {
            amount: 10,
            memo: "coffee".to_string(),
        };

        dispatcher.send(request(), &ctx()).await.unwrap();
        dispatcher.send(request(), &ctx()).await.unwrap();

        assert_eq!(handler.calls.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn test_send_returns_handler_result() {
        let dispatcher = Dispatcher::builder()
            .behavior(ValidationBehavior::new(charge_validators()))
            .handler::<Lookup, _>(LookupHandler)
            .build();

        let record = dispatcher.send(Lookup { id: 42 }, &ctx()).await.unwrap();

        assert_eq!(
            record,
            Record {
                id: 42,
                label: "record-42".to_string()
            }
        );
    }

    #[actix_web::test]
    async fn test_missing_handler_fails() {
        let dispatcher = Dispatcher::builder().handler::<Lookup, _>(LookupHandler).build();

        let result = dispatcher
            .send(
                Echo {
                    text: "hi".to_string(),
                },
                &ctx(),
            )
            .await;

        assert!(matches!(result, Err(AppError::NoHandlerFound("Echo"))));
        assert!(dispatcher.ensure_handles::<Echo>().is_err());
        assert!(dispatcher.ensure_handles::<Lookup>().is_ok());
    }

    #[actix_web::test]
    async fn test_duplicate_handlers_fail_deterministically() {
        let first = EchoHandler::default();
        let second = EchoHandler::default();
        let dispatcher = Dispatcher::builder()
            .handler::<Echo, _>(first.clone())
            .handler::<Echo, _>(second.clone())
            .build();

        for _ in 0..2 {
            let result = dispatcher
                .send(
                    Echo {
                        text: "hi".to_string(),
                    },
                    &ctx(),
                )
                .await;
            assert!(matches!(
                result,
                Err(AppError::MultipleHandlersFound {
                    request: "Echo",
                    count: 2
                })
            ));
        }

        assert!(dispatcher.verify().is_err());
        assert_eq!(first.calls.load(Ordering::SeqCst), 0);
        assert_eq!(second.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_behaviors_run_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = Dispatcher::builder()
            .behavior(Recording {
                label: "outer",
                log: log.clone(),
            })
            .behavior(Recording {
                label: "inner",
                log: log.clone(),
            })
            .handler::<Lookup, _>(LookupHandler)
            .build();

        dispatcher.send(Lookup { id: 1 }, &ctx()).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["outer", "inner"]);
        assert_eq!(dispatcher.behavior_names(), vec!["outer", "inner"]);
    }

    #[actix_web::test]
    async fn test_behavior_can_short_circuit() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let handler = EchoHandler::default();
        let dispatcher = Dispatcher::builder()
            .behavior(Reject)
            .behavior(Recording {
                label: "never",
                log: log.clone(),
            })
            .handler::<Echo, _>(handler.clone())
            .build();

        let result = dispatcher
            .send(
                Echo {
                    text: "hi".to_string(),
                },
                &ctx(),
            )
            .await;

        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(handler.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_verify_accepts_unique_registrations() {
        let dispatcher = Dispatcher::builder()
            .handler::<Echo, _>(EchoHandler::default())
            .handler::<Lookup, _>(LookupHandler)
            .build();

        assert!(dispatcher.verify().is_ok());
        assert_eq!(dispatcher.request_types(), vec!["Echo", "Lookup"]);
    }
}
