//! 애플리케이션 조립
//!
//! 검증기 등록표, 핸들러 등록표, 공유 상태, CORS 정책을 한 곳에서 만듭니다.
//! `main`과 통합 테스트가 같은 조립 코드를 사용합니다.
//!
//! 미들웨어 적용 순서 (바깥쪽부터, `main` 참고):
//!
//! 1. `Cors`
//! 2. `Logger`
//! 3. `NormalizePath::new(TrailingSlash::MergeOnly)`
//! 4. `JwtAuthentication` - 현재 사용자 결정
//! 5. `Governor` - 요청 속도 제한
//! 6. `RequireAuth` - 보호된 스코프만
//! 7. 모델 상태 필터 ([`configure_app`]가 등록한 추출자 설정)

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::web;

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::middlewares::{TOKEN_EXPIRED_HEADER, model_state};
use crate::pipeline::dispatcher::Dispatcher;
use crate::pipeline::validation::{DeclarativeRules, ValidationBehavior, ValidatorRegistry};
use crate::routes::configure_all_routes;
use crate::services::accounts::{
    GetCurrentUser, GetCurrentUserHandler, LoginUser, LoginUserHandler, RefreshToken,
    RefreshTokenHandler, RegisterUser, RegisterUserHandler,
};
use crate::services::auth::{PasswordHasher, TokenService};
use crate::services::expenses::{
    CreateExpense, CreateExpenseHandler, DateRangeRule, DeleteExpense, DeleteExpenseHandler,
    GetExpense, GetExpenseHandler, ListExpenses, ListExpensesHandler, MonetaryAmountRule,
    SpentOnRule, UpdateExpense, UpdateExpenseHandler,
};

/// 모든 워커가 공유하는 애플리케이션 상태
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub database: Database,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>, database: Database) -> Self {
        Self {
            dispatcher,
            database,
        }
    }
}

/// 요청 타입별 검증기 등록표
///
/// `DeleteExpense`, `GetExpense`, `GetCurrentUser`는 검증기가 없습니다.
pub fn build_validators() -> ValidatorRegistry {
    let mut validators = ValidatorRegistry::new();

    validators
        .register::<CreateExpense, _>(DeclarativeRules)
        .register::<CreateExpense, _>(MonetaryAmountRule)
        .register::<CreateExpense, _>(SpentOnRule)
        .register::<UpdateExpense, _>(DeclarativeRules)
        .register::<UpdateExpense, _>(MonetaryAmountRule)
        .register::<UpdateExpense, _>(SpentOnRule)
        .register::<ListExpenses, _>(DateRangeRule)
        .register::<RegisterUser, _>(DeclarativeRules)
        .register::<LoginUser, _>(DeclarativeRules)
        .register::<RefreshToken, _>(DeclarativeRules);

    log::info!(
        "검증기 등록: 요청 타입 {}개, 검증기 {}개",
        validators.type_count(),
        validators.validator_count()
    );

    validators
}

/// 핸들러 등록표와 비헤이비어 체인으로 디스패처를 만듭니다.
///
/// # Errors
///
/// * `AppError::MultipleHandlersFound` - 같은 요청 타입에 핸들러가 둘 이상 등록됨
pub fn build_dispatcher(tokens: TokenService, hasher: PasswordHasher) -> AppResult<Dispatcher> {
    let validators = Arc::new(build_validators());

    let dispatcher = Dispatcher::builder()
        .behavior(ValidationBehavior::new(validators))
        .handler::<CreateExpense, _>(CreateExpenseHandler)
        .handler::<UpdateExpense, _>(UpdateExpenseHandler)
        .handler::<DeleteExpense, _>(DeleteExpenseHandler)
        .handler::<GetExpense, _>(GetExpenseHandler)
        .handler::<ListExpenses, _>(ListExpensesHandler)
        .handler::<RegisterUser, _>(RegisterUserHandler::new(hasher))
        .handler::<LoginUser, _>(LoginUserHandler::new(hasher, tokens.clone()))
        .handler::<RefreshToken, _>(RefreshTokenHandler::new(tokens))
        .handler::<GetCurrentUser, _>(GetCurrentUserHandler)
        .build();

    dispatcher.verify()?;

    log::info!(
        "디스패처 구성: 비헤이비어 {:?}, 요청 타입 {:?}",
        dispatcher.behavior_names(),
        dispatcher.request_types()
    );

    Ok(dispatcher)
}

/// 모든 origin, 메서드, 헤더 허용. `Token-Expired`는 브라우저에 노출됩니다.
pub fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .expose_headers([TOKEN_EXPIRED_HEADER])
        .max_age(3600)
}

/// 공유 상태, 모델 상태 필터, 라우트를 등록합니다.
///
/// ```rust,ignore
/// App::new()
///     .wrap(JwtAuthentication::new(tokens.clone()))
///     .configure(configure_app(state.clone()))
/// ```
pub fn configure_app(state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state);
        model_state::configure(cfg);
        configure_all_routes(cfg);
    }
}
