//! 요청 단위 컨텍스트
//!
//! 전역 컨테이너에서 의존성을 찾는 대신, 요청 경계에서 현재 사용자와
//! 요청 범위 데이터베이스 핸들을 명시적으로 만들어 디스패처에 넘깁니다.
//! 컨텍스트는 요청이 끝나면 함께 해제되며, 이때 `DbScope`도 반납됩니다.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest, web};

use crate::core::errors::AppError;
use crate::db::DbScope;
use crate::domain::auth::current_user::CurrentUser;
use crate::startup::AppState;

/// 한 요청의 핸들러 체인이 독점적으로 사용하는 상태
pub struct RequestContext {
    /// 인증 게이트가 결정한 현재 사용자 (이후 읽기 전용)
    pub current_user: CurrentUser,
    /// 요청 범위 데이터베이스 핸들
    pub db: DbScope,
}

impl RequestContext {
    pub fn new(current_user: CurrentUser, db: DbScope) -> Self {
        Self { current_user, db }
    }
}

/// 핸들러 인자로 `RequestContext`를 받을 수 있게 합니다.
///
/// 인증 게이트가 요청 확장에 넣어 둔 `CurrentUser`를 읽고, 애플리케이션 상태의
/// 데이터베이스에서 새 범위를 엽니다. 게이트가 없으면 익명 사용자로 취급합니다.
impl FromRequest for RequestContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            return ready(Err(AppError::InternalError(
                "AppState가 등록되지 않았습니다".to_string(),
            )));
        };

        let current_user = req
            .extensions()
            .get::<CurrentUser>()
            .cloned()
            .unwrap_or_default();

        ready(Ok(RequestContext::new(current_user, state.database.scope())))
    }
}
