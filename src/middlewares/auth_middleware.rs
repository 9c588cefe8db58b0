//! JWT 인증 게이트
//!
//! 모든 요청에 대해 한 번 실행되어 `Authorization` 헤더의 액세스 토큰을 검증하고
//! 결과를 [`CurrentUser`]로 request extensions에 저장합니다. 게이트는 요청을
//! 거부하지 않습니다. 거부는 [`RequireAuth`](super::RequireAuth)나
//! [`AuthenticatedUser`](crate::domain::auth::AuthenticatedUser) 추출자가 합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(JwtAuthentication::new(token_service.clone()))
//!     .service(web::scope("/api/expenses").wrap(RequireAuth::new()))
//! ```
//!
//! [`CurrentUser`]: crate::domain::auth::CurrentUser

use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::JwtAuthenticationService;
use crate::services::auth::TokenService;

/// 만료된 토큰으로 요청했을 때 응답에 붙는 헤더
pub const TOKEN_EXPIRED_HEADER: &str = "Token-Expired";

/// JWT 인증 게이트 미들웨어
#[derive(Clone)]
pub struct JwtAuthentication {
    tokens: Arc<TokenService>,
}

impl JwtAuthentication {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuthentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = JwtAuthenticationService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthenticationService {
            service,
            tokens: self.tokens.clone(),
        }))
    }
}
