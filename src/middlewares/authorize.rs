//! 권한 가드
//!
//! 스코프 단위로 적용되어 인증 게이트가 결정한 `CurrentUser`를 읽고
//! 익명 호출자는 401, 역할이 부족한 호출자는 403으로 거부합니다.

use std::future::{Ready, ready};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::AppError;
use crate::domain::auth::{CurrentUser, RequiredRole};

#[derive(Debug, Clone, Default)]
pub struct RequireAuth {
    required_role: Option<RequiredRole>,
}

impl RequireAuth {
    /// 인증만 요구
    pub fn new() -> Self {
        Self::default()
    }

    /// 특정 역할 요구
    pub fn with_role(role: &str) -> Self {
        Self {
            required_role: Some(RequiredRole::Single(role.to_string())),
        }
    }

    /// 복수 역할 중 하나 요구
    pub fn with_any_role(roles: &[&str]) -> Self {
        Self {
            required_role: Some(RequiredRole::Any(
                roles.iter().map(|r| r.to_string()).collect(),
            )),
        }
    }

    fn check(&self, current_user: &CurrentUser) -> Result<(), AppError> {
        let user = current_user.require()?;

        match &self.required_role {
            Some(required) if !required.is_satisfied(&user.roles) => {
                log::warn!(
                    "권한 부족: 사용자 ID {} ({:?}), 필요 권한: {:?}",
                    user.user_id,
                    user.roles,
                    required
                );
                Err(AppError::AuthorizationError(
                    "접근 권한이 부족합니다".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthService {
            service,
            guard: self.clone(),
        }))
    }
}

pub struct RequireAuthService<S> {
    service: S,
    guard: RequireAuth,
}

impl<S, B> Service<ServiceRequest> for RequireAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let current_user = req
            .extensions()
            .get::<CurrentUser>()
            .cloned()
            .unwrap_or_default();

        if let Err(error) = self.guard.check(&current_user) {
            log::debug!("보호된 경로 거부: {} {}", req.path(), error);
            let (req, _) = req.into_parts();
            let res = ServiceResponse::new(req, error.error_response()).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}
