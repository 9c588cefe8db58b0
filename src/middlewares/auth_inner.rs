//! 인증 게이트의 요청 처리 로직

use std::sync::Arc;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::http::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::domain::auth::{AuthenticatedUser, CurrentUser, Unauthenticated};
use crate::domain::token::TokenKind;
use crate::services::auth::{TokenError, TokenService};

/// 실제 인증 로직을 수행하는 서비스
pub struct JwtAuthenticationService<S> {
    pub(crate) service: S,
    pub(crate) tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthenticationService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let current_user = authenticate(req.headers(), &self.tokens);
        let token_expired = current_user.is_token_expired();

        match &current_user {
            CurrentUser::Authenticated(user) => log::debug!("인증 성공: 사용자 ID {}", user.user_id),
            CurrentUser::Unauthenticated(reason) => log::debug!("익명 요청: {:?}", reason),
        }

        req.extensions_mut().insert(current_user);
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            if token_expired {
                res.headers_mut().insert(
                    HeaderName::from_static("token-expired"),
                    HeaderValue::from_static("true"),
                );
            }
            Ok(res)
        })
    }
}

/// 요청 헤더로부터 현재 사용자를 결정합니다.
///
/// 헤더가 없으면 `MissingToken`, 만료되었으면 `TokenExpired`, 그 밖의 모든
/// 실패(스킴 오류, 서명, 발급자, 토큰 종류, 주체 형식)는 `InvalidToken`입니다.
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> CurrentUser {
    let Some(header) = headers.get(AUTHORIZATION) else {
        return CurrentUser::Unauthenticated(Unauthenticated::MissingToken);
    };

    let Some(token) = header
        .to_str()
        .ok()
        .and_then(TokenService::extract_bearer_token)
    else {
        return CurrentUser::Unauthenticated(Unauthenticated::InvalidToken);
    };

    match tokens.verify(token, TokenKind::Access) {
        Ok(claims) => match AuthenticatedUser::try_from(claims) {
            Ok(user) => CurrentUser::Authenticated(user),
            Err(_) => CurrentUser::Unauthenticated(Unauthenticated::InvalidToken),
        },
        Err(TokenError::Expired) => CurrentUser::Unauthenticated(Unauthenticated::TokenExpired),
        Err(TokenError::Invalid(reason)) => {
            log::debug!("토큰 검증 실패: {}", reason);
            CurrentUser::Unauthenticated(Unauthenticated::InvalidToken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::token_service::tests::{expired_token, settings, test_user};

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_claims_are_carried_into_identity() {
        let tokens = TokenService::new(settings());
        let user = test_user();
        let token = tokens.generate_access_token(&user).unwrap();

        let current = authenticate(&headers(&format!("Bearer {}", token)), &tokens);

        let identity = current.user().unwrap();
        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.email, user.email);
        assert_eq!(identity.roles, user.roles);
    }

    #[test]
    fn test_expired_is_distinct_from_invalid_and_missing() {
        let tokens = TokenService::new(settings());
        let expired = expired_token(&tokens, &test_user());

        assert_eq!(
            authenticate(&headers(&format!("Bearer {}", expired)), &tokens),
            CurrentUser::Unauthenticated(Unauthenticated::TokenExpired)
        );
        assert_eq!(
            authenticate(&headers("Bearer nonsense"), &tokens),
            CurrentUser::Unauthenticated(Unauthenticated::InvalidToken)
        );
        assert_eq!(
            authenticate(&HeaderMap::new(), &tokens),
            CurrentUser::Unauthenticated(Unauthenticated::MissingToken)
        );
    }

    #[test]
    fn test_refresh_token_is_not_accepted() {
        let tokens = TokenService::new(settings());
        let refresh = tokens.generate_refresh_token(&test_user()).unwrap();

        assert_eq!(
            authenticate(&headers(&format!("Bearer {}", refresh)), &tokens),
            CurrentUser::Unauthenticated(Unauthenticated::InvalidToken)
        );
    }
}
