//! 계정 요청 핸들러
//!
//! 잘못된 자격 증명은 이메일과 비밀번호 중 무엇이 틀렸는지 구분하지 않고
//! 같은 `AuthenticationError`로 보고합니다.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::users::{User, normalize_email};
use crate::domain::token::{TokenKind, TokenPair};
use crate::pipeline::context::RequestContext;
use crate::pipeline::request::RequestHandler;
use crate::services::accounts::messages::{GetCurrentUser, LoginUser, RefreshToken, RegisterUser};
use crate::services::auth::{PasswordHasher, TokenService};

const INVALID_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

pub struct RegisterUserHandler {
    hasher: PasswordHasher,
}

impl RegisterUserHandler {
    pub fn new(hasher: PasswordHasher) -> Self {
        Self { hasher }
    }
}

#[async_trait]
impl RequestHandler<RegisterUser> for RegisterUserHandler {
    async fn handle(&self, request: RegisterUser, ctx: &RequestContext) -> AppResult<UserResponse> {
        let users = ctx.db.users();
        let email = normalize_email(&request.email);

        if users.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(email, request.display_name, password_hash);
        users.insert(&user).await?;

        log::info!("신규 사용자 등록: {}", user.id);
        Ok(UserResponse::from(user))
    }
}

pub struct LoginUserHandler {
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl LoginUserHandler {
    pub fn new(hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self { hasher, tokens }
    }
}

#[async_trait]
impl RequestHandler<LoginUser> for LoginUserHandler {
    async fn handle(&self, request: LoginUser, ctx: &RequestContext) -> AppResult<TokenPair> {
        let email = normalize_email(&request.email);

        let user = match ctx.db.users().find_by_email(&email).await? {
            Some(user) if self.hasher.verify(&request.password, &user.password_hash) => user,
            _ => {
                log::warn!("로그인 실패: {}", email);
                return Err(AppError::AuthenticationError(
                    INVALID_CREDENTIALS.to_string(),
                ));
            }
        };

        log::info!("로그인 성공: {}", user.id);
        self.tokens.generate_token_pair(&user)
    }
}

pub struct RefreshTokenHandler {
    tokens: TokenService,
}

impl RefreshTokenHandler {
    pub fn new(tokens: TokenService) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl RequestHandler<RefreshToken> for RefreshTokenHandler {
    async fn handle(&self, request: RefreshToken, ctx: &RequestContext) -> AppResult<TokenPair> {
        let claims = self.tokens.verify(&request.refresh_token, TokenKind::Refresh)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            AppError::AuthenticationError("유효하지 않은 리프레시 토큰입니다".to_string())
        })?;

        // 토큰 발급 이후 삭제된 계정
        let user = ctx.db.users().find_by_id(user_id).await?.ok_or_else(|| {
            AppError::AuthenticationError("유효하지 않은 리프레시 토큰입니다".to_string())
        })?;

        self.tokens.generate_token_pair(&user)
    }
}

pub struct GetCurrentUserHandler;

#[async_trait]
impl RequestHandler<GetCurrentUser> for GetCurrentUserHandler {
    async fn handle(&self, _request: GetCurrentUser, ctx: &RequestContext) -> AppResult<UserResponse> {
        let caller = ctx.current_user.require()?;

        ctx.db
            .users()
            .find_by_id(caller.user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", caller.user_id)))
    }
}
