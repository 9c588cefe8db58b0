//! 계정 요청 메시지

use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::domain::dto::users::{LoginRequest, RefreshTokenRequest, RegisterRequest, UserResponse};
use crate::domain::token::TokenPair;
use crate::pipeline::request::Request;

/// 비밀번호는 대문자, 소문자, 숫자를 각각 하나 이상 포함해야 합니다.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_upper && has_lower && has_digit {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength").with_message(Cow::Borrowed(
            "must contain an uppercase letter, a lowercase letter and a digit",
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct RegisterUser {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub display_name: String,
    #[validate(
        length(min = 8, message = "must be at least 8 characters"),
        custom(function = "validate_password_strength")
    )]
    pub password: String,
}

impl Request for RegisterUser {
    type Response = UserResponse;
}

impl From<RegisterRequest> for RegisterUser {
    fn from(body: RegisterRequest) -> Self {
        Self {
            email: body.email.trim().to_string(),
            display_name: body.display_name.trim().to_string(),
            password: body.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct LoginUser {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

impl Request for LoginUser {
    type Response = TokenPair;
}

impl From<LoginRequest> for LoginUser {
    fn from(body: LoginRequest) -> Self {
        Self {
            email: body.email.trim().to_string(),
            password: body.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct RefreshToken {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub refresh_token: String,
}

impl Request for RefreshToken {
    type Response = TokenPair;
}

impl From<RefreshTokenRequest> for RefreshToken {
    fn from(body: RefreshTokenRequest) -> Self {
        Self {
            refresh_token: body.refresh_token.trim().to_string(),
        }
    }
}

/// 호출자 본인의 계정 정보
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GetCurrentUser;

impl Request for GetCurrentUser {
    type Response = UserResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::validation::{DeclarativeRules, FieldError, Validator};

    fn register(email: &str, password: &str) -> RegisterUser {
        RegisterUser {
            email: email.to_string(),
            display_name: "최".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(
            DeclarativeRules
                .validate(&register("choi@example.com", "Secret123"))
                .is_valid()
        );
    }

    #[test]
    fn test_weak_password_and_bad_email() {
        let result = DeclarativeRules.validate(&register("not-an-email", "password"));

        assert_eq!(
            result.errors(),
            &[
                FieldError::new("email", "must be a valid email address"),
                FieldError::new(
                    "password",
                    "must contain an uppercase letter, a lowercase letter and a digit"
                ),
            ]
        );
    }

    #[test]
    fn test_short_password_reports_length() {
        let result = DeclarativeRules.validate(&register("choi@example.com", "Ab1"));

        assert_eq!(
            result.errors(),
            &[FieldError::new("password", "must be at least 8 characters")]
        );
    }

    #[test]
    fn test_login_requires_password() {
        let login = LoginUser {
            email: "choi@example.com".to_string(),
            password: String::new(),
        };

        assert_eq!(
            DeclarativeRules.validate(&login).errors(),
            &[FieldError::new("password", "must not be empty")]
        );
    }
}
