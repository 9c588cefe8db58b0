//! # Authentication Configuration Module
//!
//! JWT 서명 설정과 비밀번호 해시 설정을 관리합니다. 두 설정 모두 `main`에서
//! 한 번 읽어 불변 값으로 서비스에 전달합니다.
//!
//! ## 환경 변수
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ISSUER="expense-tracker"
//! export JWT_EXPIRATION_MINUTES="60"        # 최대 10080 (7일)
//! export JWT_REFRESH_EXPIRATION_DAYS="7"     # 최대 365
//! ```
//!
//! ### 비밀번호 해시 설정
//! ```bash
//! export BCRYPT_COST="12"          # 4-15, 생략 시 ENVIRONMENT 기준 기본값
//! export ENVIRONMENT="production"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let jwt = JwtSettings::from_env();
//! let tokens = TokenService::new(Arc::new(jwt));
//! ```

use std::env;

use crate::config::data_config::Environment;

const DEFAULT_SECRET: &str = "your-secret-key";
const DEFAULT_ISSUER: &str = "expense-tracker";
const DEFAULT_EXPIRATION_MINUTES: i64 = 60;
const DEFAULT_REFRESH_EXPIRATION_DAYS: i64 = 7;
/// 액세스 토큰 최대 유효 시간 (7일)
const MAX_EXPIRATION_MINUTES: i64 = 7 * 24 * 60;
/// 리프레시 토큰 최대 유효 시간
const MAX_REFRESH_EXPIRATION_DAYS: i64 = 365;

/// 양의 정수 유효 시간을 읽습니다. 파싱 실패나 0 이하는 기본값, 상한 초과는 상한으로 맞춥니다.
fn lifetime(key: &str, raw: Option<String>, default: i64, max: i64) -> i64 {
    let value = raw
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default);

    if value > max {
        log::warn!("{}={} exceeds the maximum, using {}", key, value, max);
        return max;
    }
    value
}

/// JWT 서명/검증 설정
#[derive(Debug, Clone, PartialEq)]
pub struct JwtSettings {
    /// HS256 서명 키
    pub secret: String,
    /// `iss` 클레임 (검증 시 일치해야 함)
    pub issuer: String,
    /// 액세스 토큰 유효 시간 (분)
    pub expiration_minutes: i64,
    /// 리프레시 토큰 유효 시간 (일)
    pub refresh_expiration_days: i64,
}

impl JwtSettings {
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// 임의의 키-값 소스에서 설정을 읽습니다.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEFAULT_SECRET.to_string()
            });

        let issuer = lookup("JWT_ISSUER")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ISSUER.to_string());

        let expiration_minutes = lifetime(
            "JWT_EXPIRATION_MINUTES",
            lookup("JWT_EXPIRATION_MINUTES"),
            DEFAULT_EXPIRATION_MINUTES,
            MAX_EXPIRATION_MINUTES,
        );

        let refresh_expiration_days = lifetime(
            "JWT_REFRESH_EXPIRATION_DAYS",
            lookup("JWT_REFRESH_EXPIRATION_DAYS"),
            DEFAULT_REFRESH_EXPIRATION_DAYS,
            MAX_REFRESH_EXPIRATION_DAYS,
        );

        Self {
            secret,
            issuer,
            expiration_minutes,
            refresh_expiration_days,
        }
    }

    /// 액세스 토큰 유효 시간 (초)
    pub fn expiration_seconds(&self) -> i64 {
        self.expiration_minutes * 60
    }
}

/// bcrypt 작업 비용 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasherSettings {
    pub cost: u32,
}

impl PasswordHasherSettings {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// `BCRYPT_COST`가 4-15 범위면 그 값을, 아니면 `ENVIRONMENT` 기준 기본값을 씁니다.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(cost) = lookup("BCRYPT_COST").and_then(|v| v.parse::<u32>().ok()) {
            if (Self::MIN_COST..=Self::MAX_COST).contains(&cost) {
                return Self { cost };
            }
            log::warn!("BCRYPT_COST {} 범위 밖, 환경 기본값 사용", cost);
        }

        let environment = lookup("ENVIRONMENT")
            .map(|value| Environment::from_str(&value))
            .unwrap_or(Environment::Production);

        Self {
            cost: Self::bcrypt_cost_for_env(&environment),
        }
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_jwt_settings_defaults() {
        let settings = JwtSettings::from_source(source(&[]));

        assert_eq!(settings.secret, DEFAULT_SECRET);
        assert_eq!(settings.issuer, "expense-tracker");
        assert_eq!(settings.expiration_minutes, 60);
        assert_eq!(settings.refresh_expiration_days, 7);
        assert_eq!(settings.expiration_seconds(), 3600);
    }

    #[test]
    fn test_jwt_settings_from_source() {
        let settings = JwtSettings::from_source(source(&[
            ("JWT_SECRET", "s3cr3t"),
            ("JWT_ISSUER", "ledger"),
            ("JWT_EXPIRATION_MINUTES", "15"),
            ("JWT_REFRESH_EXPIRATION_DAYS", "30"),
        ]));

        assert_eq!(settings.secret, "s3cr3t");
        assert_eq!(settings.issuer, "ledger");
        assert_eq!(settings.expiration_minutes, 15);
        assert_eq!(settings.refresh_expiration_days, 30);
    }

    #[test]
    fn test_jwt_settings_ignore_unparsable_lifetimes() {
        let settings = JwtSettings::from_source(source(&[
            ("JWT_EXPIRATION_MINUTES", "soon"),
            ("JWT_REFRESH_EXPIRATION_DAYS", "-1"),
        ]));

        assert_eq!(settings.expiration_minutes, 60);
        assert_eq!(settings.refresh_expiration_days, 7);
    }

    #[test]
    fn test_jwt_settings_clamp_excessive_lifetimes() {
        let max = i64::MAX.to_string();
        let settings = JwtSettings::from_source(source(&[
            ("JWT_EXPIRATION_MINUTES", max.as_str()),
            ("JWT_REFRESH_EXPIRATION_DAYS", "100000"),
        ]));

        assert_eq!(settings.expiration_minutes, 10_080);
        assert_eq!(settings.refresh_expiration_days, 365);

        let tokens = crate::services::auth::TokenService::new(std::sync::Arc::new(settings));
        let user = crate::domain::entities::User::new(
            "long@example.com".to_string(),
            "장기".to_string(),
            "$2b$04$hash".to_string(),
        );
        assert!(tokens.generate_token_pair(&user).is_ok());
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordHasherSettings::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordHasherSettings::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordHasherSettings::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordHasherSettings::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_bcrypt_cost_override_and_bounds() {
        let explicit = PasswordHasherSettings::from_source(source(&[("BCRYPT_COST", "8")]));
        let too_high = PasswordHasherSettings::from_source(source(&[
            ("BCRYPT_COST", "31"),
            ("ENVIRONMENT", "dev"),
        ]));
        let default = PasswordHasherSettings::from_source(source(&[]));

        assert_eq!(explicit.cost, 8);
        assert_eq!(too_high.cost, 4);
        assert_eq!(default.cost, 12);
    }
}
