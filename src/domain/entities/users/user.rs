//! User Entity Implementation
//!
//! 이메일/비밀번호로 로그인하는 계정 엔티티입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 신규 계정에 부여되는 기본 역할
pub const DEFAULT_ROLE: &str = "user";

/// 사용자 엔티티
///
/// 저장소에 독립적인 표현입니다. 저장소별 문서 형식은 리포지토리 구현이 변환합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// 사용자 이메일 (unique, 소문자로 정규화)
    pub email: String,
    /// 표시 이름
    pub display_name: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, display_name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(&email),
            display_name: display_name.trim().to_string(),
            password_hash,
            roles: vec![DEFAULT_ROLE.to_string()],
            created_at: Utc::now(),
        }
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }
}

/// 이메일 비교는 대소문자를 구분하지 않습니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_default_role_and_normalized_email() {
        let user = User::new(
            "  Park@Example.COM ".to_string(),
            " 박지민 ".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert_eq!(user.email, "park@example.com");
        assert_eq!(user.display_name, "박지민");
        assert_eq!(user.roles, vec!["user".to_string()]);
    }
}
