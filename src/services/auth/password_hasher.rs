//! bcrypt 비밀번호 해시 서비스

use crate::config::PasswordHasherSettings;
use crate::core::errors::{AppResult, ErrorContext};

/// 설정된 작업 비용으로 비밀번호를 해시하고 검증합니다.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(settings: PasswordHasherSettings) -> Self {
        Self {
            cost: settings.cost,
        }
    }

    pub fn hash(&self, plain: &str) -> AppResult<String> {
        bcrypt::hash(plain, self.cost).context("비밀번호 해시 실패")
    }

    /// 해시 형식이 깨져 있으면 불일치로 취급합니다.
    pub fn verify(&self, plain: &str, hash: &str) -> bool {
        match bcrypt::verify(plain, hash) {
            Ok(matched) => matched,
            Err(e) => {
                log::warn!("비밀번호 해시 검증 실패: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(PasswordHasherSettings { cost: 4 })
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let hash = hasher.hash("Secret123").unwrap();

        assert_ne!(hash, "Secret123");
        assert!(hasher.verify("Secret123", &hash));
        assert!(!hasher.verify("secret123", &hash));
    }

    #[test]
    fn test_malformed_hash_does_not_match() {
        assert!(!hasher().verify("Secret123", "not-a-bcrypt-hash"));
    }
}
