//! 비밀번호 해싱 서비스
//!
//! bcrypt 기반 단방향 해시와 검증을 제공합니다.
//! 솔트는 해시마다 자동 생성되어 다이제스트 문자열에 포함됩니다.

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

/// bcrypt가 허용하는 cost 범위
const BCRYPT_MIN_COST: u32 = 4;
const BCRYPT_MAX_COST: u32 = 31;

/// bcrypt 비밀번호 해셔
///
/// 운영 환경에서는 [`PasswordHasher::from_config`]로 생성하며 cost는 12 이상입니다.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// 지정한 cost로 해셔를 생성합니다.
    ///
    /// # Errors
    ///
    /// bcrypt가 허용하지 않는 cost(4 미만, 31 초과)이면 `HashingError`
    pub fn new(cost: u32) -> AppResult<Self> {
        if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&cost) {
            return Err(AppError::HashingError(format!(
                "bcrypt cost must be between {} and {}, got {}",
                BCRYPT_MIN_COST,
                BCRYPT_MAX_COST,
                cost
            )));
        }

        Ok(Self { cost })
    }

    /// `BCRYPT_COST` 설정으로 해셔를 생성합니다.
    pub fn from_config() -> Self {
        Self {
            cost: PasswordConfig::bcrypt_cost(),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 비밀번호를 해싱합니다.
    ///
    /// # Errors
    ///
    /// * 빈 문자열 입력 시 `HashingError`
    /// * bcrypt 내부 실패 시 `HashingError`
    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        if plaintext.is_empty() {
            return Err(AppError::HashingError("password must not be empty".to_string()));
        }

        let started = std::time::Instant::now();
        let digest = bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AppError::HashingError(e.to_string()))?;

        log::debug!("Password hashing took: {:?} (cost {})", started.elapsed(), self.cost);

        Ok(digest)
    }

    /// 비밀번호와 다이제스트를 비교합니다.
    ///
    /// 불일치는 물론 손상된 다이제스트도 에러 대신 `false`를 반환합니다.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match bcrypt::verify(plaintext, digest) {
            Ok(matched) => matched,
            Err(e) => {
                log::warn!("⚠️ 비밀번호 다이제스트 검증 실패: {}", e);
                false
            }
        }
    }
}
