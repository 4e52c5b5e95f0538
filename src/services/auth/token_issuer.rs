//! 토큰 발급 서비스
//!
//! 두 종류의 토큰을 다룹니다.
//!
//! - **확인 토큰**: OS 난수 20바이트를 16진수로 인코딩한 불투명 문자열 (40자)
//! - **세션 토큰**: 계정 ID를 담은 HS256 JWT, 발급 후 1시간 유효
//!
//! 서명 키는 프로세스 시작 시 한 번 로드되며 이후 읽기 전용입니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use jsonwebtoken::errors::ErrorKind;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::token::SessionClaims;

/// 확인 토큰 및 세션 토큰 발급기
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    session_ttl: Duration,
}

impl TokenIssuer {
    /// 확인 토큰 엔트로피 (바이트)
    pub const CONFIRMATION_TOKEN_BYTES: usize = 20;

    /// 서명 비밀키로 발급기를 생성합니다.
    ///
    /// # Errors
    ///
    /// 비밀키가 비어 있으면 `InternalError`
    pub fn new(secret: &str) -> AppResult<Self> {
        if secret.trim().is_empty() {
            return Err(AppError::InternalError("JWT secret must not be empty".to_string()));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            session_ttl: Duration::seconds(JwtConfig::SESSION_TTL_SECONDS),
        })
    }

    /// `JWT_SECRET` 환경 변수로 발급기를 생성합니다.
    pub fn from_config() -> AppResult<Self> {
        Self::new(&JwtConfig::secret()?)
    }

    /// 새 이메일 확인 토큰을 생성합니다.
    ///
    /// 유일성은 여기서 보장하지 않습니다. 호출자가 저장소 조회로 확인합니다.
    pub fn generate_confirmation_token(&self) -> String {
        let mut bytes = [0u8; Self::CONFIRMATION_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// 계정 ID에 대한 세션 토큰을 발급합니다.
    pub fn issue_session(&self, account_id: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            id: account_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.session_ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("세션 토큰 생성 실패: {}", e)))
    }

    /// 세션 토큰을 검증하고 계정 ID를 반환합니다.
    ///
    /// # Errors
    ///
    /// 서명 불일치, 만료, 형식 오류 등 모든 실패는 `InvalidToken`입니다.
    pub fn verify_session(&self, token: &str) -> AppResult<String> {
        decode::<SessionClaims>(token, &self.decoding_key, &Self::validation())
            .map(|token_data| token_data.claims.id)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::InvalidToken("jwt expired".to_string()),
                ErrorKind::InvalidSignature => {
                    AppError::InvalidToken("invalid signature".to_string())
                }
                _ => AppError::InvalidToken(format!("invalid token: {}", e)),
            })
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }
}
