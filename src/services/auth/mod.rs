//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 해싱과 토큰 발급/검증을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (운영 cost 12 이상)
//! - HMAC-SHA256 세션 토큰 서명, 1시간 만료
//! - OS 난수 기반 이메일 확인 토큰
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{PasswordHasher, TokenIssuer};
//!
//! let hasher = PasswordHasher::from_config();
//! let digest = hasher.hash("Secret123")?;
//!
//! let issuer = TokenIssuer::from_config()?;
//! let session = issuer.issue_session(&account.id_string())?;
//! ```

pub mod password_hasher;
pub mod token_issuer;

pub use password_hasher::*;
pub use token_issuer::*;
