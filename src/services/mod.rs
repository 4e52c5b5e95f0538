//! 비즈니스 로직을 담당하는 서비스 계층
//!
//! - [`accounts`] - 계정 생명주기 조율 (`AccountService`)
//! - [`auth`] - 비밀번호 해싱, 확인/세션 토큰 발급
//! - [`notifications`] - 확인 링크 발송
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::accounts::AccountService;
//!
//! let service = AccountService::new(context);
//! let session = service.login(request).await?;
//! ```

pub mod accounts;
pub mod auth;
pub mod notifications;
