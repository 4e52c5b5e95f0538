//! Accounts Entity Module
//!
//! 계정 도메인의 핵심 엔티티와 저장 전 검증 스키마를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::accounts::{Account, AccountDraft};
//!
//! let draft = AccountDraft { username, email, password_hash, confirmation_token };
//! draft.validate()?;
//! let account = store.create(draft).await?;
//! ```

pub mod account;

pub use account::*;
