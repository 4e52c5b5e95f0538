//! 계정 서비스 백엔드
//!
//! 이메일 확인을 거치는 회원가입, 로그인, 세션 토큰 기반 프로필 조회를 제공하는
//! actix-web 서비스입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/signup, /api/confirm/{token}, /api/login, /api/profile
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AccountService  │ ← AppContext (hasher, tokens, notifier)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  AccountStore   │ ← MongoDB 또는 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use account_service_backend::core::context::AppContext;
//! use account_service_backend::repositories::accounts::InMemoryAccountStore;
//! use account_service_backend::services::accounts::AccountService;
//! use account_service_backend::services::auth::{PasswordHasher, TokenIssuer};
//! use account_service_backend::services::notifications::LogNotifier;
//!
//! let context = AppContext::new(
//!     Arc::new(InMemoryAccountStore::new()),
//!     PasswordHasher::from_config(),
//!     TokenIssuer::from_config()?,
//!     Arc::new(LogNotifier),
//!     "http://localhost:5000",
//! );
//! let service = AccountService::new(context);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
