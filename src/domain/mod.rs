//! # Domain Layer Module
//!
//! 계정 도메인의 엔티티, DTO, 토큰 모델을 담는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - Account, AccountDraft
//! ├── dto       - Signup/Login 요청, Profile 응답
//! └── models    - 세션 토큰 클레임
//! ```

pub mod entities;
pub mod dto;
pub mod models;

