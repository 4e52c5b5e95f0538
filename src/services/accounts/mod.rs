//! 계정 생명주기 서비스
//!
//! 회원가입, 이메일 확인, 로그인, 프로필 조회를 조율합니다.

pub mod account_service;

pub use account_service::*;
