//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약을 정의합니다. 엔티티를 직접 노출하지 않고
//! 민감한 필드를 제거한 응답 타입으로 변환합니다.

pub mod accounts;

pub use accounts::*;
