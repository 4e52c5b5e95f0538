//! # Domain Entities
//!
//! 영속 가능한 도메인 객체들입니다.

pub mod accounts;
