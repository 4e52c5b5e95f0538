//! # Domain Models
//!
//! 엔티티가 아닌 보조 모델입니다. 현재는 세션 토큰 클레임만 포함합니다.

pub mod token;
