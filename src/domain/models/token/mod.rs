//! 세션 토큰 모델

pub mod session_claims;

pub use session_claims::*;
