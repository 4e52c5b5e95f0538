//! # Core Module
//!
//! 계층 전체가 공유하는 기반 타입입니다.
//!
//! - [`errors`] - `AppError`와 HTTP 응답 매핑
//! - [`context`] - 시작 시점에 구성되는 `AppContext`

pub mod errors;
pub mod context;

pub use errors::*;
pub use context::*;
