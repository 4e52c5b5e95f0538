//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 호출로 변환하는 핸들러입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 계정 생명주기 조율                   ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - AccountStore                  ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 `web::Data<AccountService>`로 주입됩니다.

pub mod accounts;
