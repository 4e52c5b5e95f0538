//! # Application Error Handling System
//!
//! 계정 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?`로 전파된 에러가 그대로 JSON 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | `{message}` |
//! | `ConflictError` | 400 Bad Request | `{message}` |
//! | `UnconfirmedAccount` | 400 Bad Request | `{message}` |
//! | `InvalidCredentials` | 400 Bad Request | `{message}` |
//! | `MissingToken` | 400 Bad Request | `{message}` |
//! | `NotFound` | 404 Not Found | `{message}` |
//! | `Unauthorized` / `InvalidToken` | 401 Unauthorized | `{message, error}` |
//! | `HashingError` / `DatabaseError` / `ExternalServiceError` / `InternalError` | 500 | `{message, error}` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find(store: &dyn AccountStore, email: &str) -> AppResult<Account> {
//!     store.find_by_email(email).await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::ResponseError;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형의 문자열은 클라이언트에게 전달되는 메시지입니다.
/// 4xx 계열은 메시지만, 401/5xx 계열은 고정 메시지와 함께 상세 내용을 `error` 필드로 전달합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 누락 또는 형식 오류 (400)
    #[error("{0}")]
    ValidationError(String),

    /// 유니크 필드 중복 (400)
    ///
    /// 스토어의 duplicate key 거부도 이 변형으로 변환됩니다.
    #[error("{0}")]
    ConflictError(String),

    /// 리소스 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 이메일 인증 전 로그인 시도 (400)
    #[error("{0}")]
    UnconfirmedAccount(String),

    /// 비밀번호 불일치 (400)
    #[error("{0}")]
    InvalidCredentials(String),

    /// 세션 토큰 누락 (400)
    #[error("{0}")]
    MissingToken(String),

    /// 세션 검증 실패 (401)
    #[error("{0}")]
    Unauthorized(String),

    /// 서명 불일치, 만료, 형식 오류 등 토큰 자체의 문제 (401)
    ///
    /// 토큰 발급기가 반환하며, 서비스 계층에서 `Unauthorized`로 승격됩니다.
    #[error("{0}")]
    InvalidToken(String),

    /// 비밀번호 해싱 실패 (500)
    #[error("Hashing error: {0}")]
    HashingError(String),

    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 메일 릴레이 등 외부 서비스 에러 (500)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 서버 측 장애인지 여부
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::ConflictError(_)
            | AppError::UnconfirmedAccount(_)
            | AppError::InvalidCredentials(_)
            | AppError::MissingToken(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) | AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AppError::HashingError(_)
            | AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에도 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let body = match self {
            AppError::Unauthorized(_) | AppError::InvalidToken(_) => serde_json::json!({
                "message": "Unauthorized",
                "error": self.to_string(),
            }),
            _ if status.is_server_error() => {
                log::error!("❌ 요청 처리 실패: {}", self);
                serde_json::json!({
                    "message": "Server error",
                    "error": self.to_string(),
                })
            }
            _ => serde_json::json!({
                "message": self.to_string(),
            }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
