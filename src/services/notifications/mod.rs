//! 알림 발송 모듈
//!
//! 계정 서비스는 "주소로 확인 링크를 보낸다"는 기능만 필요로 합니다.
//! 실제 전송 수단은 [`Notifier`] 구현체가 결정합니다.
//!
//! - [`SmtpMailer`] - SMTP 릴레이로 발송 (`EMAIL_USER` / `EMAIL_PASSWORD`)
//! - [`LogNotifier`] - 발송 없이 링크를 로그로 남김 (로컬 개발용)

use async_trait::async_trait;

use crate::core::errors::AppResult;

pub mod smtp_mailer;

pub use smtp_mailer::*;

/// 확인 링크 발송 포트
#[async_trait]
pub trait Notifier: Send + Sync {
    /// `email` 주소로 확인 링크를 발송합니다.
    async fn send_confirmation(&self, email: &str, confirmation_link: &str) -> AppResult<()>;
}

/// 링크를 로그로만 남기는 알림기
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_confirmation(&self, email: &str, confirmation_link: &str) -> AppResult<()> {
        log::info!("📧 [메일 미설정] {} 확인 링크: {}", email, confirmation_link);
        Ok(())
    }
}
