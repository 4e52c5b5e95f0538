//! SMTP 메일 발송기
//!
//! 확인 메일을 HTML 본문으로 구성해 SMTP 릴레이(기본값 Gmail)로 발송합니다.
//! 인증은 `EMAIL_USER` / `EMAIL_PASSWORD`를 사용합니다.
//!
//! 발송 흐름:
//!
//! ```text
//! connect (TLS | STARTTLS | plain) → EHLO → AUTH → MAIL FROM → RCPT TO → DATA → QUIT
//! ```
//!
//! 연결은 발송마다 새로 맺습니다.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::{MailConfig, SmtpSecurity};
use crate::core::errors::{AppError, AppResult};
use crate::services::notifications::Notifier;

/// 확인 메일 제목
pub const CONFIRMATION_SUBJECT: &str = "Confirm your email address";

/// 발송할 확인 메일
#[derive(Debug, Clone)]
pub struct ConfirmationEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl ConfirmationEmail {
    pub fn new(from: &str, to: &str, confirmation_link: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            html: format!(
                "<p>Please click the following link to confirm your email address:</p><a href=\"{link}\">{link}</a>",
                link = confirmation_link
            ),
        }
    }

    /// RFC 5322 메시지로 변환합니다.
    ///
    /// # Errors
    ///
    /// 발신자 또는 수신자 주소를 해석할 수 없으면 `ExternalServiceError`
    pub fn to_message(&self) -> AppResult<Message> {
        let from = parse_mailbox(&self.from)?;
        let to = parse_mailbox(&self.to)?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(self.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(self.html.clone())
            .map_err(|e| AppError::ExternalServiceError(format!("메일 메시지 구성 실패: {}", e)))
    }
}

fn parse_mailbox(address: &str) -> AppResult<Mailbox> {
    address
        .parse::<Mailbox>()
        .map_err(|e| AppError::ExternalServiceError(format!("잘못된 메일 주소 {}: {}", address, e)))
}

/// SMTP 알림기
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    /// 메일 설정으로 SMTP 전송기를 구성합니다. 이 시점에는 접속하지 않습니다.
    ///
    /// # Errors
    ///
    /// TLS 파라미터를 구성할 수 없으면 `ExternalServiceError`
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let builder = match config.security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| AppError::ExternalServiceError(format!("SMTP TLS 설정 실패: {}", e)))?,
            SmtpSecurity::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| AppError::ExternalServiceError(format!("SMTP STARTTLS 설정 실패: {}", e)))?,
            SmtpSecurity::Plain => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host.as_str()),
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.password.clone()))
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
        })
    }

    pub fn from_address(&self) -> &str {
        &self.from
    }
}

#[async_trait]
impl Notifier for SmtpMailer {
    async fn send_confirmation(&self, email: &str, confirmation_link: &str) -> AppResult<()> {
        let message = ConfirmationEmail::new(&self.from, email, confirmation_link).to_message()?;

        let response = self.transport
            .send(message)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("SMTP 발송 실패: {}", e)))?;

        log::info!("📧 확인 메일 발송 완료: {} ({})", email, response.code());
        Ok(())
    }
}
