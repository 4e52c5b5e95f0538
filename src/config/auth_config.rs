//! # Authentication Configuration Module
//!
//! 세션 토큰 서명 키와 확인 메일 발송 자격 증명을 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! ```
//!
//! ## 선택 환경 변수 (메일 발송)
//!
//! ```bash
//! export EMAIL_USER="noreply@gmail.com"
//! export EMAIL_PASSWORD="app-password"
//! export EMAIL_FROM="Account Service <noreply@gmail.com>"  # 기본값: EMAIL_USER
//! export SMTP_HOST="smtp.gmail.com"                         # 기본값
//! export SMTP_SECURITY="tls"                                # tls | starttls | none
//! export SMTP_PORT="465"                                    # 기본값: 보안 방식에 따라 465 / 587 / 25
//! ```
//!
//! `EMAIL_USER`/`EMAIL_PASSWORD`가 없으면 확인 링크는 로그로만 남습니다.

use std::env;

use crate::core::errors::{AppError, AppResult};

/// 세션 토큰(JWT) 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 세션 토큰 유효 시간 (초). 1시간 고정.
    pub const SESSION_TTL_SECONDS: i64 = 3600;

    /// 서명 비밀키를 반환합니다.
    ///
    /// # Errors
    ///
    /// `JWT_SECRET`이 없거나 비어 있으면 `InternalError`를 반환합니다.
    /// 시작 시점에 호출되어 서버 기동을 중단시킵니다.
    pub fn secret() -> AppResult<String> {
        Self::require_secret(env::var("JWT_SECRET").ok())
    }

    /// 비밀키 값이 사용 가능한지 검사합니다.
    pub fn require_secret(value: Option<String>) -> AppResult<String> {
        match value {
            Some(secret) if !secret.trim().is_empty() => Ok(secret),
            _ => Err(AppError::InternalError("JWT_SECRET must be set".to_string())),
        }
    }
}

/// SMTP 연결 보안 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// 접속 즉시 TLS (기본값, Gmail 465)
    Tls,
    /// 평문 접속 후 STARTTLS 업그레이드
    StartTls,
    /// 암호화 없음 (로컬 테스트 릴레이 전용)
    Plain,
}

impl SmtpSecurity {
    /// 문자열에서 보안 방식을 결정합니다. 알 수 없는 값은 `Tls`로 처리합니다.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("starttls") => SmtpSecurity::StartTls,
            Some("none") | Some("plain") => SmtpSecurity::Plain,
            _ => SmtpSecurity::Tls,
        }
    }

    /// 보안 방식별 기본 포트
    pub fn default_port(self) -> u16 {
        match self {
            SmtpSecurity::Tls => 465,
            SmtpSecurity::StartTls => 587,
            SmtpSecurity::Plain => 25,
        }
    }
}

/// 확인 메일 발송 설정
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP 서버 호스트
    pub host: String,
    /// SMTP 서버 포트
    pub port: u16,
    /// 연결 보안 방식
    pub security: SmtpSecurity,
    /// SMTP 인증 계정
    pub user: String,
    /// SMTP 인증 비밀번호 또는 앱 비밀번호
    pub password: String,
    /// From 헤더. 기본값은 `user`
    pub from: String,
}

impl MailConfig {
    /// 기본 SMTP 호스트
    pub const DEFAULT_SMTP_HOST: &'static str = "smtp.gmail.com";

    /// 환경 변수에서 메일 설정을 읽습니다.
    ///
    /// `EMAIL_USER` 또는 `EMAIL_PASSWORD`가 비어 있으면 `None`을 반환합니다.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로 메일 설정을 구성합니다.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let user = present("EMAIL_USER")?;
        let password = present("EMAIL_PASSWORD")?;
        let from = present("EMAIL_FROM").unwrap_or_else(|| user.clone());
        let host = present("SMTP_HOST").unwrap_or_else(|| Self::DEFAULT_SMTP_HOST.to_string());
        let security = SmtpSecurity::parse(present("SMTP_SECURITY").as_deref());
        let port = match present("SMTP_PORT").map(|v| v.trim().parse::<u16>()) {
            Some(Ok(port)) => port,
            Some(Err(e)) => {
                log::warn!("⚠️ SMTP_PORT 파싱 실패: {}. 기본 포트 사용", e);
                security.default_port()
            }
            None => security.default_port(),
        };

        Some(Self {
            host,
            port,
            security,
            user,
            password,
            from,
        })
    }
}
