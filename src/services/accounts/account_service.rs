//! # Account Service
//!
//! 계정 생명주기를 조율하는 서비스입니다.
//! 저장소, 해셔, 토큰 발급기, 알림기는 모두 [`AppContext`]로 주입됩니다.
//!
//! ## 상태 전이
//!
//! ```text
//! signup ──▶ Unconfirmed ──confirm_email(token)──▶ Confirmed ──login──▶ session token
//! ```
//!
//! 각 단계는 첫 번째 실패를 그대로 반환하며 재시도하지 않습니다.
//! 확인 메일 발송만 예외로, 분리된 태스크에서 실행되고 실패는 로그로만 남습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let service = AccountService::new(context);
//!
//! let account = service.signup(request).await?;
//! service.confirm_email(&token).await?;
//! let session = service.login(login_request).await?;
//! let profile = service.get_profile(Some(&session)).await?;
//! ```

use std::sync::Arc;
use std::time::Instant;

use mongodb::bson::oid::ObjectId;
use validator::{Validate, ValidateEmail, ValidationErrors};

use crate::core::context::AppContext;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::accounts::{AccountProfile, LoginRequest, SignupRequest};
use crate::domain::entities::accounts::{Account, AccountDraft};
use crate::services::notifications::Notifier;

const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// 계정 서비스
///
/// `web::Data`로 감싸 모든 워커가 공유합니다.
pub struct AccountService {
    context: AppContext,
}

impl AccountService {
    pub fn new(context: AppContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// 새 계정을 등록하고 확인 링크를 발송합니다.
    ///
    /// 생성된 계정(확인 전 상태)을 반환합니다.
    ///
    /// # Errors
    ///
    /// * 필드 누락: `ValidationError("All fields are required")`
    /// * 이메일 형식 오류: `ValidationError("Invalid email format")`
    /// * 이메일/사용자명 중복: `ConflictError`
    /// * 해싱, 저장소 실패: `HashingError`, `DatabaseError`
    pub async fn signup(&self, request: SignupRequest) -> AppResult<Account> {
        let started = Instant::now();

        let (username, email, password) = match (request.username, request.email, request.password) {
            (Some(username), Some(email), Some(password)) => (username, email, password),
            _ => return Err(AppError::ValidationError(ALL_FIELDS_REQUIRED.to_string())),
        };

        if !email.validate_email() {
            return Err(AppError::ValidationError("Invalid email format".to_string()));
        }

        if self.context.store.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError("Email already in use".to_string()));
        }

        let password_hash = self.context.hasher.hash(&password)?;
        let confirmation_token = self.fresh_confirmation_token().await?;

        let draft = AccountDraft {
            username,
            email,
            password_hash,
            confirmation_token,
        };
        draft
            .validate()
            .map_err(|e| AppError::ValidationError(first_validation_message(&e)))?;

        let account = self.context.store.create(draft).await?;

        log::info!(
            "✅ 계정 생성: {} ({}) in {:?}",
            account.username,
            account.id_string(),
            started.elapsed()
        );

        if let Some(token) = account.confirmation_token.as_deref() {
            self.dispatch_confirmation(account.email.clone(), self.context.confirmation_link(token));
        }

        Ok(account)
    }

    /// 확인 토큰을 소비하여 계정을 확인 상태로 전환합니다.
    ///
    /// # Errors
    ///
    /// 알 수 없는 토큰, 빈 토큰, 이미 사용된 토큰은 모두 `NotFound("Invalid or expired token")`
    pub async fn confirm_email(&self, token: &str) -> AppResult<Account> {
        let token = token.trim();
        if token.is_empty() {
            return Err(invalid_confirmation_token());
        }

        let mut account = self.context.store
            .find_by_confirmation_token(token)
            .await?
            .ok_or_else(invalid_confirmation_token)?;

        account.confirm();
        self.context.store.confirm_account(&account, token).await?;

        log::info!("📧 이메일 확인 완료: {}", account.id_string());

        Ok(account)
    }

    /// 이메일과 비밀번호로 로그인하고 세션 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * 필드 누락: `ValidationError`
    /// * 계정 없음: `NotFound("User not found")`
    /// * 미확인 계정: `UnconfirmedAccount` (비밀번호가 맞아도 동일)
    /// * 비밀번호 불일치: `InvalidCredentials`
    pub async fn login(&self, request: LoginRequest) -> AppResult<String> {
        let (email, password) = match (request.email, request.password) {
            (Some(email), Some(password)) => (email, password),
            _ => return Err(AppError::ValidationError(ALL_FIELDS_REQUIRED.to_string())),
        };

        let account = self.context.store
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !account.is_confirmed {
            return Err(AppError::UnconfirmedAccount(
                "Please confirm your email address before logging in".to_string(),
            ));
        }

        let verify_started = Instant::now();
        let is_valid = self.context.hasher.verify(&password, &account.password_hash);
        log::debug!("Password verification took: {:?}", verify_started.elapsed());

        if !is_valid {
            log::warn!("⚠️ 로그인 실패 (비밀번호 불일치): {}", account.id_string());
            return Err(AppError::InvalidCredentials("Invalid credentials".to_string()));
        }

        self.context.tokens.issue_session(&account.id_string())
    }

    /// 세션 토큰 소유자의 프로필을 조회합니다.
    ///
    /// # Errors
    ///
    /// * 토큰 없음 또는 공백: `MissingToken`
    /// * 서명 불일치, 만료, 잘못된 계정 ID: `Unauthorized`
    /// * 계정이 더 이상 없음: `NotFound`
    pub async fn get_profile(&self, session_token: Option<&str>) -> AppResult<AccountProfile> {
        let token = session_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::MissingToken("Token is required".to_string()))?;

        let account_id = self.context.tokens
            .verify_session(token)
            .map_err(|e| match e {
                AppError::InvalidToken(detail) => AppError::Unauthorized(detail),
                other => other,
            })?;

        let object_id = ObjectId::parse_str(&account_id)
            .map_err(|_| AppError::Unauthorized("invalid token subject".to_string()))?;

        let account = self.context.store
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(AccountProfile::from(account))
    }

    /// 저장소에 아직 없는 확인 토큰을 뽑습니다.
    async fn fresh_confirmation_token(&self) -> AppResult<String> {
        loop {
            let token = self.context.tokens.generate_confirmation_token();
            if self.context.store.find_by_confirmation_token(&token).await?.is_none() {
                return Ok(token);
            }
            log::warn!("⚠️ 확인 토큰 충돌, 재생성합니다");
        }
    }

    /// 확인 링크 발송을 분리된 태스크로 실행합니다. 요청은 결과를 기다리지 않습니다.
    fn dispatch_confirmation(&self, email: String, link: String) {
        let notifier: Arc<dyn Notifier> = Arc::clone(&self.context.notifier);

        actix_web::rt::spawn(async move {
            match notifier.send_confirmation(&email, &link).await {
                Ok(()) => log::debug!("확인 링크 전달 완료: {}", email),
                Err(e) => log::error!("❌ 확인 메일 발송 실패 ({}): {}", email, e),
            }
        });
    }
}

fn invalid_confirmation_token() -> AppError {
    AppError::NotFound("Invalid or expired token".to_string())
}

/// 검증 에러 중 첫 번째 메시지
fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::domain::models::token::SessionClaims;
    use crate::repositories::accounts::{AccountStore, InMemoryAccountStore};
    use crate::services::auth::{PasswordHasher, TokenIssuer};

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl RecordingNotifier {
        fn sent(&self) -> Vec<(String, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send_confirmation(&self, email: &str, confirmation_link: &str) -> AppResult<()> {
            self.sent
                .lock()
                .unwrap()
                .push((email.to_string(), confirmation_link.to_string()));
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send_confirmation(&self, _email: &str, _confirmation_link: &str) -> AppResult<()> {
            Err(AppError::ExternalServiceError("relay unavailable".to_string()))
        }
    }

    struct Fixture {
        service: AccountService,
        store: Arc<InMemoryAccountStore>,
        notifier: Arc<RecordingNotifier>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryAccountStore::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let context = AppContext::new(
            store.clone(),
            PasswordHasher::new(4).unwrap(),
            TokenIssuer::new("test-secret").unwrap(),
            notifier.clone(),
            "http://localhost:5000",
        );

        Fixture {
            service: AccountService::new(context),
            store,
            notifier,
        }
    }

    fn signup_request(username: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    async fn confirmed_alice(fixture: &Fixture) -> Account {
        let account = fixture
            .service
            .signup(signup_request("alice", "alice@x.com", "Secret123"))
            .await
            .unwrap();
        let token = account.confirmation_token.clone().unwrap();
        fixture.service.confirm_email(&token).await.unwrap()
    }

    #[actix_web::test]
    async fn test_signup_creates_unconfirmed_account() {
        let fixture = fixture();

        let first = fixture
            .service
            .signup(signup_request("alice", "alice@x.com", "Secret123"))
            .await
            .unwrap();
        let second = fixture
            .service
            .signup(signup_request("bob", "bob@x.com", "Secret123"))
            .await
            .unwrap();

        assert!(!first.is_confirmed);
        let token = first.confirmation_token.as_deref().unwrap();
        assert_ne!(token, "Secret123");
        assert_ne!(Some(token), second.confirmation_token.as_deref());
        assert_ne!(first.password_hash, "Secret123");
        assert_eq!(fixture.store.len().unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_signup_sends_confirmation_link() {
        let fixture = fixture();

        let account = fixture
            .service
            .signup(signup_request("alice", "alice@x.com", "Secret123"))
            .await
            .unwrap();
        actix_web::rt::time::sleep(Duration::from_millis(50)).await;

        let expected_link = format!(
            "http://localhost:5000/api/confirm/{}",
            account.confirmation_token.unwrap()
        );
        assert_eq!(
            fixture.notifier.sent(),
            vec![("alice@x.com".to_string(), expected_link)]
        );
    }

    #[actix_web::test]
    async fn test_signup_succeeds_when_notification_fails() {
        let store = Arc::new(InMemoryAccountStore::new());
        let context = AppContext::new(
            store.clone(),
            PasswordHasher::new(4).unwrap(),
            TokenIssuer::new("test-secret").unwrap(),
            Arc::new(FailingNotifier),
            "http://localhost:5000",
        );
        let service = AccountService::new(context);

        let result = service
            .signup(signup_request("alice", "alice@x.com", "Secret123"))
            .await;
        actix_web::rt::time::sleep(Duration::from_millis(50)).await;

        assert!(result.is_ok());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_signup_requires_all_fields() {
        let fixture = fixture();
        let mut request = signup_request("alice", "alice@x.com", "Secret123");
        request.password = None;

        let result = fixture.service.signup(request).await;

        match result {
            Err(AppError::ValidationError(message)) => assert_eq!(message, ALL_FIELDS_REQUIRED),
            other => panic!("expected ValidationError, got {:?}", other.map(|a| a.id)),
        }
    }

    #[actix_web::test]
    async fn test_signup_rejects_malformed_email() {
        let fixture = fixture();

        let result = fixture
            .service
            .signup(signup_request("alice", "not-an-email", "Secret123"))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(fixture.store.is_empty().unwrap());
    }

    #[actix_web::test]
    async fn test_signup_with_used_email_conflicts() {
        let fixture = fixture();
        fixture
            .service
            .signup(signup_request("alice", "alice@x.com", "Secret123"))
            .await
            .unwrap();

        let result = fixture
            .service
            .signup(signup_request("someone-else", "alice@x.com", "Other456"))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(fixture.store.len().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_signup_with_used_username_conflicts() {
        let fixture = fixture();
        fixture
            .service
            .signup(signup_request("alice", "alice@x.com", "Secret123"))
            .await
            .unwrap();

        let result = fixture
            .service
            .signup(signup_request("alice", "other@x.com", "Secret123"))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_confirm_email_is_single_use() {
        let fixture = fixture();
        let account = fixture
            .service
            .signup(signup_request("alice", "alice@x.com", "Secret123"))
            .await
            .unwrap();
        let token = account.confirmation_token.unwrap();

        let confirmed = fixture.service.confirm_email(&token).await.unwrap();
        assert!(confirmed.is_confirmed);
        assert!(confirmed.confirmation_token.is_none());

        let stored = fixture.store.find_by_id(&account.id).await.unwrap().unwrap();
        assert!(stored.is_confirmed);

        let again = fixture.service.confirm_email(&token).await;
        assert!(matches!(again, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_confirm_email_with_unknown_token_is_not_found() {
        let fixture = fixture();

        assert!(matches!(
            fixture.service.confirm_email("deadbeef").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            fixture.service.confirm_email("").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_login_before_confirmation_is_rejected() {
        let fixture = fixture();
        fixture
            .service
            .signup(signup_request("alice", "alice@x.com", "Secret123"))
            .await
            .unwrap();

        let result = fixture.service.login(login_request("alice@x.com", "Secret123")).await;

        assert!(matches!(result, Err(AppError::UnconfirmedAccount(_))));
    }

    #[actix_web::test]
    async fn test_login_failures() {
        let fixture = fixture();
        confirmed_alice(&fixture).await;

        let wrong_password = fixture.service.login(login_request("alice@x.com", "wrong")).await;
        let unknown_email = fixture.service.login(login_request("nobody@x.com", "Secret123")).await;
        let missing_field = fixture
            .service
            .login(LoginRequest {
                email: Some("alice@x.com".to_string()),
                password: None,
            })
            .await;

        assert!(matches!(wrong_password, Err(AppError::InvalidCredentials(_))));
        assert!(matches!(unknown_email, Err(AppError::NotFound(_))));
        assert!(matches!(missing_field, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_login_session_opens_profile() {
        let fixture = fixture();
        let account = confirmed_alice(&fixture).await;

        let session = fixture
            .service
            .login(login_request("alice@x.com", "Secret123"))
            .await
            .unwrap();
        let profile = fixture.service.get_profile(Some(&session)).await.unwrap();

        assert_eq!(profile.id, account.id_string());
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "alice@x.com");
        assert!(profile.is_confirmed);
    }

    #[actix_web::test]
    async fn test_profile_requires_token() {
        let fixture = fixture();

        assert!(matches!(
            fixture.service.get_profile(None).await,
            Err(AppError::MissingToken(_))
        ));
        assert!(matches!(
            fixture.service.get_profile(Some("   ")).await,
            Err(AppError::MissingToken(_))
        ));
    }

    #[actix_web::test]
    async fn test_profile_rejects_bad_sessions() {
        let fixture = fixture();
        confirmed_alice(&fixture).await;

        let foreign = TokenIssuer::new("other-secret")
            .unwrap()
            .issue_session(&ObjectId::new().to_hex())
            .unwrap();
        let bad_subject = fixture.service.context().tokens.issue_session("not-an-object-id").unwrap();

        assert!(matches!(
            fixture.service.get_profile(Some(&foreign)).await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            fixture.service.get_profile(Some("garbage")).await,
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            fixture.service.get_profile(Some(&bad_subject)).await,
            Err(AppError::Unauthorized(_))
        ));
    }

    #[actix_web::test]
    async fn test_profile_rejects_expired_session() {
        let fixture = fixture();
        let account = confirmed_alice(&fixture).await;
        let now = chrono::Utc::now().timestamp();
        let claims = SessionClaims {
            id: account.id_string(),
            iat: now - 7200,
            exp: now - 60,
        };
        let expired = jsonwebtoken::encode(
            &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        match fixture.service.get_profile(Some(&expired)).await {
            Err(AppError::Unauthorized(detail)) => assert_eq!(detail, "jwt expired"),
            other => panic!("expected Unauthorized, got {:?}", other.map(|p| p.id)),
        }
    }

    #[actix_web::test]
    async fn test_stale_confirmation_read_cannot_confirm_twice() {
        let fixture = fixture();
        let account = fixture
            .service
            .signup(signup_request("alice", "alice@x.com", "Secret123"))
            .await
            .unwrap();
        let token = account.confirmation_token.clone().unwrap();

        let mut stale = account.clone();
        stale.confirm();
        fixture.service.confirm_email(&token).await.unwrap();

        assert!(matches!(
            fixture.store.confirm_account(&stale, &token).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_profile_of_missing_account_is_not_found() {
        let fixture = fixture();
        let session = fixture
            .service
            .context()
            .tokens
            .issue_session(&ObjectId::new().to_hex())
            .unwrap();

        assert!(matches!(
            fixture.service.get_profile(Some(&session)).await,
            Err(AppError::NotFound(_))
        ));
    }
}
