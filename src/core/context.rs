//! 애플리케이션 컨텍스트
//!
//! 시작 시점에 한 번 구성되어 [`AccountService`](crate::services::accounts::AccountService)에
//! 전달되는 협력 객체 묶음입니다. 이후 전역 상태는 사용하지 않습니다.
//!
//! ```rust,ignore
//! let context = AppContext::new(
//!     Arc::new(InMemoryAccountStore::new()),
//!     PasswordHasher::from_config(),
//!     TokenIssuer::from_config()?,
//!     Arc::new(LogNotifier),
//!     "http://localhost:5000",
//! );
//! let service = AccountService::new(context);
//! ```

use std::sync::Arc;

use crate::repositories::accounts::AccountStore;
use crate::services::auth::{PasswordHasher, TokenIssuer};
use crate::services::notifications::Notifier;

/// 계정 서비스 협력 객체
#[derive(Clone)]
pub struct AppContext {
    /// 계정 저장소
    pub store: Arc<dyn AccountStore>,
    /// 비밀번호 해셔
    pub hasher: PasswordHasher,
    /// 확인/세션 토큰 발급기
    pub tokens: TokenIssuer,
    /// 확인 링크 발송기
    pub notifier: Arc<dyn Notifier>,
    /// 확인 링크에 사용할 외부 접근 주소 (끝의 `/` 없음)
    pub base_url: String,
}

impl AppContext {
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: PasswordHasher,
        tokens: TokenIssuer,
        notifier: Arc<dyn Notifier>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            store,
            hasher,
            tokens,
            notifier,
            base_url,
        }
    }

    /// 확인 토큰에 대한 이메일 확인 링크
    pub fn confirmation_link(&self, token: &str) -> String {
        format!("{}/api/confirm/{}", self.base_url, token)
    }
}
