//! 계정 데이터 액세스 계층
//!
//! [`AccountStore`] trait이 서비스가 의존하는 영속성 포트입니다.
//! 서비스는 구현체를 알지 못하며, 시작 시점에 구성된 구현체를 `Arc<dyn AccountStore>`로 주입받습니다.
//!
//! - [`MongoAccountStore`] - MongoDB `accounts` 컬렉션
//! - [`InMemoryAccountStore`] - 프로세스 메모리 (테스트, 로컬 실행)
//!
//! 두 구현 모두 `username`/`email` 중복을 `ConflictError`로 거부합니다.
//! 동시 회원가입 경쟁은 이 거부가 유일한 직렬화 지점입니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::accounts::{Account, AccountDraft};

pub mod memory_store;
pub mod mongo_store;

pub use memory_store::*;
pub use mongo_store::*;

/// 계정 영속성 포트
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 이메일로 계정 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// 확인 토큰으로 계정 조회
    async fn find_by_confirmation_token(&self, token: &str) -> AppResult<Option<Account>>;

    /// ID로 계정 조회
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Account>>;

    /// 새 계정을 저장하고 ID, 타임스탬프가 할당된 계정을 반환합니다.
    ///
    /// # Errors
    ///
    /// `username` 또는 `email`이 이미 존재하면 `ConflictError`
    async fn create(&self, draft: AccountDraft) -> AppResult<Account>;

    /// 확인 토큰을 소비하여 계정의 확인 상태를 저장합니다.
    ///
    /// 저장된 계정이 아직 `consumed_token`을 갖고 있을 때만 기록합니다.
    /// 같은 토큰으로 동시에 확인하면 하나만 성공합니다.
    ///
    /// # Errors
    ///
    /// 토큰이 이미 소비되었거나 계정이 없으면 `NotFound("Invalid or expired token")`
    async fn confirm_account(&self, account: &Account, consumed_token: &str) -> AppResult<()>;

    /// 계정의 현재 상태 전체를 저장합니다.
    ///
    /// # Errors
    ///
    /// 해당 ID의 계정이 없으면 `NotFound`
    async fn save(&self, account: &Account) -> AppResult<()>;
}
