//! 메모리 계정 저장소
//!
//! MongoDB 없이 서비스를 구동하거나 테스트할 때 사용합니다.
//! 모든 쓰기는 하나의 쓰기 락 아래에서 유니크 검사와 함께 수행됩니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::accounts::{Account, AccountDraft};
use crate::repositories::accounts::AccountStore;

/// 메모리 기반 [`AccountStore`]
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<ObjectId, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 계정 수
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<ObjectId, Account>>> {
        self.accounts
            .read()
            .map_err(|_| AppError::InternalError("account store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<ObjectId, Account>>> {
        self.accounts
            .write()
            .map_err(|_| AppError::InternalError("account store lock poisoned".to_string()))
    }

    fn find_where<F>(&self, predicate: F) -> AppResult<Option<Account>>
    where
        F: Fn(&Account) -> bool,
    {
        Ok(self.read()?.values().find(|account| predicate(account)).cloned())
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.find_where(|account| account.email == email)
    }

    async fn find_by_confirmation_token(&self, token: &str) -> AppResult<Option<Account>> {
        self.find_where(|account| account.confirmation_token.as_deref() == Some(token))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Account>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn create(&self, draft: AccountDraft) -> AppResult<Account> {
        let mut accounts = self.write()?;

        if accounts.values().any(|account| account.email == draft.email) {
            return Err(AppError::ConflictError("Email already in use".to_string()));
        }
        if accounts.values().any(|account| account.username == draft.username) {
            return Err(AppError::ConflictError("Username already in use".to_string()));
        }

        let account = Account::from_draft(ObjectId::new(), draft, DateTime::now());
        accounts.insert(account.id, account.clone());

        Ok(account)
    }

    async fn confirm_account(&self, account: &Account, consumed_token: &str) -> AppResult<()> {
        let mut accounts = self.write()?;

        match accounts.get_mut(&account.id) {
            Some(stored) if stored.confirmation_token.as_deref() == Some(consumed_token) => {
                stored.is_confirmed = true;
                stored.confirmation_token = None;
                stored.updated_at = account.updated_at;
                Ok(())
            }
            _ => Err(AppError::NotFound("Invalid or expired token".to_string())),
        }
    }

    async fn save(&self, account: &Account) -> AppResult<()> {
        let mut accounts = self.write()?;

        match accounts.get_mut(&account.id) {
            Some(stored) => {
                *stored = account.clone();
                Ok(())
            }
            None => Err(AppError::NotFound("User not found".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(username: &str, email: &str) -> AccountDraft {
        AccountDraft {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$2b$04$hash".to_string(),
            confirmation_token: format!("token-{}", username),
        }
    }

    #[actix_web::test]
    async fn test_create_and_find() {
        let store = InMemoryAccountStore::new();
        let created = store.create(draft("alice", "alice@x.com")).await.unwrap();

        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(
            store.find_by_email("alice@x.com").await.unwrap().map(|a| a.id),
            Some(created.id)
        );
        assert_eq!(
            store.find_by_confirmation_token("token-alice").await.unwrap().map(|a| a.id),
            Some(created.id)
        );
        assert!(store.find_by_id(&created.id).await.unwrap().is_some());
        assert!(store.find_by_id(&ObjectId::new()).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_email_and_username_are_rejected() {
        let store = InMemoryAccountStore::new();
        store.create(draft("alice", "alice@x.com")).await.unwrap();

        let same_email = store.create(draft("bob", "alice@x.com")).await;
        let same_username = store.create(draft("alice", "other@x.com")).await;

        assert!(matches!(same_email, Err(AppError::ConflictError(_))));
        assert!(matches!(same_username, Err(AppError::ConflictError(_))));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_save_persists_full_state() {
        let store = InMemoryAccountStore::new();
        let mut account = store.create(draft("alice", "alice@x.com")).await.unwrap();

        account.confirm();
        store.save(&account).await.unwrap();

        let stored = store.find_by_id(&account.id).await.unwrap().unwrap();
        assert!(stored.is_confirmed);
        assert!(store.find_by_confirmation_token("token-alice").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_confirmation_token_is_consumed_once() {
        let store = InMemoryAccountStore::new();
        store.create(draft("alice", "alice@x.com")).await.unwrap();

        let mut first = store.find_by_confirmation_token("token-alice").await.unwrap().unwrap();
        let mut second = first.clone();
        first.confirm();
        second.confirm();

        assert!(store.confirm_account(&first, "token-alice").await.is_ok());
        assert!(matches!(
            store.confirm_account(&second, "token-alice").await,
            Err(AppError::NotFound(_))
        ));

        let stored = store.find_by_id(&first.id).await.unwrap().unwrap();
        assert!(stored.is_confirmed);
        assert!(stored.confirmation_token.is_none());
    }

    #[actix_web::test]
    async fn test_save_unknown_account_is_not_found() {
        let store = InMemoryAccountStore::new();
        let account = Account::from_draft(ObjectId::new(), draft("ghost", "ghost@x.com"), DateTime::now());

        assert!(matches!(store.save(&account).await, Err(AppError::NotFound(_))));
    }
}
