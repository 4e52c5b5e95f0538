//! # MongoDB 계정 저장소
//!
//! `accounts` 컬렉션에 계정 문서를 저장합니다.
//!
//! ## 인덱스
//!
//! | 이름 | 필드 | 속성 |
//! |------|------|------|
//! | `email_unique` | `email` | UNIQUE |
//! | `username_unique` | `username` | UNIQUE |
//! | `confirmation_token_lookup` | `confirmation_token` | - |
//! | `created_at_desc` | `created_at` (내림차순) | - |
//!
//! 유니크 인덱스 위반(서버 코드 11000)은 `ConflictError`로 변환되고,
//! 그 밖의 드라이버 에러는 `DatabaseError`가 됩니다.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::accounts::{Account, AccountDraft};
use crate::repositories::accounts::AccountStore;

/// 계정 컬렉션 이름
pub const ACCOUNTS_COLLECTION: &str = "accounts";

const DUPLICATE_KEY_CODE: i32 = 11000;
const EMAIL_INDEX: &str = "email_unique";
const USERNAME_INDEX: &str = "username_unique";

/// MongoDB 기반 [`AccountStore`]
#[derive(Clone)]
pub struct MongoAccountStore {
    collection: Collection<Account>,
}

impl MongoAccountStore {
    pub fn new(database: &mongodb::Database) -> Self {
        Self {
            collection: database.collection::<Account>(ACCOUNTS_COLLECTION),
        }
    }

    /// 컬렉션 인덱스를 생성합니다. 시작 시점에 한 번 호출합니다.
    ///
    /// 이미 중복 데이터가 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(EMAIL_INDEX.to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(USERNAME_INDEX.to_string())
                .build())
            .build();

        let token_index = IndexModel::builder()
            .keys(doc! { "confirmation_token": 1 })
            .options(IndexOptions::builder()
                .name("confirmation_token_lookup".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, username_index, token_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_one(&self, filter: mongodb::bson::Document) -> AppResult<Option<Account>> {
        self.collection
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl AccountStore for MongoAccountStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.find_one(doc! { "email": email }).await
    }

    async fn find_by_confirmation_token(&self, token: &str) -> AppResult<Option<Account>> {
        self.find_one(doc! { "confirmation_token": token }).await
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Account>> {
        self.find_one(doc! { "_id": *id }).await
    }

    async fn create(&self, draft: AccountDraft) -> AppResult<Account> {
        let account = Account::from_draft(ObjectId::new(), draft, DateTime::now());

        self.collection
            .insert_one(&account)
            .await
            .map_err(map_write_error)?;

        Ok(account)
    }

    async fn confirm_account(&self, account: &Account, consumed_token: &str) -> AppResult<()> {
        let result = self.collection
            .update_one(
                doc! { "_id": account.id, "confirmation_token": consumed_token },
                doc! {
                    "$set": {
                        "is_confirmed": true,
                        "confirmation_token": null,
                        "updated_at": account.updated_at,
                    }
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("Invalid or expired token".to_string()));
        }

        Ok(())
    }

    async fn save(&self, account: &Account) -> AppResult<()> {
        let result = self.collection
            .replace_one(doc! { "_id": account.id }, account)
            .await
            .map_err(map_write_error)?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}

/// 쓰기 에러를 `AppError`로 변환합니다.
fn map_write_error(error: mongodb::error::Error) -> AppError {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            AppError::ConflictError(duplicate_key_message(&write_error.message).to_string())
        }
        _ => AppError::DatabaseError(error.to_string()),
    }
}

/// 위반된 유니크 인덱스 이름으로 메시지를 고릅니다.
///
/// 서버 메시지 형식: `E11000 duplicate key error collection: <ns> index: <name> dup key: {...}`
fn duplicate_key_message(server_message: &str) -> &'static str {
    let index_name = server_message
        .split_once("index: ")
        .and_then(|(_, rest)| rest.split_whitespace().next());

    match index_name {
        Some(USERNAME_INDEX) => "Username already in use",
        _ => "Email already in use",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message_names_the_field() {
        assert_eq!(
            duplicate_key_message(
                "E11000 duplicate key error collection: account_service.accounts index: username_unique dup key: { username: \"alice\" }"
            ),
            "Username already in use"
        );
        assert_eq!(
            duplicate_key_message(
                "E11000 duplicate key error collection: account_service.accounts index: email_unique dup key: { email: \"alice@x.com\" }"
            ),
            "Email already in use"
        );
    }

    #[test]
    fn test_duplicate_email_mentioning_username_is_an_email_conflict() {
        assert_eq!(
            duplicate_key_message(
                "E11000 duplicate key error collection: account_service.accounts index: email_unique dup key: { email: \"username@x.com\" }"
            ),
            "Email already in use"
        );
    }
}
