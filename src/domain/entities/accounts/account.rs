//! Account Entity Implementation
//!
//! 계정 엔티티와 저장 전 검증 스키마([`AccountDraft`])를 정의합니다.
//!
//! ## 상태 전이
//!
//! ```text
//! Unconfirmed ──confirm(token)──▶ Confirmed
//! ```
//!
//! 다른 전이는 존재하지 않습니다. 확인이 끝난 계정은 확인 토큰을 다시 갖지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 계정 엔티티
///
/// MongoDB `accounts` 컬렉션의 문서 하나에 대응합니다.
/// `username`, `email`은 컬렉션 전체에서 유니크합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// 저장소가 할당하는 식별자 (불변)
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 이메일 (unique)
    pub email: String,
    /// bcrypt 해시. 원문 비밀번호는 저장하지 않습니다.
    pub password_hash: String,
    /// 이메일 확인 토큰. 확인 전에만 존재합니다.
    #[serde(default)]
    pub confirmation_token: Option<String>,
    /// 이메일 확인 여부
    #[serde(default)]
    pub is_confirmed: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Account {
    /// 검증된 초안으로부터 확인 전 상태의 계정을 생성합니다.
    ///
    /// 식별자와 타임스탬프는 저장소 구현이 제공합니다.
    pub fn from_draft(id: ObjectId, draft: AccountDraft, now: DateTime) -> Self {
        let AccountDraft {
            username,
            email,
            password_hash,
            confirmation_token,
        } = draft;

        Self {
            id,
            username,
            email,
            password_hash,
            confirmation_token: Some(confirmation_token),
            is_confirmed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// 이메일 확인을 완료합니다.
    ///
    /// 확인 플래그를 세우고 토큰을 제거한 뒤 수정 시간을 갱신합니다.
    pub fn confirm(&mut self) {
        self.is_confirmed = true;
        self.confirmation_token = None;
        self.updated_at = DateTime::now();
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}

/// 새 계정 저장 요청
///
/// 저장소에 넘기기 전에 [`Validate::validate`]로 스키마 검증을 거칩니다.
#[derive(Debug, Clone, Validate)]
pub struct AccountDraft {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password hash must not be empty"))]
    pub password_hash: String,

    #[validate(length(min = 1, message = "Confirmation token must not be empty"))]
    pub confirmation_token: String,
}
