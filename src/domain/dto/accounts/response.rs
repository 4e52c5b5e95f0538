use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::accounts::Account;

/// 단순 메시지 응답 (`{message}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 로그인 응답 (`{token}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// 프로필 응답 DTO
///
/// 비밀번호 해시와 확인 토큰은 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_confirmed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        let Account {
            id,
            username,
            email,
            is_confirmed,
            created_at,
            updated_at,
            ..
        } = account;

        Self {
            id: id.to_hex(),
            username,
            email,
            is_confirmed,
            created_at: to_utc(created_at),
            updated_at: to_utc(updated_at),
        }
    }
}

fn to_utc(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}
