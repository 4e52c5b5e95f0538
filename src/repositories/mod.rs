//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::{AccountStore, MongoAccountStore};
//!
//! let store = MongoAccountStore::new(&database.get_database());
//! let account = store.find_by_email("user@example.com").await?;
//! ```

pub mod accounts;
