//! Database Connection Management Module
//!
//! MongoDB 연결을 생성하고 검증합니다.
//! 드라이버의 `Client`는 내부적으로 커넥션 풀을 관리하므로
//! 하나의 인스턴스를 모든 워커가 공유합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect("mongodb://localhost:27017", "account_service").await?;
//! let store = MongoAccountStore::new(database.get_database());
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::core::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성하고 `ping`으로 연결 상태를 검증합니다.
    ///
    /// # Errors
    ///
    /// URI 파싱 실패, 클라이언트 생성 실패, ping 실패 시 `DatabaseError`
    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 모니터링 및 로깅에 표시될 애플리케이션 이름
        client_options.app_name = Some("account_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
