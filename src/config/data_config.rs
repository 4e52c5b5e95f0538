//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버 바인딩, 비밀번호 해싱 강도 관련 설정을 관리합니다.
//! 각 값은 시작 시점에 한 번 읽혀 [`AppContext`](crate::core::context::AppContext)
//! 구성에 사용되며, 이후에는 전역 상태로 다시 조회하지 않습니다.

use std::env;

/// 계정 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB `accounts` 컬렉션 (기본값)
    Mongo,
    /// 프로세스 메모리 (로컬 실행 및 테스트용, 재시작 시 소실)
    Memory,
}

impl StoreBackend {
    /// `ACCOUNT_STORE` 환경 변수에서 백엔드를 결정합니다.
    pub fn current() -> Self {
        Self::parse(env::var("ACCOUNT_STORE").ok().as_deref())
    }

    /// 문자열에서 백엔드를 결정합니다. 알 수 없는 값은 `Mongo`로 처리합니다.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("memory") | Some("in-memory") | Some("mem") => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI. 기본값: `mongodb://localhost:27017`
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름. 기본값: `account_service`
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "account_service".to_string())
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 운영 설정에서 허용하는 최소 bcrypt cost
    pub const MIN_COST: u32 = 12;

    /// bcrypt가 허용하는 최대 cost
    pub const MAX_COST: u32 = 31;

    /// 환경 변수 `BCRYPT_COST`에서 bcrypt cost를 읽습니다.
    ///
    /// # Returns
    ///
    /// [`MIN_COST`](Self::MIN_COST)..=[`MAX_COST`](Self::MAX_COST) 범위의 값.
    /// 설정되지 않았거나 파싱할 수 없으면 12를 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        Self::parse_cost(env::var("BCRYPT_COST").ok().as_deref())
    }

    /// 문자열 cost 값을 허용 범위로 보정합니다.
    pub fn parse_cost(value: Option<&str>) -> u32 {
        match value.and_then(|v| v.trim().parse::<u32>().ok()) {
            Some(cost) => cost.clamp(Self::MIN_COST, Self::MAX_COST),
            None => Self::MIN_COST,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 기본 포트
    pub const DEFAULT_PORT: u16 = 5000;

    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 5000)
    pub fn port() -> u16 {
        Self::parse_port(env::var("PORT").ok().as_deref())
    }

    /// 포트 문자열을 파싱합니다. 실패 시 기본 포트를 사용합니다.
    pub fn parse_port(value: Option<&str>) -> u16 {
        value
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_PORT)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 확인 링크에 사용할 공개 기본 URL을 반환합니다.
    ///
    /// `PUBLIC_BASE_URL`이 없으면 `http://localhost:<port>`를 사용합니다.
    /// 끝의 `/`는 제거됩니다.
    pub fn public_base_url(port: u16) -> String {
        let url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));
        url.trim_end_matches('/').to_string()
    }
}
