//! 세션 토큰(JWT) 클레임
//!
//! 세션 토큰은 계정 식별자만 담습니다. 권한이나 프로필 정보는 포함하지 않으며,
//! 프로필 조회 시 항상 저장소에서 최신 상태를 읽습니다.
use serde::{Deserialize, Serialize};

/// JWT 페이로드
///
/// - `id`: 계정 ID (ObjectId 16진수 문자열)
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp, 발급 후 1시간)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: String,
    pub iat: i64,
    pub exp: i64,
}
