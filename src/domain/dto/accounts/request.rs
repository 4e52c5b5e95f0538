//! 계정 API 요청 DTO
//!
//! 필드는 모두 `Option`으로 받습니다. 누락, `null`, 빈 문자열은 `None`이 되어
//! 서비스 계층에서 "All fields are required" 검증 에러로 처리됩니다.
use serde::Deserialize;

use crate::utils::string_utils::{deserialize_optional_secret, deserialize_optional_string};

/// 회원가입 요청
#[derive(Debug, Default, Deserialize)]
pub struct SignupRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    /// 비밀번호는 공백을 제거하지 않습니다.
    #[serde(default, deserialize_with = "deserialize_optional_secret")]
    pub password: Option<String>,
}

/// 로그인 요청
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_secret")]
    pub password: Option<String>,
}
