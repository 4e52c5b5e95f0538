//! # 문자열 유틸리티
//!
//! 요청 DTO 역직렬화와 헤더 파싱에 쓰이는 문자열 처리 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// 앞뒤 공백을 제거하고, 결과가 비어 있으면 `None`을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde용: 공백 정리 후 빈 문자열을 `None`으로 역직렬화
///
/// ```rust,ignore
/// // JSON: {"email": "  a@b.com  "} → Some("a@b.com")
/// // JSON: {"email": "   "}         → None
/// // JSON: {"email": null}          → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// serde용: 비밀번호처럼 값을 변형하면 안 되는 필드
///
/// 빈 문자열만 `None`으로 처리하고 공백은 그대로 유지합니다.
pub fn deserialize_optional_secret<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}

/// `Authorization` 헤더 값에서 세션 토큰을 추출합니다.
///
/// `Bearer ` 접두사가 있으면 제거합니다. 접두사가 없는 값은 토큰 자체로 취급하며,
/// 남는 값이 비어 있으면 `None`을 반환합니다.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    let value = auth_header.trim_start();
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"field": "  안녕하세요  "}"#).unwrap();
        assert_eq!(result.field, Some("안녕하세요".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"field": "\t\n  "}"#).unwrap();
        assert_eq!(result.field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.field, None);
    }

    #[test]
    fn test_deserialize_optional_secret_keeps_whitespace() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_secret")]
            secret: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"secret": "  pw  "}"#).unwrap();
        assert_eq!(result.secret, Some("  pw  ".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"secret": ""}"#).unwrap();
        assert_eq!(result.secret, None);
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("   "), None);
    }
}
