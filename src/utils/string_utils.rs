//! # 문자열 유틸리티

use serde::Deserialize;

/// 공백만 있는 값을 `None`으로 접고, 나머지는 앞뒤 공백을 제거합니다.
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  food ".to_string())), Some("food".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
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

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 쿼리 문자열의 `?category=` 처럼 빈 값으로 전달된 필터를 "필터 없음"으로 취급합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Query {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     category: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Filter {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        category: Option<String>,
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  교통  ".to_string())), Some("교통".to_string()));
        assert_eq!(clean_optional_string(Some("\t\n".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_blank_filter_is_absent() {
        let blank: Filter = serde_json::from_str(r#"{"category": "  "}"#).unwrap();
        let null: Filter = serde_json::from_str(r#"{"category": null}"#).unwrap();
        let missing: Filter = serde_json::from_str("{}").unwrap();

        assert_eq!(blank.category, None);
        assert_eq!(null.category, None);
        assert_eq!(missing.category, None);
    }

    #[test]
    fn test_filter_is_trimmed() {
        let filter: Filter = serde_json::from_str(r#"{"category": " food "}"#).unwrap();

        assert_eq!(filter.category, Some("food".to_string()));
    }
}
