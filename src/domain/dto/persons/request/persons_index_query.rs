use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use crate::domain::enums::SortOrderOptions;

/// 인물 목록 조회 쿼리 (`GET /persons`)
///
/// 검색 후 정렬합니다. 정렬 기본값은 이름 오름차순입니다.
/// `sortOrder`는 대소문자를 구분하지 않으며, 알 수 없는 값은 오류 대신 `ASC`로 처리합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonsIndexQuery {
    #[serde(default)]
    pub search_by: Option<String>,
    #[serde(default)]
    pub search_string: Option<String>,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default, deserialize_with = "lenient_sort_order")]
    pub sort_order: SortOrderOptions,
}

fn default_sort_by() -> String {
    "Name".to_string()
}

fn lenient_sort_order<'de, D>(deserializer: D) -> Result<SortOrderOptions, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    Ok(match raw.as_deref() {
        Some(value) => SortOrderOptions::parse(value).unwrap_or_else(|| {
            debug!("알 수 없는 정렬 방향 '{}', ASC로 처리합니다", value);
            SortOrderOptions::default()
        }),
        None => SortOrderOptions::default(),
    })
}

impl Default for PersonsIndexQuery {
    fn default() -> Self {
        Self {
            search_by: None,
            search_string: None,
            sort_by: default_sort_by(),
            sort_order: SortOrderOptions::Asc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    fn parse(query: &str) -> PersonsIndexQuery {
        Query::<PersonsIndexQuery>::from_query(query).unwrap().into_inner()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(""), PersonsIndexQuery::default());
    }

    #[test]
    fn test_sort_order_is_case_insensitive() {
        assert_eq!(parse("sortOrder=desc").sort_order, SortOrderOptions::Desc);
        assert_eq!(parse("sortOrder=Desc").sort_order, SortOrderOptions::Desc);
        assert_eq!(parse("sortOrder=asc").sort_order, SortOrderOptions::Asc);
    }

    #[test]
    fn test_unknown_sort_order_falls_back_to_asc() {
        let query = parse("sortBy=Email&sortOrder=foo");
        assert_eq!(query.sort_by, "Email");
        assert_eq!(query.sort_order, SortOrderOptions::Asc);

        assert_eq!(parse("sortOrder=").sort_order, SortOrderOptions::Asc);
    }
}
