use serde::{Deserialize, Serialize};
use crate::domain::dto::persons::response::PersonResponse;
use crate::domain::enums::SortOrderOptions;

/// 인물 목록 응답
///
/// 결과와 함께 적용된 검색/정렬 상태를 돌려주어 클라이언트가 다음 요청을 구성할 수 있게 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonsIndexResponse {
    pub persons: Vec<PersonResponse>,
    pub current_search_by: Option<String>,
    pub current_search_string: Option<String>,
    pub current_sort_by: String,
    pub current_sort_order: SortOrderOptions,
}

/// 검색 가능한 필드와 화면 표시 이름
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFieldResponse {
    pub field: String,
    pub label: String,
}

pub const SEARCH_FIELDS: [(&str, &str); 5] = [
    ("Name", "Person Name"),
    ("Email", "Email"),
    ("DateOfBirth", "Birthday Date"),
    ("Address", "Address"),
    ("ReceiveNewsLetters", "Receive News Letters"),
];

pub fn search_fields() -> Vec<SearchFieldResponse> {
    SEARCH_FIELDS
        .iter()
        .map(|(field, label)| SearchFieldResponse {
            field: field.to_string(),
            label: label.to_string(),
        })
        .collect()
}
