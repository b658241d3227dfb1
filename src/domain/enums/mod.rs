//! 도메인 열거형 모듈
//!
//! 인물의 성별 선택지와 목록 정렬 방향을 정의합니다.

use std::fmt;
use serde::{Deserialize, Serialize};

/// 인물의 성별 선택지
///
/// 저장소와 JSON 모두 `"Male"`, `"Female"`, `"Others"` 문자열로 표현됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderOptions {
    Male,
    Female,
    Others,
}

impl GenderOptions {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderOptions::Male => "Male",
            GenderOptions::Female => "Female",
            GenderOptions::Others => "Others",
        }
    }
}

impl fmt::Display for GenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 정렬 방향
///
/// 쿼리 문자열에서는 `ASC` / `DESC`로 전달됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrderOptions {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrderOptions {
    /// `ASC` / `DESC`를 대소문자 구분 없이 해석합니다. 그 밖의 값은 `None`입니다.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("ASC") {
            Some(SortOrderOptions::Asc)
        } else if s.eq_ignore_ascii_case("DESC") {
            Some(SortOrderOptions::Desc)
        } else {
            None
        }
    }
}

impl fmt::Display for SortOrderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrderOptions::Asc => f.write_str("ASC"),
            SortOrderOptions::Desc => f.write_str("DESC"),
        }
    }
}
