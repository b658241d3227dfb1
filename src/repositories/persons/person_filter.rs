//! 인물 검색 조건
//!
//! 저장소가 지원하는 이름 있는 질의 변형입니다. [`PersonFilter::matches`]가
//! 기준 의미이며, MongoDB 구현은 같은 의미의 쿼리 문서로 변환합니다.

use crate::domain::entities::persons::Person;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonFilter {
    /// 이름 완전 일치 (대소문자 구분)
    NameEquals(String),
    /// 이름 부분 일치 (대소문자 무시)
    NameContains(String),
    /// 이메일 부분 일치 (대소문자 구분, 빈 이메일 제외)
    EmailContains(String),
    /// `YYYY-MM-DD` 표기 부분 일치 (생년월일 없는 인물 제외)
    DateOfBirthContains(String),
    /// 주소 부분 일치 (대소문자 구분)
    AddressContains(String),
    /// `"True"` / `"False"` 표기 완전 일치
    ReceiveNewsLettersEquals(String),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::NameEquals(name) => person.name == *name,
            PersonFilter::NameContains(term) => person
                .name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            PersonFilter::EmailContains(term) => {
                !person.email.is_empty() && person.email.contains(term.as_str())
            }
            PersonFilter::DateOfBirthContains(term) => person
                .date_of_birth_text()
                .is_some_and(|text| text.contains(term.as_str())),
            PersonFilter::AddressContains(term) => person.address.contains(term.as_str()),
            PersonFilter::ReceiveNewsLettersEquals(text) => {
                person.receive_news_letters_text() == text
            }
        }
    }
}
