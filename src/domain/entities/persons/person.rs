//! Person Entity Implementation
//!
//! 인물 엔티티입니다. `country_id`로 [`Country`]를 참조하며, 저장소가 조회 시
//! 해당 국가를 함께 적재(eager join)하여 `country` 필드에 채웁니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::entities::countries::Country;
use crate::domain::entities::id_format;
use crate::domain::enums::GenderOptions;

/// 인물 엔티티
///
/// ## 필드 제약
/// - `name`: 최대 30자, 인물 간 unique
/// - `email`: 최대 50자
/// - `address`: 최대 200자
/// - `tin`: 선택 사항, `NNN-NN-NNNN` 형식
///
/// `country`는 저장되지 않고 조회 시에만 채워지는 조인 결과입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id", with = "id_format")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: GenderOptions,
    #[serde(with = "id_format")]
    pub country_id: Uuid,
    pub address: String,
    pub receive_news_letters: bool,
    #[serde(default)]
    pub tin: Option<String>,
    #[serde(default, skip_serializing)]
    pub country: Option<Country>,
}

impl Person {
    /// 다른 인물 레코드의 모든 값으로 현재 레코드를 덮어씁니다.
    ///
    /// 조인된 `country`는 저장소가 다음 조회 시 다시 채우므로 비워 둡니다.
    pub fn apply_update(&mut self, updated: &Person) {
        self.id = updated.id;
        self.name = updated.name.clone();
        self.email = updated.email.clone();
        self.date_of_birth = updated.date_of_birth;
        self.gender = updated.gender;
        self.country_id = updated.country_id;
        self.address = updated.address.clone();
        self.receive_news_letters = updated.receive_news_letters;
        self.tin = updated.tin.clone();
        self.country = None;
    }

    /// 생년월일 표기 (`YYYY-MM-DD`). 검색과 정렬이 같은 표기를 사용합니다.
    pub fn date_of_birth_text(&self) -> Option<String> {
        self.date_of_birth.map(|date| date.format("%Y-%m-%d").to_string())
    }

    /// 뉴스레터 수신 여부의 문자열 표기 (`"True"` / `"False"`)
    pub fn receive_news_letters_text(&self) -> &'static str {
        if self.receive_news_letters { "True" } else { "False" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> Person {
        Person {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            date_of_birth: NaiveDate::from_ymd_opt(1993, 1, 2),
            gender: GenderOptions::Female,
            country_id: Uuid::new_v4(),
            address: "Sample Address".to_string(),
            receive_news_letters: true,
            tin: None,
            country: Some(Country::new(Uuid::new_v4(), "Japan")),
        }
    }

    #[test]
    fn test_apply_update_overwrites_every_field() {
        let mut existing = sample("Smith");
        let mut updated = sample("William");
        updated.id = existing.id;
        updated.gender = GenderOptions::Male;
        updated.receive_news_letters = false;
        updated.tin = Some("123-45-6789".to_string());

        existing.apply_update(&updated);

        assert_eq!(existing.name, "William");
        assert_eq!(existing.email, "william@example.com");
        assert_eq!(existing.gender, GenderOptions::Male);
        assert_eq!(existing.country_id, updated.country_id);
        assert!(!existing.receive_news_letters);
        assert_eq!(existing.tin.as_deref(), Some("123-45-6789"));
        assert!(existing.country.is_none());
    }

    #[test]
    fn test_text_renderings() {
        let person = sample("Smith");
        assert_eq!(person.date_of_birth_text().as_deref(), Some("1993-01-02"));
        assert_eq!(person.receive_news_letters_text(), "True");
    }

    #[test]
    fn test_joined_country_is_not_persisted() {
        let person = sample("Smith");
        let document = mongodb::bson::to_document(&person).unwrap();

        assert!(!document.contains_key("country"));
        assert_eq!(document.get_str("_id").unwrap(), person.id.to_string());
        assert_eq!(
            document.get_str("country_id").unwrap(),
            person.country_id.to_string()
        );
    }
}
