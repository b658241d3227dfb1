//! 인물 응답 DTO
//!
//! 저장된 [`Person`]을 호출자에게 돌려줄 형태로 투영합니다.
//! `country_name`은 조인된 국가에서, `age`는 조회 시점의 연도에서 계산하며
//! 어느 것도 저장되지 않습니다.

use std::fmt;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::dto::persons::request::PersonUpdateRequest;
use crate::domain::entities::persons::Person;
use crate::domain::enums::GenderOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: GenderOptions,
    pub country_id: Uuid,
    pub country_name: Option<String>,
    pub address: String,
    pub receive_news_letters: bool,
    pub tin: Option<String>,
    /// 현재 연도 - 출생 연도 (월/일은 고려하지 않음)
    pub age: Option<i32>,
}

impl PersonResponse {
    /// 기준 연도를 지정해 투영합니다.
    pub fn from_person_at_year(person: Person, current_year: i32) -> Self {
        let age = person
            .date_of_birth
            .map(|date_of_birth| current_year - date_of_birth.year());

        let Person {
            id,
            name,
            email,
            date_of_birth,
            gender,
            country_id,
            address,
            receive_news_letters,
            tin,
            country,
        } = person;

        Self {
            id,
            name,
            email,
            date_of_birth,
            gender,
            country_id,
            country_name: country.map(|country| country.name),
            address,
            receive_news_letters,
            tin,
            age,
        }
    }

    /// 수정 폼에 채울 요청으로 되돌립니다.
    pub fn to_person_update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            id: Some(self.id),
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            date_of_birth: self.date_of_birth,
            gender: Some(self.gender),
            country_id: Some(self.country_id),
            address: Some(self.address.clone()),
            receive_news_letters: self.receive_news_letters,
            tin: self.tin.clone(),
        }
    }
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self::from_person_at_year(person, Local::now().year())
    }
}

impl fmt::Display for PersonResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person ID: {}, Person Name: {}, Email: {}, Date of Birth: {}, Gender: {}, \
             Country ID: {}, Country: {}, Address: {}, Receive News Letters: {}",
            self.id,
            self.name,
            self.email,
            self.date_of_birth
                .map(|date| date.format("%d %b %Y").to_string())
                .unwrap_or_default(),
            self.gender,
            self.country_id,
            self.country_name.as_deref().unwrap_or_default(),
            self.address,
            self.receive_news_letters,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::countries::Country;

    fn person(date_of_birth: Option<NaiveDate>) -> Person {
        let country = Country::new(Uuid::new_v4(), "Norway");
        Person {
            id: Uuid::new_v4(),
            name: "Kevin".to_string(),
            email: "kevin@example.com".to_string(),
            date_of_birth,
            gender: GenderOptions::Male,
            country_id: country.id,
            address: "Oslo".to_string(),
            receive_news_letters: false,
            tin: None,
            country: Some(country),
        }
    }

    #[test]
    fn test_age_ignores_month_and_day() {
        let response =
            PersonResponse::from_person_at_year(person(NaiveDate::from_ymd_opt(2000, 12, 31)), 2024);
        assert_eq!(response.age, Some(24));

        let response =
            PersonResponse::from_person_at_year(person(NaiveDate::from_ymd_opt(2000, 1, 1)), 2024);
        assert_eq!(response.age, Some(24));
    }

    #[test]
    fn test_age_uses_current_year() {
        let response = PersonResponse::from(person(NaiveDate::from_ymd_opt(1990, 6, 15)));
        assert_eq!(response.age, Some(Local::now().year() - 1990));
    }

    #[test]
    fn test_missing_birth_date_has_no_age() {
        let response = PersonResponse::from(person(None));
        assert_eq!(response.age, None);
    }

    #[test]
    fn test_country_name_comes_from_joined_country() {
        let response = PersonResponse::from(person(None));
        assert_eq!(response.country_name.as_deref(), Some("Norway"));

        let mut unjoined = person(None);
        unjoined.country = None;
        assert_eq!(PersonResponse::from(unjoined).country_name, None);
    }

    #[test]
    fn test_update_request_round_trip_keeps_identity() {
        let original = person(NaiveDate::from_ymd_opt(1990, 6, 15));
        let response = PersonResponse::from(original.clone());
        let request = response.to_person_update_request();

        assert_eq!(request.id, Some(original.id));
        assert_eq!(request.name.as_deref(), Some("Kevin"));

        let rebuilt = request.to_person().unwrap();
        assert_eq!(rebuilt.id, original.id);
        assert_eq!(rebuilt.name, original.name);
        assert_eq!(rebuilt.country_id, original.country_id);
    }

    #[test]
    fn test_display_summary() {
        let response = PersonResponse::from(person(NaiveDate::from_ymd_opt(1990, 6, 15)));
        let text = response.to_string();

        assert!(text.contains("Person Name: Kevin"));
        assert!(text.contains("Date of Birth: 15 Jun 1990"));
        assert!(text.contains("Country: Norway"));
        assert!(text.contains("Receive News Letters: false"));
    }
}
