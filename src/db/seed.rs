//! 시드 데이터 적재
//!
//! `SEED_DATA_PATH`가 가리키는 JSON 파일의 국가/인물 레코드를 저장소에 넣습니다.
//! 컬렉션별로 비어 있을 때만 적재하므로 재시작해도 중복되지 않습니다.
//!
//! ```json
//! {
//!   "countries": [{ "id": "000c76eb-...", "name": "Philippines" }],
//!   "persons": [{
//!     "id": "c03bbe45-...", "name": "Marguerite", "email": "mwebsdale0@people.com.cn",
//!     "date_of_birth": "1989-08-28", "gender": "Female",
//!     "country_id": "000c76eb-...", "address": "4 Parkside Point",
//!     "receive_news_letters": false, "tin": null
//!   }]
//! }
//! ```

use std::fs;
use std::sync::Arc;
use chrono::NaiveDate;
use log::info;
use serde::Deserialize;
use uuid::Uuid;
use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::{Country, Person};
use crate::domain::enums::GenderOptions;
use crate::repositories::{CountriesRepository, PersonsRepository};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub countries: Vec<CountrySeed>,
    #[serde(default)]
    pub persons: Vec<PersonSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountrySeed {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonSeed {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: GenderOptions,
    pub country_id: Uuid,
    pub address: String,
    #[serde(default)]
    pub receive_news_letters: bool,
    #[serde(default)]
    pub tin: Option<String>,
}

impl From<CountrySeed> for Country {
    fn from(seed: CountrySeed) -> Self {
        Country::new(seed.id, seed.name)
    }
}

impl From<PersonSeed> for Person {
    fn from(seed: PersonSeed) -> Self {
        Person {
            id: seed.id,
            name: seed.name,
            email: seed.email,
            date_of_birth: seed.date_of_birth,
            gender: seed.gender,
            country_id: seed.country_id,
            address: seed.address,
            receive_news_letters: seed.receive_news_letters,
            tin: seed.tin,
            country: None,
        }
    }
}

/// 적재된 레코드 수 (이미 데이터가 있어 건너뛴 컬렉션은 0)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub countries: usize,
    pub persons: usize,
}

pub fn parse_seed(raw: &str) -> AppResult<SeedData> {
    serde_json::from_str(raw).context("시드 데이터 파싱 실패")
}

pub fn load_seed_file(path: &str) -> AppResult<SeedData> {
    let raw = fs::read_to_string(path).with_context(|| format!("시드 파일 읽기 실패: {}", path))?;
    parse_seed(&raw)
}

/// 비어 있는 컬렉션에만 시드 레코드를 넣습니다. 국가를 먼저 넣어 외래 키를 만족시킵니다.
pub async fn apply_seed(
    data: SeedData,
    countries_repo: &Arc<dyn CountriesRepository>,
    persons_repo: &Arc<dyn PersonsRepository>,
) -> AppResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    if countries_repo.count().await? == 0 {
        for seed in data.countries {
            countries_repo.add_country(Country::from(seed)).await?;
            summary.countries += 1;
        }
    } else {
        info!("countries 컬렉션에 데이터가 있어 시드를 건너뜁니다");
    }

    if persons_repo.count().await? == 0 {
        for seed in data.persons {
            persons_repo.add_person(Person::from(seed)).await?;
            summary.persons += 1;
        }
    } else {
        info!("persons 컬렉션에 데이터가 있어 시드를 건너뜁니다");
    }

    Ok(summary)
}
