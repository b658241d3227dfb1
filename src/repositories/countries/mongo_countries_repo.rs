//! # MongoDB 국가 저장소
//!
//! `countries` 컬렉션에 국가 문서를 저장합니다.
//!
//! ## 인덱스
//! - `name_unique`: 이름 unique 인덱스. 서비스의 중복 검사(check-then-act)를
//!   동시 요청이 동시에 통과하더라도 두 번째 쓰기는 여기서 거부됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::countries::Country;
use crate::repositories::countries::CountriesRepository;

pub const COUNTRIES_COLLECTION: &str = "countries";

pub struct MongoCountriesRepository {
    db: Arc<Database>,
}

impl MongoCountriesRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Country> {
        self.db.get_database().collection::<Country>(COUNTRIES_COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("name_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(name_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CountriesRepository for MongoCountriesRepository {
    async fn add_country(&self, country: Country) -> AppResult<Country> {
        self.collection()
            .insert_one(&country)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(country)
    }

    async fn get_all_countries(&self) -> AppResult<Vec<Country>> {
        let cursor = self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn get_country_by_id(&self, id: Uuid) -> AppResult<Option<Country>> {
        self.collection()
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn get_country_by_name(&self, name: &str) -> AppResult<Option<Country>> {
        self.collection()
            .find_one(doc! { "name": name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
