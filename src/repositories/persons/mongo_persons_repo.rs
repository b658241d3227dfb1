//! # MongoDB 인물 저장소
//!
//! `persons` 컬렉션에 인물 문서를 저장하고, 모든 조회는 `$lookup` 집계로
//! 참조 국가를 함께 적재합니다.
//!
//! ## 문서 형태
//!
//! ```text
//! {
//!   "_id": "b0a1...",               // UUID 문자열
//!   "name": "Marguerite",
//!   "email": "mwebsdale0@people.com.cn",
//!   "date_of_birth": "1989-08-28",  // 없으면 null
//!   "gender": "Female",
//!   "country_id": "000c...",        // countries._id
//!   "address": "4 Parkside Point",
//!   "receive_news_letters": false,
//!   "tin": null
//! }
//! ```
//!
//! ## 조회 파이프라인
//!
//! ```text
//! $match (PersonFilter → 쿼리 문서)
//!   → $lookup countries (country_id → _id) as country
//!   → $unwind country (국가가 없으면 유지)
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::persons::Person;
use crate::repositories::countries::COUNTRIES_COLLECTION;
use crate::repositories::persons::{PersonFilter, PersonsRepository};

pub const PERSONS_COLLECTION: &str = "persons";

pub struct MongoPersonsRepository {
    db: Arc<Database>,
}

impl MongoPersonsRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Person> {
        self.db.get_database().collection::<Person>(PERSONS_COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("name_unique".to_string())
                .build())
            .build();

        let country_index = IndexModel::builder()
            .keys(doc! { "country_id": 1 })
            .options(IndexOptions::builder()
                .name("country_id".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([name_index, country_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// `$match` 조건 뒤에 국가 조인을 붙여 실행합니다.
    async fn find_joined(&self, filter: Document) -> AppResult<Vec<Person>> {
        let cursor = self.collection()
            .aggregate(joined_pipeline(filter))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        documents
            .into_iter()
            .map(|document| {
                from_document::<Person>(document)
                    .map_err(|e| AppError::DatabaseError(format!("인물 문서 변환 실패: {}", e)))
            })
            .collect()
    }

    async fn find_joined_by_id(&self, id: Uuid) -> AppResult<Option<Person>> {
        Ok(self
            .find_joined(doc! { "_id": id.to_string() })
            .await?
            .into_iter()
            .next())
    }

    async fn ensure_country_exists(&self, country_id: Uuid) -> AppResult<()> {
        let found = self.db
            .get_database()
            .collection::<Document>(COUNTRIES_COLLECTION)
            .count_documents(doc! { "_id": country_id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if found == 0 {
            return Err(AppError::DatabaseError(format!(
                "FOREIGN KEY constraint failed: country {} does not exist",
                country_id
            )));
        }
        Ok(())
    }
}

fn joined_pipeline(filter: Document) -> Vec<Document> {
    vec![
        doc! { "$match": filter },
        doc! {
            "$lookup": {
                "from": COUNTRIES_COLLECTION,
                "localField": "country_id",
                "foreignField": "_id",
                "as": "country",
            }
        },
        doc! {
            "$unwind": {
                "path": "$country",
                "preserveNullAndEmptyArrays": true,
            }
        },
    ]
}

/// 검색 조건을 MongoDB 쿼리 문서로 변환합니다.
///
/// 부분 일치는 이스케이프한 정규식을 사용하므로 검색어의 특수 문자는 문자 그대로 비교됩니다.
pub fn filter_document(filter: &PersonFilter) -> Document {
    match filter {
        PersonFilter::NameEquals(name) => doc! { "name": name.as_str() },
        PersonFilter::NameContains(term) => doc! {
            "name": { "$regex": regex::escape(term), "$options": "i" }
        },
        PersonFilter::EmailContains(term) => doc! {
            "email": { "$regex": regex::escape(term), "$ne": "" }
        },
        PersonFilter::DateOfBirthContains(term) => doc! {
            "date_of_birth": { "$type": "string", "$regex": regex::escape(term) }
        },
        PersonFilter::AddressContains(term) => doc! {
            "address": { "$regex": regex::escape(term) }
        },
        PersonFilter::ReceiveNewsLettersEquals(text) => match text.as_str() {
            "True" => doc! { "receive_news_letters": true },
            "False" => doc! { "receive_news_letters": false },
            _ => doc! { "_id": { "$exists": false } },
        },
    }
}

#[async_trait]
impl PersonsRepository for MongoPersonsRepository {
    async fn add_person(&self, person: Person) -> AppResult<Person> {
        self.ensure_country_exists(person.country_id).await?;

        self.collection()
            .insert_one(&person)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.find_joined_by_id(person.id)
            .await?
            .ok_or_else(|| AppError::DatabaseError(format!("저장된 인물 {}을(를) 찾을 수 없습니다", person.id)))
    }

    async fn get_all_persons(&self) -> AppResult<Vec<Person>> {
        self.find_joined(doc! {}).await
    }

    async fn get_person_by_id(&self, id: Uuid) -> AppResult<Option<Person>> {
        self.find_joined_by_id(id).await
    }

    async fn get_filtered_persons(&self, filter: &PersonFilter) -> AppResult<Vec<Person>> {
        self.find_joined(filter_document(filter)).await
    }

    async fn update_person(&self, mut existing: Person, updated: &Person) -> AppResult<Person> {
        self.ensure_country_exists(updated.country_id).await?;

        let original_id = existing.id;
        existing.apply_update(updated);

        let result = self.collection()
            .replace_one(doc! { "_id": original_id.to_string() }, &existing)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::InvalidIdError(original_id.to_string()));
        }

        self.find_joined_by_id(existing.id)
            .await?
            .ok_or_else(|| AppError::DatabaseError(format!("수정된 인물 {}을(를) 찾을 수 없습니다", existing.id)))
    }

    async fn delete_person(&self, person: &Person) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": person.id.to_string() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_contains_is_case_insensitive_regex() {
        let document = filter_document(&PersonFilter::NameContains("a.b".to_string()));
        let name = document.get_document("name").unwrap();

        assert_eq!(name.get_str("$regex").unwrap(), r"a\.b");
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_email_filter_excludes_empty_email() {
        let document = filter_document(&PersonFilter::EmailContains("fake".to_string()));
        let email = document.get_document("email").unwrap();

        assert_eq!(email.get_str("$regex").unwrap(), "fake");
        assert_eq!(email.get_str("$ne").unwrap(), "");
        assert!(!email.contains_key("$options"));
    }

    #[test]
    fn test_news_letters_filter_maps_to_bool() {
        let document =
            filter_document(&PersonFilter::ReceiveNewsLettersEquals("True".to_string()));
        assert!(document.get_bool("receive_news_letters").unwrap());

        let document =
            filter_document(&PersonFilter::ReceiveNewsLettersEquals("yes".to_string()));
        assert!(!document.get_document("_id").unwrap().get_bool("$exists").unwrap());
    }

    #[test]
    fn test_pipeline_joins_countries() {
        let pipeline = joined_pipeline(doc! {});
        assert_eq!(pipeline.len(), 3);

        let lookup = pipeline[1].get_document("$lookup").unwrap();
        assert_eq!(lookup.get_str("from").unwrap(), COUNTRIES_COLLECTION);
        assert_eq!(lookup.get_str("localField").unwrap(), "country_id");
        assert_eq!(lookup.get_str("as").unwrap(), "country");
    }

    #[test]
    fn test_joined_document_deserializes_with_country() {
        let document = doc! {
            "_id": "b0a177b9-a3d3-40a1-a048-157bab19b727",
            "name": "Marguerite",
            "email": "marguerite@example.com",
            "date_of_birth": "1989-08-28",
            "gender": "Female",
            "country_id": "000c76eb-62e9-4465-96d1-2c41fdb64c3b",
            "address": "4 Parkside Point",
            "receive_news_letters": false,
            "tin": null,
            "country": {
                "_id": "000c76eb-62e9-4465-96d1-2c41fdb64c3b",
                "name": "Philippines",
            },
        };

        let person = from_document::<Person>(document).unwrap();
        assert_eq!(person.date_of_birth_text().as_deref(), Some("1989-08-28"));
        assert_eq!(person.country.map(|c| c.name).as_deref(), Some("Philippines"));
    }
}
