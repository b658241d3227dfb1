use std::sync::Arc;
use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::persons::Person;
use crate::repositories::memory::MemoryStore;
use crate::repositories::persons::{PersonFilter, PersonsRepository};

/// [`MemoryStore`] 기반 인물 저장소
///
/// 삽입 순서를 유지하며, 조회 결과에는 참조 국가가 채워집니다.
pub struct MemoryPersonsRepository {
    store: Arc<MemoryStore>,
}

impl MemoryPersonsRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn ensure_unique_name(persons: &[Person], name: &str, except: Option<Uuid>) -> AppResult<()> {
        let taken = persons
            .iter()
            .any(|person| person.name == name && Some(person.id) != except);

        if taken {
            return Err(AppError::DatabaseError(format!(
                "UNIQUE constraint failed: persons.name = {}",
                name
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl PersonsRepository for MemoryPersonsRepository {
    async fn add_person(&self, mut person: Person) -> AppResult<Person> {
        self.store.ensure_country_exists(person.country_id)?;

        person.country = None;
        {
            let mut persons = self.store.persons_mut()?;
            Self::ensure_unique_name(&persons, &person.name, None)?;
            persons.push(person.clone());
        }

        let mut joined = self.store.join_countries(vec![person])?;
        joined
            .pop()
            .ok_or_else(|| AppError::InternalError("저장된 인물을 찾을 수 없습니다".to_string()))
    }

    async fn get_all_persons(&self) -> AppResult<Vec<Person>> {
        let persons = self.store.persons()?.clone();
        self.store.join_countries(persons)
    }

    async fn get_person_by_id(&self, id: Uuid) -> AppResult<Option<Person>> {
        let found: Vec<Person> = self
            .store
            .persons()?
            .iter()
            .filter(|person| person.id == id)
            .cloned()
            .collect();

        Ok(self.store.join_countries(found)?.into_iter().next())
    }

    async fn get_filtered_persons(&self, filter: &PersonFilter) -> AppResult<Vec<Person>> {
        let matched: Vec<Person> = self
            .store
            .persons()?
            .iter()
            .filter(|person| filter.matches(person))
            .cloned()
            .collect();

        self.store.join_countries(matched)
    }

    async fn update_person(&self, existing: Person, updated: &Person) -> AppResult<Person> {
        self.store.ensure_country_exists(updated.country_id)?;

        let saved = {
            let mut persons = self.store.persons_mut()?;
            Self::ensure_unique_name(&persons, &updated.name, Some(existing.id))?;

            let stored = persons
                .iter_mut()
                .find(|person| person.id == existing.id)
                .ok_or_else(|| AppError::InvalidIdError(existing.id.to_string()))?;

            stored.apply_update(updated);
            stored.clone()
        };

        let mut joined = self.store.join_countries(vec![saved])?;
        joined
            .pop()
            .ok_or_else(|| AppError::InternalError("수정된 인물을 찾을 수 없습니다".to_string()))
    }

    async fn delete_person(&self, person: &Person) -> AppResult<bool> {
        let mut persons = self.store.persons_mut()?;
        let before = persons.len();
        persons.retain(|stored| stored.id != person.id);
        Ok(persons.len() < before)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.store.persons()?.len() as u64)
    }
}
