//! 프로세스 내 저장소
//!
//! 개발 프로필과 테스트에서 MongoDB 대신 사용하는 공유 저장 공간입니다.
//! 국가와 인물 저장소가 같은 [`MemoryStore`]를 공유해야 외래 키 검사와
//! 국가 조인이 동작합니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Country, Person};

#[derive(Debug, Default)]
pub struct MemoryStore {
    countries: RwLock<Vec<Country>>,
    persons: RwLock<Vec<Person>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn countries(&self) -> AppResult<RwLockReadGuard<'_, Vec<Country>>> {
        self.countries.read().map_err(|_| poisoned("countries"))
    }

    pub(crate) fn countries_mut(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Country>>> {
        self.countries.write().map_err(|_| poisoned("countries"))
    }

    pub(crate) fn persons(&self) -> AppResult<RwLockReadGuard<'_, Vec<Person>>> {
        self.persons.read().map_err(|_| poisoned("persons"))
    }

    pub(crate) fn persons_mut(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Person>>> {
        self.persons.write().map_err(|_| poisoned("persons"))
    }

    /// 인물 목록에 참조 국가를 채웁니다.
    pub(crate) fn join_countries(&self, mut persons: Vec<Person>) -> AppResult<Vec<Person>> {
        let countries = self.countries()?;
        for person in persons.iter_mut() {
            person.country = countries
                .iter()
                .find(|country| country.id == person.country_id)
                .cloned();
        }
        Ok(persons)
    }

    pub(crate) fn ensure_country_exists(&self, country_id: Uuid) -> AppResult<()> {
        if self.countries()?.iter().any(|country| country.id == country_id) {
            Ok(())
        } else {
            Err(AppError::DatabaseError(format!(
                "FOREIGN KEY constraint failed: country {} does not exist",
                country_id
            )))
        }
    }
}

fn poisoned(collection: &str) -> AppError {
    AppError::InternalError(format!("{} 저장소 잠금이 손상되었습니다", collection))
}
