use std::sync::Arc;
use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::countries::Country;
use crate::repositories::countries::CountriesRepository;
use crate::repositories::memory::MemoryStore;

/// [`MemoryStore`] 기반 국가 저장소
///
/// MongoDB 구현의 unique 인덱스와 같이 이름 중복 저장을 거부합니다.
pub struct MemoryCountriesRepository {
    store: Arc<MemoryStore>,
}

impl MemoryCountriesRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CountriesRepository for MemoryCountriesRepository {
    async fn add_country(&self, country: Country) -> AppResult<Country> {
        let mut countries = self.store.countries_mut()?;

        if countries.iter().any(|existing| existing.name == country.name) {
            return Err(AppError::DatabaseError(format!(
                "UNIQUE constraint failed: countries.name = {}",
                country.name
            )));
        }

        countries.push(country.clone());
        Ok(country)
    }

    async fn get_all_countries(&self) -> AppResult<Vec<Country>> {
        Ok(self.store.countries()?.clone())
    }

    async fn get_country_by_id(&self, id: Uuid) -> AppResult<Option<Country>> {
        Ok(self
            .store
            .countries()?
            .iter()
            .find(|country| country.id == id)
            .cloned())
    }

    async fn get_country_by_name(&self, name: &str) -> AppResult<Option<Country>> {
        Ok(self
            .store
            .countries()?
            .iter()
            .find(|country| country.name == name)
            .cloned())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.store.countries()?.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_add_and_lookup() {
        let repo = MemoryCountriesRepository::new(Arc::new(MemoryStore::new()));
        let norway = repo
            .add_country(Country::new(Uuid::new_v4(), "Norway"))
            .await
            .unwrap();

        assert_eq!(repo.get_country_by_id(norway.id).await.unwrap(), Some(norway.clone()));
        assert_eq!(repo.get_country_by_name("Norway").await.unwrap(), Some(norway));
        assert_eq!(repo.get_country_by_name("norway").await.unwrap(), None);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_duplicate_name_is_rejected_by_store() {
        let repo = MemoryCountriesRepository::new(Arc::new(MemoryStore::new()));
        repo.add_country(Country::new(Uuid::new_v4(), "Japan"))
            .await
            .unwrap();

        let result = repo.add_country(Country::new(Uuid::new_v4(), "Japan")).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
