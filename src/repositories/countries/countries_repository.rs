//! 국가 저장소 계약

use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::AppResult;
use crate::domain::entities::countries::Country;

/// 국가 영속성 인터페이스
///
/// 서비스는 구현체를 `Arc<dyn CountriesRepository>`로 주입받습니다.
/// 저장소 장애는 `AppError::DatabaseError`로 보고되며 서비스가 그대로 전파합니다.
#[async_trait]
pub trait CountriesRepository: Send + Sync {
    /// 국가를 저장하고 저장된 값을 반환합니다.
    async fn add_country(&self, country: Country) -> AppResult<Country>;

    async fn get_all_countries(&self) -> AppResult<Vec<Country>>;

    async fn get_country_by_id(&self, id: Uuid) -> AppResult<Option<Country>>;

    /// 이름이 정확히(대소문자 구분) 일치하는 국가를 찾습니다.
    async fn get_country_by_name(&self, name: &str) -> AppResult<Option<Country>>;

    async fn count(&self) -> AppResult<u64>;
}
