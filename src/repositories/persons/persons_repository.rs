//! 인물 저장소 계약

use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::AppResult;
use crate::domain::entities::persons::Person;
use crate::repositories::persons::person_filter::PersonFilter;

/// 인물 영속성 인터페이스
///
/// 조회 메서드가 반환하는 모든 [`Person`]은 참조하는 국가가 `country`에
/// 채워진 상태입니다 (eager join). 국가가 존재하지 않으면 `None`입니다.
#[async_trait]
pub trait PersonsRepository: Send + Sync {
    /// 인물을 저장합니다. 참조하는 국가가 없으면 저장소 오류입니다.
    async fn add_person(&self, person: Person) -> AppResult<Person>;

    async fn get_all_persons(&self) -> AppResult<Vec<Person>>;

    async fn get_person_by_id(&self, id: Uuid) -> AppResult<Option<Person>>;

    async fn get_filtered_persons(&self, filter: &PersonFilter) -> AppResult<Vec<Person>>;

    /// `existing`을 `updated`의 값으로 덮어쓰고 저장된 결과를 반환합니다.
    async fn update_person(&self, existing: Person, updated: &Person) -> AppResult<Person>;

    /// 삭제된 레코드가 있으면 `true`
    async fn delete_person(&self, person: &Person) -> AppResult<bool>;

    async fn count(&self) -> AppResult<u64>;
}
