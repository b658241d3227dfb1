//! # 인물 서비스 구현
//!
//! 인물의 등록, 조회, 검색, 정렬, 수정, 삭제를 담당하는 핵심 비즈니스 로직입니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! Handler ─► PersonsService ─► PersonsRepository
//!              │ 1. null 검사 (ArgumentNullError)
//!              │ 2. model_validation (ValidationError)
//!              │ 3. 비즈니스 규칙 (DuplicateNameError, InvalidIdError)
//!              │ 4. 저장소 호출 (DatabaseError는 그대로 전파)
//!              ▼
//!          PersonResponse (국가 이름, 나이 계산 포함)
//! ```
//!
//! ## 조회 의미
//!
//! - `get_person_by_id`, `delete_person`: 없는 ID는 오류가 아니라 `None` / `false`
//! - `update_person`: 없는 ID는 `InvalidIdError`, 다른 인물의 이름으로 바꾸면 `DuplicateNameError`
//! - `get_searched_persons`: 검색어나 검색 필드가 비어 있으면 전체 목록,
//!   알 수 없는 검색 필드는 빈 목록
//! - `get_sorted_persons`: 저장소를 호출하지 않는 동기 변환이며 안정 정렬

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;
use log::{debug, info};
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::persons::{PersonAddRequest, PersonResponse, PersonUpdateRequest};
use crate::domain::enums::SortOrderOptions;
use crate::repositories::persons::{PersonFilter, PersonsRepository};
use crate::utils::validation::model_validation;

pub struct PersonsService {
    persons_repo: Arc<dyn PersonsRepository>,
}

impl PersonsService {
    pub fn new(persons_repo: Arc<dyn PersonsRepository>) -> Self {
        Self { persons_repo }
    }

    /// 새 인물을 등록합니다.
    ///
    /// # 오류
    ///
    /// * `ArgumentNullError` - 요청이 없거나 이름이 비어 있음
    /// * `ValidationError` - 선언된 필드 제약 위반 (첫 번째 위반 메시지)
    /// * `DuplicateNameError` - 같은 이름의 인물이 이미 존재
    pub async fn add_person(&self, request: Option<PersonAddRequest>) -> AppResult<PersonResponse> {
        let request = request
            .ok_or_else(|| AppError::ArgumentNullError("PersonAddRequest".to_string()))?;

        if request.is_name_missing() {
            return Err(AppError::ArgumentNullError("Person name".to_string()));
        }

        model_validation(&request)?;

        let name = request.name.clone().unwrap_or_default();
        let same_name = self
            .persons_repo
            .get_filtered_persons(&PersonFilter::NameEquals(name.clone()))
            .await?;

        if !same_name.is_empty() {
            return Err(AppError::DuplicateNameError(format!(
                "Given person name already exists: {}",
                name
            )));
        }

        let person = request.to_person(Uuid::new_v4())?;
        debug!("인물 등록: {} ({})", person.name, person.id);

        let saved = self.persons_repo.add_person(person).await?;
        Ok(PersonResponse::from(saved))
    }

    pub async fn get_all_persons(&self) -> AppResult<Vec<PersonResponse>> {
        info!("GetAllPersons of PersonsService");

        let started = Instant::now();
        let persons = self.persons_repo.get_all_persons().await?;
        info!("Time for GetAllPersons from Database: {:?}", started.elapsed());

        Ok(persons.into_iter().map(PersonResponse::from).collect())
    }

    /// ID가 없거나 일치하는 인물이 없으면 `Ok(None)`입니다.
    pub async fn get_person_by_id(&self, id: Option<Uuid>) -> AppResult<Option<PersonResponse>> {
        let Some(id) = id else {
            return Ok(None);
        };

        Ok(self
            .persons_repo
            .get_person_by_id(id)
            .await?
            .map(PersonResponse::from))
    }

    /// 검색 필드에 따라 인물을 필터링합니다.
    ///
    /// | `search_by` | 조건 |
    /// |-------------|------|
    /// | `Name` | 부분 일치, 대소문자 무시 |
    /// | `Email` | 부분 일치, 빈 이메일 제외 |
    /// | `DateOfBirth` | `YYYY-MM-DD` 표기 부분 일치 |
    /// | `Address` | 부분 일치 |
    /// | `ReceiveNewsLetters` | `True` / `False` 완전 일치 |
    pub async fn get_searched_persons(
        &self,
        search_by: &str,
        search_string: Option<&str>,
    ) -> AppResult<Vec<PersonResponse>> {
        info!("GetSearchedPersons of PersonsService");
        debug!("search_by: {}, search_string: {:?}", search_by, search_string);

        let term = match search_string {
            Some(term) if !term.is_empty() && !search_by.is_empty() => term.to_string(),
            _ => return self.get_all_persons().await,
        };

        let filter = match search_by {
            "Name" => PersonFilter::NameContains(term),
            "Email" => PersonFilter::EmailContains(term),
            "DateOfBirth" => PersonFilter::DateOfBirthContains(term),
            "Address" => PersonFilter::AddressContains(term),
            "ReceiveNewsLetters" => PersonFilter::ReceiveNewsLettersEquals(term),
            _ => {
                debug!("알 수 없는 검색 필드: {}", search_by);
                return Ok(Vec::new());
            }
        };

        let started = Instant::now();
        let persons = self.persons_repo.get_filtered_persons(&filter).await?;
        info!("Time for GetFilteredPersons from Database: {:?}", started.elapsed());

        Ok(persons.into_iter().map(PersonResponse::from).collect())
    }

    /// 이미 조회한 목록을 정렬합니다.
    ///
    /// 문자열 필드는 대소문자를 무시하고 비교하며, 같은 값끼리는 원래 순서를
    /// 유지합니다. 알 수 없는 정렬 필드는 목록을 그대로 반환합니다.
    pub fn get_sorted_persons(
        &self,
        mut all_persons: Vec<PersonResponse>,
        sort_by: &str,
        sort_order: SortOrderOptions,
    ) -> Vec<PersonResponse> {
        info!("GetSortedPersons of PersonsService");
        debug!("sort_by: {}, sort_order: {}", sort_by, sort_order);

        let compare: fn(&PersonResponse, &PersonResponse) -> Ordering = match sort_by {
            "Name" => |a, b| compare_ignore_case(&a.name, &b.name),
            "Email" => |a, b| compare_ignore_case(&a.email, &b.email),
            "DateOfBirth" => |a, b| a.date_of_birth.cmp(&b.date_of_birth),
            "Age" => |a, b| a.age.cmp(&b.age),
            "Gender" => |a, b| compare_ignore_case(a.gender.as_str(), b.gender.as_str()),
            "CountryName" => |a, b| {
                compare_optional_ignore_case(a.country_name.as_deref(), b.country_name.as_deref())
            },
            "Address" => |a, b| compare_ignore_case(&a.address, &b.address),
            "ReceiveNewsLetters" => |a, b| a.receive_news_letters.cmp(&b.receive_news_letters),
            _ => return all_persons,
        };

        match sort_order {
            SortOrderOptions::Asc => all_persons.sort_by(compare),
            SortOrderOptions::Desc => all_persons.sort_by(|a, b| compare(b, a)),
        }

        all_persons
    }

    /// 기존 인물의 모든 값을 요청 값으로 덮어씁니다.
    ///
    /// # 오류
    ///
    /// * `ArgumentNullError` - 요청이 없거나 이름이 비어 있음
    /// * `ValidationError` - 필드 제약 위반
    /// * `InvalidIdError` - 요청 ID와 일치하는 인물이 없음
    /// * `DuplicateNameError` - 다른 인물이 이미 같은 이름을 사용
    pub async fn update_person(&self, request: Option<PersonUpdateRequest>) -> AppResult<PersonResponse> {
        let request = request
            .ok_or_else(|| AppError::ArgumentNullError("PersonUpdateRequest".to_string()))?;

        if request.is_name_missing() {
            return Err(AppError::ArgumentNullError("Person name".to_string()));
        }

        model_validation(&request)?;

        let updated = request.to_person()?;
        let existing = self
            .persons_repo
            .get_person_by_id(updated.id)
            .await?
            .ok_or_else(|| {
                AppError::InvalidIdError(format!("Given person id doesn't exist: {}", updated.id))
            })?;

        let same_name = self
            .persons_repo
            .get_filtered_persons(&PersonFilter::NameEquals(updated.name.clone()))
            .await?;

        if same_name.iter().any(|person| person.id != updated.id) {
            return Err(AppError::DuplicateNameError(format!(
                "Given person name already exists: {}",
                updated.name
            )));
        }

        let saved = self.persons_repo.update_person(existing, &updated).await?;
        Ok(PersonResponse::from(saved))
    }

    /// 인물을 삭제합니다. 일치하는 인물이 없으면 `Ok(false)`입니다.
    pub async fn delete_person(&self, id: Option<Uuid>) -> AppResult<bool> {
        let id = id.ok_or_else(|| AppError::ArgumentNullError("Person id".to_string()))?;

        let Some(person) = self.persons_repo.get_person_by_id(id).await? else {
            return Ok(false);
        };

        self.persons_repo.delete_person(&person).await
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}

fn compare_optional_ignore_case(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_ignore_case(a, b),
        _ => a.is_some().cmp(&b.is_some()),
    }
}
