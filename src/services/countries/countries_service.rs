//! # 국가 서비스 구현
//!
//! 국가 등록과 조회를 담당합니다. 등록 시 이름 누락, 길이 제한, 이름 중복을
//! 순서대로 검사한 뒤 새 ID를 할당해 저장합니다.
//!
//! ## 오류 매핑
//!
//! | 상황 | 오류 |
//! |------|------|
//! | 요청 또는 이름 없음 | `ArgumentNullError` |
//! | 이름 20자 초과 | `ValidationError` |
//! | 같은 이름의 국가 존재 | `DuplicateNameError` |
//! | 저장소 장애 | `DatabaseError` (그대로 전파) |

use std::sync::Arc;
use log::{debug, info};
use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::countries::{CountryAddRequest, CountryResponse};
use crate::repositories::countries::CountriesRepository;
use crate::utils::validation::model_validation;

pub struct CountriesService {
    countries_repo: Arc<dyn CountriesRepository>,
}

impl CountriesService {
    pub fn new(countries_repo: Arc<dyn CountriesRepository>) -> Self {
        Self { countries_repo }
    }

    /// 새 국가를 등록합니다.
    ///
    /// 이름 비교는 대소문자를 구분하는 완전 일치입니다. 중복 검사와 저장 사이에는
    /// 잠금이 없으므로, 동시 요청의 최종 방어선은 저장소의 unique 제약입니다.
    pub async fn add_country(&self, request: Option<CountryAddRequest>) -> AppResult<CountryResponse> {
        let request = request
            .ok_or_else(|| AppError::ArgumentNullError("CountryAddRequest".to_string()))?;

        let name = request
            .name
            .as_deref()
            .ok_or_else(|| AppError::ArgumentNullError("Country name".to_string()))?;

        model_validation(&request)?;

        if self.countries_repo.get_country_by_name(name).await?.is_some() {
            return Err(AppError::DuplicateNameError(format!(
                "Given country name already exists: {}",
                name
            )));
        }

        let country = request.to_country(Uuid::new_v4());
        debug!("국가 등록: {} ({})", country.name, country.id);

        let saved = self.countries_repo.add_country(country).await?;
        Ok(CountryResponse::from(saved))
    }

    pub async fn get_all_countries(&self) -> AppResult<Vec<CountryResponse>> {
        info!("GetAllCountries of CountriesService");

        let countries = self.countries_repo.get_all_countries().await?;
        Ok(countries.into_iter().map(CountryResponse::from).collect())
    }

    /// ID가 없거나 일치하는 국가가 없으면 `Ok(None)`입니다.
    pub async fn get_country_by_id(&self, id: Option<Uuid>) -> AppResult<Option<CountryResponse>> {
        let Some(id) = id else {
            return Ok(None);
        };

        Ok(self
            .countries_repo
            .get_country_by_id(id)
            .await?
            .map(CountryResponse::from))
    }
}
