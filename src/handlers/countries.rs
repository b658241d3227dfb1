//! 국가 HTTP 핸들러
//!
//! `/api/v1/countries` 스코프에 등록됩니다.

use actix_web::{web, HttpResponse, get, post};
use uuid::Uuid;
use crate::core::errors::AppError;
use crate::domain::dto::countries::CountryAddRequest;
use crate::services::countries::CountriesService;

#[get("")]
pub async fn list_countries(
    service: web::Data<CountriesService>,
) -> Result<HttpResponse, AppError> {
    let countries = service.get_all_countries().await?;

    Ok(HttpResponse::Ok().json(countries))
}

#[post("")]
pub async fn create_country(
    service: web::Data<CountriesService>,
    payload: web::Json<CountryAddRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.add_country(Some(payload.into_inner())).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("/{country_id}")]
pub async fn get_country(
    service: web::Data<CountriesService>,
    country_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let country_id = country_id.into_inner();
    let country = service
        .get_country_by_id(Some(country_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("국가를 찾을 수 없습니다: {}", country_id)))?;

    Ok(HttpResponse::Ok().json(country))
}
