//! # HTTP Handlers Module
//!
//! 서비스 연산을 JSON HTTP 엔드포인트로 노출합니다. 핸들러는 요청을 추출해
//! 서비스에 넘기고, 결과를 상태 코드와 함께 직렬화하는 일만 합니다.
//! 서비스는 `web::Data<CountriesService>` / `web::Data<PersonsService>`로 주입됩니다.
//!
//! | 메서드 | 경로 | 핸들러 | 성공 |
//! |--------|------|--------|------|
//! | GET | `/api/v1/countries` | [`countries::list_countries`] | 200 |
//! | POST | `/api/v1/countries` | [`countries::create_country`] | 201 |
//! | GET | `/api/v1/countries/{id}` | [`countries::get_country`] | 200 / 404 |
//! | GET | `/api/v1/persons` | [`persons::list_persons`] | 200 |
//! | GET | `/api/v1/persons/search-fields` | [`persons::list_search_fields`] | 200 |
//! | POST | `/api/v1/persons` | [`persons::create_person`] | 201 |
//! | GET | `/api/v1/persons/{id}` | [`persons::get_person`] | 200 / 404 |
//! | PUT | `/api/v1/persons/{id}` | [`persons::update_person`] | 200 |
//! | DELETE | `/api/v1/persons/{id}` | [`persons::delete_person`] | 204 / 404 |
//!
//! 오류는 [`AppError`](crate::core::errors::AppError)의 `ResponseError` 구현이
//! `{"error": "..."}` 본문으로 변환합니다.

pub mod countries;
pub mod persons;
