//! # Data Transfer Objects (DTO) Module
//!
//! 서비스 경계에서 주고받는 요청/응답 데이터 구조를 정의합니다.
//! 프레임워크 타입에 의존하지 않는 평범한 데이터 형태이며, HTTP 핸들러는
//! 이를 JSON으로 직렬화할 뿐입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── countries/
//! │   ├── request/        # CountryAddRequest
//! │   └── response/       # CountryResponse
//! └── persons/
//!     ├── request/        # PersonAddRequest, PersonUpdateRequest, PersonsIndexQuery
//!     └── response/       # PersonResponse, PersonsIndexResponse
//! ```
//!
//! ## 설계 원칙
//!
//! ### 누락 가능한 입력
//! 요청의 필수 항목도 `Option`으로 받습니다. 누락된 값은 역직렬화 단계에서
//! 거부되지 않고 서비스의 null 검사와 [`model_validation`](crate::utils::validation::model_validation)이
//! 구체적인 메시지로 보고합니다.
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
//! pub struct CountryAddRequest {
//!     #[validate(length(max = 20, message = "Country 'Name' can't exceed 20 characters"))]
//!     pub name: Option<String>,
//! }
//! ```
//!
//! ### 투영 (Projection)
//! - Entity → Response: `From` 구현 (`PersonResponse`는 국가 이름과 나이 계산 포함)
//! - Request → Entity: 서비스가 할당한 ID를 받아 `to_country` / `to_person`
//! - Response → Request: `PersonResponse::to_person_update_request`

pub mod countries;
pub mod persons;

pub use countries::{CountryAddRequest, CountryResponse};
pub use persons::{
    search_fields, PersonAddRequest, PersonResponse, PersonUpdateRequest, PersonsIndexQuery,
    PersonsIndexResponse, SearchFieldResponse,
};
