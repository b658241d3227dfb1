//! 인물 관련 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{PersonAddRequest, PersonUpdateRequest, PersonsIndexQuery};
pub use response::{search_fields, PersonResponse, PersonsIndexResponse, SearchFieldResponse};
