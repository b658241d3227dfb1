//! 국가 관련 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::CountryAddRequest;
pub use response::CountryResponse;
