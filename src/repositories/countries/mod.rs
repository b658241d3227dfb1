//! 국가 저장소: 계약과 MongoDB 구현

pub mod countries_repository;
pub mod mongo_countries_repo;

pub use countries_repository::CountriesRepository;
pub use mongo_countries_repo::{MongoCountriesRepository, COUNTRIES_COLLECTION};
