//! 인물 저장소: 계약, 검색 조건, MongoDB 구현

pub mod mongo_persons_repo;
pub mod person_filter;
pub mod persons_repository;

pub use mongo_persons_repo::{MongoPersonsRepository, PERSONS_COLLECTION};
pub use person_filter::PersonFilter;
pub use persons_repository::PersonsRepository;
