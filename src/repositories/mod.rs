//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스가 의존하는 저장소 계약(`CountriesRepository`, `PersonsRepository`)과
//! 두 가지 구현을 제공합니다.
//!
//! | 구현 | 용도 |
//! |------|------|
//! | `MongoCountriesRepository` / `MongoPersonsRepository` | 운영 (MongoDB) |
//! | `MemoryCountriesRepository` / `MemoryPersonsRepository` | 개발 프로필, 테스트 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{memory::*, CountriesRepository, PersonsRepository};
//!
//! let store = Arc::new(MemoryStore::new());
//! let countries: Arc<dyn CountriesRepository> = Arc::new(MemoryCountriesRepository::new(store.clone()));
//! let persons: Arc<dyn PersonsRepository> = Arc::new(MemoryPersonsRepository::new(store));
//! ```

pub mod countries;
pub mod memory;
pub mod persons;

pub use countries::CountriesRepository;
pub use persons::{PersonFilter, PersonsRepository};
