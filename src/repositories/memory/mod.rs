//! 인메모리 저장소 구현 (개발 프로필, 테스트)

pub mod memory_countries_repo;
pub mod memory_persons_repo;
pub mod memory_store;

pub use memory_countries_repo::MemoryCountriesRepository;
pub use memory_persons_repo::MemoryPersonsRepository;
pub use memory_store::MemoryStore;
