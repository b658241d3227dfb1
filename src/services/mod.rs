//! # Services Module
//!
//! 요청 검증과 비즈니스 규칙을 담당하는 애플리케이션 계층입니다.
//!
//! - [`countries::CountriesService`] - 국가 등록/조회, 이름 중복 검사
//! - [`persons::PersonsService`] - 인물 등록/조회/검색/정렬/수정/삭제
//!
//! 서비스는 호출 간 상태를 갖지 않으며, 저장소는 생성자로 주입합니다.
//!
//! ```rust,ignore
//! let countries_service = Arc::new(CountriesService::new(countries_repo));
//! let persons_service = Arc::new(PersonsService::new(persons_repo));
//! ```

pub mod countries;
pub mod persons;

pub use countries::CountriesService;
pub use persons::PersonsService;
