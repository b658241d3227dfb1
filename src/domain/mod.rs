//! # Domain Layer Module
//!
//! 인물(Person)과 국가(Country) 디렉터리의 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 엔티티 (Country, Person)
//! ├── enums     - GenderOptions, SortOrderOptions
//! └── dto       - 요청/응답 데이터 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! Handler ─ Request DTO ─► Service ─ Entity ─► Repository
//!                            │
//! Handler ◄ Response DTO ────┘
//! ```

pub mod dto;
pub mod entities;
pub mod enums;

pub use enums::{GenderOptions, SortOrderOptions};
