//! 인물 디렉터리 서비스
//!
//! 인물(Person)과 국가(Country) 레코드를 관리하는 JSON REST 백엔드입니다.
//! 인물은 하나의 국가를 참조하며, 검색/정렬과 입력 검증, 이름 중복 검사를 제공합니다.
//!
//! # Features
//!
//! - **국가 관리**: 등록, 목록, ID 조회 (이름 unique)
//! - **인물 관리**: 등록, 조회, 필드별 검색, 8개 필드 정렬, 수정, 삭제
//! - **입력 검증**: `validator` 기반, 첫 번째 위반 메시지만 보고
//! - **저장소 선택**: MongoDB (운영) 또는 인메모리 (개발/테스트)
//! - **시드 데이터**: 시작 시 JSON 파일에서 초기 레코드 적재
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/api/v1)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 비즈니스 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 저장소 계약 (async trait)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB │ Memory│ ← 저장소 구현
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use persons_directory::repositories::memory::*;
//! use persons_directory::services::{CountriesService, PersonsService};
//!
//! let store = Arc::new(MemoryStore::new());
//! let countries = CountriesService::new(Arc::new(MemoryCountriesRepository::new(store.clone())));
//! let persons = PersonsService::new(Arc::new(MemoryPersonsRepository::new(store)));
//!
//! let norway = countries.add_country(Some(CountryAddRequest::new("Norway"))).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
