//! # Domain Entities Module
//!
//! 저장소에 영속되는 도메인 엔티티를 정의합니다.
//!
//! ## 엔티티 관계
//!
//! ```text
//! Country (1) ──< (N) Person
//!   _id  ◄────────── country_id
//! ```
//!
//! ## 공통 특징
//! - **식별자**: 서비스가 생성 시 `Uuid::new_v4()`로 할당, 호출자는 지정할 수 없음
//! - **BSON 매핑**: `_id`와 외래 키는 [`id_format`]으로 UUID 문자열로 저장
//! - **조인 필드**: `Person::country`는 조회 시 저장소가 채우며 저장되지 않음
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::{Country, Person};
//!
//! let country = Country::new(Uuid::new_v4(), "Norway");
//! let response = PersonResponse::from(person);
//! ```

pub mod countries;
pub mod id_format;
pub mod persons;

pub use countries::Country;
pub use persons::Person;
