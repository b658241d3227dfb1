//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`validation`] - 요청 DTO 검증 헬퍼 (첫 번째 위반 메시지 반환)
//! - [`display_terminal`] - 서버 기동 단계 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::validation::model_validation;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! model_validation(&request)?;
//! print_boxed_title("Persons Directory");
//! ```

pub mod display_terminal;
pub mod validation;
