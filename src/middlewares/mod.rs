//! # Middlewares Module
//!
//! - [`ErrorLoggingMiddleware`] - 오류로 끝난 요청의 오류 종류와 메시지를 기록

pub mod error_logging;
mod error_logging_inner;

pub use error_logging::ErrorLoggingMiddleware;
