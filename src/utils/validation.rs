//! 요청 모델 검증 헬퍼
//!
//! `validator::Validate`를 구현한 요청 DTO를 검증하고, 실패 시 첫 번째 위반
//! 메시지 하나만 담은 [`AppError::ValidationError`]를 반환합니다.
//!
//! `validator`는 필드별 오류를 해시맵으로 모으기 때문에 순서가 보장되지 않습니다.
//! 요청 타입은 [`FieldOrder`]로 선언 순서를 노출하고, 헬퍼는 그 순서대로
//! 첫 번째 실패 필드를 고릅니다.
//!
//! # 예제
//!
//! ```rust,ignore
//! use crate::utils::validation::model_validation;
//!
//! model_validation(&person_add_request)?;
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};
use crate::core::errors::{AppError, AppResult};

/// 공백만으로 이루어진 문자열을 거부하는 패턴
pub static NOT_BLANK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S").expect("NOT_BLANK_REGEX is a valid pattern")
});

/// 납세자 식별번호(TIN) 형식 `NNN-NN-NNNN`
pub static TIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}-[0-9]{2}-[0-9]{4}$").expect("TIN_REGEX is a valid pattern")
});

/// 검증 오류를 보고할 필드 순서
pub trait FieldOrder {
    const FIELD_ORDER: &'static [&'static str];
}

/// 요청 객체를 검증합니다.
///
/// # Errors
///
/// 선언된 제약 중 하나라도 위반되면 첫 번째 위반의 메시지를 담은
/// `AppError::ValidationError`
pub fn model_validation<T>(model: &T) -> AppResult<()>
where
    T: Validate + FieldOrder,
{
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(AppError::ValidationError(first_error_message(
            &errors,
            T::FIELD_ORDER,
        ))),
    }
}

fn first_error_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    let mut failed: Vec<(&str, &Vec<ValidationError>)> = field_errors
        .iter()
        .map(|(name, list)| {
            let name: &str = name.as_ref();
            (name, *list)
        })
        .collect();

    failed.sort_by_key(|(name, _)| {
        let position = field_order
            .iter()
            .position(|field| *field == *name)
            .unwrap_or(field_order.len());
        (position, name.to_string())
    });

    failed
        .into_iter()
        .find_map(|(name, list)| list.first().map(|error| describe(name, error)))
        .unwrap_or_else(|| "Validation failed".to_string())
}

fn describe(field: &str, error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("{} is invalid ({})", field, error.code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(required(message = "Title can't be empty"))]
        #[validate(length(max = 5, message = "Title is too long"))]
        title: Option<String>,

        #[validate(range(min = 1, message = "Count must be positive"))]
        count: i32,

        #[validate(required)]
        code: Option<String>,
    }

    impl FieldOrder for Sample {
        const FIELD_ORDER: &'static [&'static str] = &["title", "count", "code"];
    }

    #[test]
    fn test_valid_model_passes() {
        let sample = Sample {
            title: Some("abc".to_string()),
            count: 1,
            code: Some("x".to_string()),
        };
        assert!(model_validation(&sample).is_ok());
    }

    #[test]
    fn test_first_failure_follows_field_order() {
        let sample = Sample {
            title: None,
            count: 0,
            code: None,
        };

        match model_validation(&sample) {
            Err(AppError::ValidationError(message)) => {
                assert_eq!(message, "Title can't be empty");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let sample = Sample {
            title: Some("abc".to_string()),
            count: 0,
            code: None,
        };

        match model_validation(&sample) {
            Err(AppError::ValidationError(message)) => {
                assert_eq!(message, "Count must be positive");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_message_falls_back_to_field_and_code() {
        let sample = Sample {
            title: Some("abc".to_string()),
            count: 3,
            code: None,
        };

        match model_validation(&sample) {
            Err(AppError::ValidationError(message)) => {
                assert_eq!(message, "code is invalid (required)");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_patterns() {
        assert!(TIN_REGEX.is_match("123-45-6789"));
        assert!(!TIN_REGEX.is_match("123456789"));
        assert!(!TIN_REGEX.is_match("12-345-6789"));
        assert!(NOT_BLANK_REGEX.is_match(" a "));
        assert!(!NOT_BLANK_REGEX.is_match("   "));
    }
}
