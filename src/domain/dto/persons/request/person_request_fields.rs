//! 인물 추가/수정 요청의 공통 필드 선언
//!
//! 두 요청은 같은 필드, 같은 제약, 같은 메시지를 가져야 합니다.
//! `person_request!`가 공통 필드와 [`FieldOrder`](crate::utils::validation::FieldOrder),
//! `is_name_missing`, 엔티티 변환을 한 번에 생성하고, 호출 측은 앞에 붙일
//! 식별 필드와 그 검증 순서만 넘깁니다.
//!
//! ```rust,ignore
//! person_request! {
//!     /// 기존 인물 수정 요청
//!     pub struct PersonUpdateRequest {
//!         #[validate(required(message = "Person 'ID' can't be blank"))]
//!         pub id: Option<Uuid>,
//!     }
//!     leading_fields = ["id"]
//! }
//! ```

use crate::core::errors::{AppError, AppResult};

macro_rules! person_request {
    (
        $(#[$($meta:tt)*])*
        pub struct $name:ident { $($leading:tt)* }
        leading_fields = [$($leading_field:literal),* $(,)?]
    ) => {
        $(#[$($meta)*])*
        #[derive(
            Debug, Clone, Default, PartialEq,
            ::serde::Serialize, ::serde::Deserialize, ::validator::Validate
        )]
        pub struct $name {
            $($leading)*

            #[validate(required(message = "Person 'Name' can't be empty"))]
            #[validate(regex(path = *crate::utils::validation::NOT_BLANK_REGEX, message = "Person 'Name' can't be empty"))]
            #[validate(length(max = 30, message = "Person 'Name' can't exceed 30 characters"))]
            pub name: Option<String>,

            #[validate(required(message = "'Email' can't be blank"))]
            #[validate(regex(path = *crate::utils::validation::NOT_BLANK_REGEX, message = "'Email' can't be blank"))]
            #[validate(length(max = 50, message = "'Email' can't exceed 50 characters"))]
            #[validate(email(message = "'Email' value should be a valid email"))]
            pub email: Option<String>,

            #[serde(default)]
            pub date_of_birth: Option<::chrono::NaiveDate>,

            #[validate(required(message = "Please select gender of the person"))]
            pub gender: Option<crate::domain::enums::GenderOptions>,

            #[validate(required(message = "Please select a country"))]
            pub country_id: Option<::uuid::Uuid>,

            #[validate(required(message = "'Address' can't be blank"))]
            #[validate(regex(path = *crate::utils::validation::NOT_BLANK_REGEX, message = "'Address' can't be blank"))]
            #[validate(length(max = 200, message = "'Address' can't exceed 200 characters"))]
            pub address: Option<String>,

            #[serde(default)]
            pub receive_news_letters: bool,

            #[validate(length(equal = 11, message = "'TIN' should be 11 characters long"))]
            #[validate(regex(path = *crate::utils::validation::TIN_REGEX, message = "'TIN' should be in the format NNN-NN-NNNN"))]
            pub tin: Option<String>,
        }

        impl crate::utils::validation::FieldOrder for $name {
            const FIELD_ORDER: &'static [&'static str] = &[
                $($leading_field,)*
                "name",
                "email",
                "date_of_birth",
                "gender",
                "country_id",
                "address",
                "receive_news_letters",
                "tin",
            ];
        }

        impl $name {
            /// 이름이 없거나 빈 문자열인지 확인합니다.
            pub fn is_name_missing(&self) -> bool {
                self.name.as_deref().is_none_or(str::is_empty)
            }

            /// 공통 필드로 인물 엔티티를 만듭니다. 필수 항목이 비어 있으면 `ArgumentNullError`입니다.
            fn person_with_id(
                &self,
                id: ::uuid::Uuid,
            ) -> crate::core::errors::AppResult<crate::domain::entities::persons::Person> {
                use crate::domain::dto::persons::request::person_request_fields::{required, required_value};

                Ok(crate::domain::entities::persons::Person {
                    id,
                    name: required(&self.name, "name")?,
                    email: required(&self.email, "email")?,
                    date_of_birth: self.date_of_birth,
                    gender: required_value(self.gender, "gender")?,
                    country_id: required_value(self.country_id, "country_id")?,
                    address: required(&self.address, "address")?,
                    receive_news_letters: self.receive_news_letters,
                    tin: self.tin.clone(),
                    country: None,
                })
            }
        }
    };
}

pub(super) fn required(value: &Option<String>, field: &str) -> AppResult<String> {
    value
        .clone()
        .ok_or_else(|| AppError::ArgumentNullError(field.to_string()))
}

pub(super) fn required_value<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::ArgumentNullError(field.to_string()))
}
