//! 인물 수정 요청 DTO
//!
//! [`PersonAddRequest`](super::PersonAddRequest)와 같은 제약에 대상 인물의 `id`를 더합니다.

use uuid::Uuid;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::persons::Person;

person_request! {
    /// 기존 인물 수정 요청
    pub struct PersonUpdateRequest {
        #[validate(required(message = "Person 'ID' can't be blank"))]
        pub id: Option<Uuid>,
    }
    leading_fields = ["id"]
}

impl PersonUpdateRequest {
    /// 요청 값으로 인물 엔티티를 만듭니다. ID는 요청이 가리키는 기존 인물의 ID입니다.
    pub fn to_person(&self) -> AppResult<Person> {
        let id = self
            .id
            .ok_or_else(|| AppError::ArgumentNullError("id".to_string()))?;

        self.person_with_id(id)
    }
}
