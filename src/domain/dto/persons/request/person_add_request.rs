//! 인물 추가 요청 DTO
//!
//! 클라이언트 입력을 그대로 받아 `validator` 제약으로 검증한 뒤
//! [`Person`] 엔티티로 변환합니다. 필수 항목도 `Option`으로 받아서
//! 누락을 역직렬화 오류가 아닌 검증 메시지로 보고합니다.

use uuid::Uuid;
use crate::core::errors::AppResult;
use crate::domain::entities::persons::Person;

person_request! {
    /// 새 인물 등록 요청
    pub struct PersonAddRequest {}
    leading_fields = []
}

impl PersonAddRequest {
    /// 서비스가 할당한 ID로 인물 엔티티를 만듭니다.
    ///
    /// 검증을 통과한 요청에서만 호출되며, 필수 항목이 비어 있으면
    /// `ArgumentNullError`를 반환합니다.
    pub fn to_person(&self, id: Uuid) -> AppResult<Person> {
        self.person_with_id(id)
    }
}
