//! 국가 추가 요청 DTO

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::domain::entities::countries::Country;
use crate::utils::validation::FieldOrder;

/// 새 국가 등록 요청
///
/// `name`이 없으면 서비스가 `ArgumentNullError`로 거부하고,
/// 20자를 넘으면 `ValidationError`로 거부합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CountryAddRequest {
    #[validate(length(max = 20, message = "Country 'Name' can't exceed 20 characters"))]
    pub name: Option<String>,
}

impl FieldOrder for CountryAddRequest {
    const FIELD_ORDER: &'static [&'static str] = &["name"];
}

impl CountryAddRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// 서비스가 할당한 ID로 국가 엔티티를 만듭니다.
    pub fn to_country(&self, id: Uuid) -> Country {
        Country {
            id,
            name: self.name.clone().unwrap_or_default(),
        }
    }
}
