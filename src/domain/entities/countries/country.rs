//! Country Entity Implementation
//!
//! 국가 엔티티입니다. 하나의 국가는 여러 인물(Person)에게 참조됩니다 (1:N).

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::entities::id_format;

/// 국가 엔티티
///
/// ID는 서비스가 생성 시점에 할당하며, 생성 이후에는 읽기 전용입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "_id", with = "id_format")]
    pub id: Uuid,
    /// 국가 이름 (unique, 최대 20자)
    pub name: String,
}

impl Country {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
