//! 엔티티 ID 직렬화 형식
//!
//! MongoDB 문서의 `_id`와 외래 키를 하이픈 포함 UUID 문자열로 저장합니다.
//! 조회 필터(`doc! { "_id": id.to_string() }`)와 `$lookup` 조인이 같은 표현을
//! 사용하도록 `#[serde(with = "id_format")]`로 엔티티 필드에 적용합니다.

use serde::{Deserialize, Deserializer, Serializer};
use uuid::Uuid;

pub fn serialize<S>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&id.hyphenated().to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Uuid::parse_str(&raw).map_err(serde::de::Error::custom)
}
