use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::entities::countries::Country;

/// 국가 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Country> for CountryResponse {
    fn from(country: Country) -> Self {
        let Country { id, name } = country;
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_keeps_id_and_name() {
        let country = Country::new(Uuid::new_v4(), "Norway");
        let response = CountryResponse::from(country.clone());

        assert_eq!(response.id, country.id);
        assert_eq!(response.name, "Norway");
    }
}
