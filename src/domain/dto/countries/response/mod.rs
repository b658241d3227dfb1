pub mod country_response;

pub use country_response::CountryResponse;
