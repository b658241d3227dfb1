pub mod country_add_request;

pub use country_add_request::CountryAddRequest;
