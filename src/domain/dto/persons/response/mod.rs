pub mod person_response;
pub mod persons_index_response;

pub use person_response::PersonResponse;
pub use persons_index_response::{search_fields, PersonsIndexResponse, SearchFieldResponse};
