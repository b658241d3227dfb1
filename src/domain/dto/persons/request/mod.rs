#[macro_use]
mod person_request_fields;

pub mod person_add_request;
pub mod person_update_request;
pub mod persons_index_query;

pub use person_add_request::PersonAddRequest;
pub use person_update_request::PersonUpdateRequest;
pub use persons_index_query::PersonsIndexQuery;
