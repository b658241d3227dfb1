pub mod persons_service;

pub use persons_service::PersonsService;
