//! Persons Entity Module

pub mod person;

pub use person::Person;
