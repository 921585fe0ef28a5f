//! Value objects for the domain layer

mod email_address;

pub use email_address::EmailAddress;
