pub mod departure;
pub mod extension;
pub mod person;
pub mod status;
