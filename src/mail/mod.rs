pub mod configuration;
pub mod error;
pub mod smtp;
pub mod transport;
