pub mod configuration;
pub mod dispatcher;
pub mod error;
pub mod outcome;
pub mod request;
