use crate::tools::error::ConfigurationError;
use crate::web::error::WebError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("The application is not properly configured.")]
    Configuration(#[from] ConfigurationError),
    #[error("An error has been encountered while preparing requests onto another server.")]
    Web(#[from] WebError),
}
