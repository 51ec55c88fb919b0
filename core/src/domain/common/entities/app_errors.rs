use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("No ingredients or product name provided")]
    InvalidInput,

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("No API key configured for the model service")]
    MissingCredential,

    #[error("All models failed. Last error: {last_error}")]
    AllCandidatesExhausted { attempts: usize, last_error: String },

    #[error("Internal server error")]
    InternalServerError,
}
