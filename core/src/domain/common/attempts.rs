use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Awaits `attempt` on each candidate in order and returns the first success.
///
/// Candidates are tried strictly one after another, each exactly once. When
/// every attempt fails the last error is kept in
/// [`CoreError::AllCandidatesExhausted`].
pub async fn first_success<C, T, F, Fut>(candidates: &[C], mut attempt: F) -> Result<T, CoreError>
where
    C: std::fmt::Display,
    F: FnMut(&C) -> Fut,
    Fut: Future<Output = Result<T, CoreError>>,
{
    let mut last_error = "No models tried".to_string();

    for (index, candidate) in candidates.iter().enumerate() {
        match attempt(candidate).await {
            Ok(value) => {
                tracing::debug!(candidate = %candidate, attempt = index + 1, "candidate succeeded");
                return Ok(value);
            }
            Err(e) => {
                tracing::warn!("Failed with model {}: {}", candidate, e);
                last_error = e.to_string();
            }
        }
    }

    Err(CoreError::AllCandidatesExhausted {
        attempts: candidates.len(),
        last_error,
    })
}
