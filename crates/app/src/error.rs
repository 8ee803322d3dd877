use menuflow_core::error::CoreError;
use menuflow_gateway::GatewayError;

/// Application-level error type for view operations.
///
/// Wraps [`CoreError`] for domain/validation failures and
/// [`GatewayError`] for request failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `menuflow_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request-level error from the gateway.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Convenience type alias for operation return values.
pub type AppResult<T> = Result<T, AppError>;
