use thiserror::Error;

pub type Result<T, E = PhysicsError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A caller-supplied value is outside the accepted domain,
    /// such as a non-positive mass or time step.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation has no defined result for the given inputs,
    /// such as an orthonormal vector of two parallel vectors.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}
