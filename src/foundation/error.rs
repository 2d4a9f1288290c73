/// Convenience result type used across cyclotrace.
pub type CycloResult<T> = Result<T, CycloError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum CycloError {
    /// Invalid caller-provided input (empty path, non-positive coefficient count).
    #[error("validation error: {0}")]
    Validation(String),

    /// A coefficient set that cannot drive an animation (zero total amplitude).
    #[error("spectrum error: {0}")]
    Spectrum(String),

    /// Misuse of the animation state machine or a failed frame step.
    #[error("animation error: {0}")]
    Animation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CycloError {
    /// Build a [`CycloError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CycloError::Spectrum`] value.
    pub fn spectrum(msg: impl Into<String>) -> Self {
        Self::Spectrum(msg.into())
    }

    /// Build a [`CycloError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
