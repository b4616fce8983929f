// error.rs - Error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    /// The speed field did not hold a non-negative whole number.
    #[error("Invalid speed {text:?}. Please enter a whole number of milliseconds.")]
    InvalidInterval { text: String },
}

/// Failures while bringing the window up.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error(transparent)]
    Gui(#[from] eframe::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_interval_message_names_the_text() {
        let err = AnimationError::InvalidInterval { text: "abc".into() };
        assert_eq!(
            err.to_string(),
            "Invalid speed \"abc\". Please enter a whole number of milliseconds."
        );
    }
}
