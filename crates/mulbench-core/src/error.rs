//! Error type shared by all multiplication kernels.

/// Error type for kernel invocations.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// A digit string contained something other than ASCII digits, or was empty.
    #[error("malformed digit string: {0}")]
    MalformedInput(String),

    /// Flattened buffer lengths disagree with the declared dimensions, or a
    /// dimension is unusable for the selected kernel.
    #[error("invalid matrix dimensions: {0}")]
    InvalidDimensions(String),

    /// Configuration error (unknown kernel name, bad selector).
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different kernels don't match.
    #[error("result mismatch between kernels")]
    Mismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_display() {
        let err = KernelError::MalformedInput("byte 'x' at index 2".into());
        assert_eq!(err.to_string(), "malformed digit string: byte 'x' at index 2");
    }

    #[test]
    fn invalid_dimensions_display() {
        let err = KernelError::InvalidDimensions("a.len() == 5, expected 6".into());
        assert!(err.to_string().starts_with("invalid matrix dimensions"));
    }

    #[test]
    fn mismatch_display() {
        assert_eq!(
            KernelError::Mismatch.to_string(),
            "result mismatch between kernels"
        );
    }
}
