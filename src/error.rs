use thiserror::Error;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl WizardError {
    /// Whether the error came from the final-submit collaborator
    pub fn is_submission(&self) -> bool {
        matches!(self, Self::Submission(_))
    }
}

pub type Result<T> = std::result::Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WizardError::Submission("server unavailable".into());
        assert_eq!(err.to_string(), "Submission failed: server unavailable");
        assert!(err.is_submission());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: WizardError = io_err.into();
        assert!(matches!(err, WizardError::Io(_)));
        assert!(!err.is_submission());
    }
}
