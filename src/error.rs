//! Error types for the envgen CLI.
//!
//! The template and resolver modules have their own error types; this one
//! wraps them at the command layer and maps each failure to an exit code.

use crate::exit_codes;
use crate::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for envgen commands.
#[derive(Error, Debug)]
pub enum EnvgenError {
    /// User provided invalid arguments or a file operation failed.
    #[error("{0}")]
    UserError(String),

    /// The template file does not exist.
    #[error("template file {} does not exist", .0.display())]
    TemplateNotFound(PathBuf),

    /// Template processing failed (a parameter could not be resolved).
    #[error("failed to process template: {0}")]
    Template(#[from] TemplateError),

    /// The parameter store client could not be set up.
    #[error("failed to initialize parameter store client: {0}")]
    StoreError(String),

    /// A bulk fetch under a parameter path failed.
    #[error("failed to prefetch parameters under {path}: {message}")]
    PrefetchError { path: String, message: String },
}

impl EnvgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EnvgenError::UserError(_) => exit_codes::USER_ERROR,
            EnvgenError::TemplateNotFound(_) => exit_codes::USER_ERROR,
            EnvgenError::Template(_) => exit_codes::RESOLUTION_FAILURE,
            EnvgenError::StoreError(_) => exit_codes::STORE_FAILURE,
            EnvgenError::PrefetchError { .. } => exit_codes::STORE_FAILURE,
        }
    }
}

/// Result type alias for envgen commands.
pub type Result<T> = std::result::Result<T, EnvgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ResolveError;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = EnvgenError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn template_not_found_is_a_user_error() {
        let err = EnvgenError::TemplateNotFound(PathBuf::from(".env.template"));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(
            err.to_string(),
            "template file .env.template does not exist"
        );
    }

    #[test]
    fn template_error_has_resolution_exit_code() {
        let err: EnvgenError = TemplateError::Resolution {
            name: "/myapp/db_host".to_string(),
            source: ResolveError::NotFound {
                name: "/myapp/db_host".to_string(),
            },
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::RESOLUTION_FAILURE);
        assert!(err.to_string().contains("/myapp/db_host"));
    }

    #[test]
    fn store_error_has_correct_exit_code() {
        let err = EnvgenError::StoreError("no runtime".to_string());
        assert_eq!(err.exit_code(), exit_codes::STORE_FAILURE);
        assert_eq!(
            err.to_string(),
            "failed to initialize parameter store client: no runtime"
        );
    }

    #[test]
    fn prefetch_error_is_not_reported_as_client_setup() {
        let err = EnvgenError::PrefetchError {
            path: "/myapp/".to_string(),
            message: "AccessDeniedException".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::STORE_FAILURE);
        assert_eq!(
            err.to_string(),
            "failed to prefetch parameters under /myapp/: AccessDeniedException"
        );
    }
}
