//! Parameter resolution.
//!
//! The template processor only needs one capability from the outside world:
//! turn a parameter name into its current value, or fail. That capability is
//! the [`ParameterResolver`] trait. The production implementation is
//! [`SsmClient`], which talks to AWS SSM Parameter Store and caches values for
//! the lifetime of a single invocation.

mod cache;
mod ssm;

pub use cache::ParameterCache;
pub use ssm::SsmClient;

use thiserror::Error;

/// Failure to resolve a single parameter.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The parameter does not exist in the store.
    #[error("parameter {name} not found")]
    NotFound { name: String },

    /// The store returned the parameter without a value.
    #[error("parameter {name} has no value")]
    EmptyValue { name: String },

    /// The request to the store failed.
    #[error("failed to get parameter {name}: {message}")]
    Transport { name: String, message: String },
}

/// Looks up a parameter value by name.
///
/// Implementations that are shared across threads are responsible for their
/// own synchronization; the template processor calls this once per
/// placeholder occurrence and never caches on its own.
pub trait ParameterResolver {
    fn get_parameter(&self, name: &str) -> Result<String, ResolveError>;
}

impl<F> ParameterResolver for F
where
    F: Fn(&str) -> Result<String, ResolveError>,
{
    fn get_parameter(&self, name: &str) -> Result<String, ResolveError> {
        self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_resolvers() {
        let resolver = |name: &str| -> Result<String, ResolveError> {
            match name {
                "/a" => Ok("1".to_string()),
                _ => Err(ResolveError::NotFound {
                    name: name.to_string(),
                }),
            }
        };

        assert_eq!(resolver.get_parameter("/a").unwrap(), "1");
        assert!(matches!(
            resolver.get_parameter("/b"),
            Err(ResolveError::NotFound { name }) if name == "/b"
        ));
    }

    #[test]
    fn error_messages_name_the_parameter() {
        let err = ResolveError::NotFound {
            name: "/myapp/db_host".to_string(),
        };
        assert_eq!(err.to_string(), "parameter /myapp/db_host not found");

        let err = ResolveError::Transport {
            name: "/myapp/api_key".to_string(),
            message: "dispatch failure".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to get parameter /myapp/api_key: dispatch failure"
        );
    }
}
