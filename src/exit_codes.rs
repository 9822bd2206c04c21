//! Exit code constants for the envgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing template, unreadable config, write failure)
//! - 2: A template parameter could not be resolved
//! - 3: The parameter store client could not be initialized

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing files, or filesystem failures.
pub const USER_ERROR: i32 = 1;

/// Resolution failure: a referenced parameter was not found or could not be fetched.
pub const RESOLUTION_FAILURE: i32 = 2;

/// Parameter store failure: client configuration or runtime setup failed.
pub const STORE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, RESOLUTION_FAILURE, STORE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn only_success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert!(USER_ERROR > 0);
        assert!(RESOLUTION_FAILURE > 0);
        assert!(STORE_FAILURE > 0);
    }
}
