//! Error handling utilities

use crate::error::MonoidalError;
use tracing::error;

/// Report a fatal error and exit.
///
/// - `verbose = 0`: the error message only
/// - `verbose >= 1`: the full error chain
///
/// Exit codes: 1 for law violations and general failures, 2 for bad input
/// or configuration.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprintln!("Error: {error}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code(&error))
}

/// Exit status for an error.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<MonoidalError>() {
        Some(MonoidalError::Parse { .. })
        | Some(MonoidalError::Config(_))
        | Some(MonoidalError::Toml(_)) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LawViolation;

    #[test]
    fn test_exit_codes() {
        let parse = anyhow::Error::new(MonoidalError::Parse {
            value: "x".to_string(),
            expected: "integer",
        });
        assert_eq!(exit_code(&parse), 2);

        let law = anyhow::Error::new(MonoidalError::LawViolation(LawViolation::LeftIdentity {
            a: "a".to_string(),
            result: "b".to_string(),
        }));
        assert_eq!(exit_code(&law), 1);

        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }
}
