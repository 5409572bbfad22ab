// src/exit.rs
//! Process exit codes for `shortpath`.
//!
//! An unreachable destination is a result, not a failure, and exits 0.

use crate::error::ShortpathError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ShortpathExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (I/O, config).
    Error = 1,
    /// An edge record or query header did not parse.
    InvalidInput = 2,
    /// A query named a node absent from the graph.
    UnknownNode = 3,
}

impl ShortpathExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ShortpathError>() {
            Some(ShortpathError::MalformedInput { .. }) => Self::InvalidInput,
            Some(ShortpathError::UnknownNode(_)) => Self::UnknownNode,
            _ => Self::Error,
        }
    }
}

impl Termination for ShortpathExit {
    fn report(self) -> std::process::ExitCode {
        let code = u8::try_from(self.code()).unwrap_or(1);
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let malformed = anyhow::Error::new(ShortpathError::MalformedInput {
            record: 0,
            reason: "x".into(),
        });
        assert_eq!(ShortpathExit::for_error(&malformed), ShortpathExit::InvalidInput);

        let unknown = anyhow::Error::new(ShortpathError::UnknownNode("z".into()));
        assert_eq!(ShortpathExit::for_error(&unknown), ShortpathExit::UnknownNode);

        assert_eq!(ShortpathExit::for_error(&anyhow::anyhow!("boom")), ShortpathExit::Error);
    }
}
