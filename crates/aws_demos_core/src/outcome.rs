//! Rendered result of one command invocation.
//!
//! Exit-code policy is uniform across every example: success exits 0, API
//! failure exits 1, usage errors exit 1.

use serde::{Deserialize, Serialize};

pub const SUCCESS_EXIT_CODE: i32 = 0;
pub const FAILURE_EXIT_CODE: i32 = 1;
pub const USAGE_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandOutcome {
    pub exit_code: i32,
    pub message: String,
}

impl CommandOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            exit_code: SUCCESS_EXIT_CODE,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            exit_code: FAILURE_EXIT_CODE,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == SUCCESS_EXIT_CODE
    }
}
