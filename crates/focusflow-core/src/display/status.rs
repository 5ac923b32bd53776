//! Short confirmation messages for operation feedback.

use std::fmt;

/// One-line outcome of a command.
///
/// Domain operations never fail; a request that does not apply (an unknown
/// id, a blank title) is reported as ignored rather than as an error.
pub struct OperationStatus {
    pub message: String,
    pub applied: bool,
}

impl OperationStatus {
    /// The command changed something.
    pub fn applied(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: true,
        }
    }

    /// The command was a no-op.
    pub fn ignored(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.applied { "Done:" } else { "Nothing changed:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let applied = OperationStatus::applied("timer started");
        assert_eq!(applied.to_string(), "Done: timer started\n");

        let ignored = OperationStatus::ignored("no task with ID 9");
        assert!(format!("{ignored}").contains("Nothing changed:"));
    }
}
