//! Confirmation messages for operations that return no resource worth
//! printing.

use std::fmt;

/// One-line confirmation such as "Success: Template 4 paused".
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Template 4 resumed".to_string());
        assert_eq!(format!("{success}"), "Success: Template 4 resumed\n");

        let failure = OperationStatus::failure("Sweep finished with errors".to_string());
        assert_eq!(format!("{failure}"), "Error: Sweep finished with errors\n");
    }
}
