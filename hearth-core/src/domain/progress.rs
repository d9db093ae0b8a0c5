//! Operation progress primitives
//!
//! Long-running controller operations (configuration sync, database commit,
//! cache refresh) expose their state through a periodically polled JSON
//! report. The report shape belongs to each operation; consumers only agree
//! on which field marks the terminal state.

use serde::{Deserialize, Serialize};

/// One decoded report from the controller's status endpoint.
///
/// Opaque apart from the completion-signal field. Rendering decides what to
/// do with the rest of the payload.
pub type StatusReport = serde_json::Value;

/// The field/value convention that marks a finished operation.
///
/// Different topics can carry different conventions, so the field name and
/// terminal value are data rather than hardcoded literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSignal {
    /// Name of the payload field to inspect
    pub field: String,
    /// Value of that field meaning "the operation has finished"
    pub value: String,
}

impl CompletionSignal {
    /// Create a completion signal for a custom field/value convention
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// True when `report` carries the terminal value in the signal field.
    ///
    /// A report that is not an object, lacks the field, or holds a
    /// non-string value never signals completion.
    pub fn is_complete(&self, report: &StatusReport) -> bool {
        report.get(&self.field).and_then(serde_json::Value::as_str) == Some(self.value.as_str())
    }
}

impl Default for CompletionSignal {
    /// The controller's convention: a `status` field reaching `"isEnd"`.
    fn default() -> Self {
        Self::new("status", "isEnd")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_signal_matches_controller_convention() {
        let signal = CompletionSignal::default();

        assert!(!signal.is_complete(&json!({ "status": "running" })));
        assert!(signal.is_complete(&json!({ "status": "isEnd" })));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let signal = CompletionSignal::default();
        let report = json!({ "status": "isEnd", "copied": 42, "message": "done" });

        assert!(signal.is_complete(&report));
    }

    #[test]
    fn test_custom_field_and_value() {
        let signal = CompletionSignal::new("phase", "finished");

        assert!(signal.is_complete(&json!({ "phase": "finished" })));
        assert!(!signal.is_complete(&json!({ "status": "finished" })));
        assert!(!signal.is_complete(&json!({ "phase": "running" })));
    }

    #[test]
    fn test_malformed_reports_never_complete() {
        let signal = CompletionSignal::default();

        assert!(!signal.is_complete(&json!("isEnd")));
        assert!(!signal.is_complete(&json!({ "status": 3 })));
        assert!(!signal.is_complete(&json!(null)));
    }
}
