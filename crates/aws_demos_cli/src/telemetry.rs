//! Structured stderr telemetry for example commands.
//!
//! Events are single JSON lines on stderr so stdout stays reserved for the
//! human-readable outcome text.

use serde_json::json;

pub fn log_command_info(command: &str, event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": command,
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

pub fn log_command_error(command: &str, event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": command,
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
