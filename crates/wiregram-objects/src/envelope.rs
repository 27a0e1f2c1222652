//! Response envelope handling.
//!
//! The platform wraps successful responses as `{"ok": true, "result": ...}`
//! and failures as `{"ok": false, "error_code": ..., "description": ...}`.
//! Object construction accepts either a full envelope or a bare entity; the
//! `result` payload is extracted when present and the input is used as-is
//! otherwise.

use serde_json::Value;
use tracing::trace;

/// Envelope key holding the success flag.
pub const OK: &str = "ok";
/// Envelope key holding the payload of a successful response.
pub const RESULT: &str = "result";
/// Envelope key holding the human-readable failure reason.
pub const DESCRIPTION: &str = "description";
/// Envelope key holding the numeric failure code.
pub const ERROR_CODE: &str = "error_code";

/// Extract the `result` payload from an envelope.
///
/// Returns `data["result"]` when `data` is an object containing that key,
/// and `data` unchanged otherwise. Total: never fails.
pub fn unwrap_result(data: Value) -> Value {
    match data {
        Value::Object(mut map) => {
            if let Some(result) = map.remove(RESULT) {
                trace!("extracted result payload from envelope");
                result
            } else {
                Value::Object(map)
            }
        }
        other => other,
    }
}

/// Read the envelope success flag. `false` when absent or not a bool.
pub fn is_ok(data: &Value) -> bool {
    data.get(OK).and_then(Value::as_bool).unwrap_or(false)
}
