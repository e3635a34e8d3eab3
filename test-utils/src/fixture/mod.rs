//! JSON fixtures mirroring admin backend responses.
//!
//! Each module has a default `json()` body and a `builder()` for customization.
//! The `wrapped` helper adds the `{"data": ...}` envelope some endpoints use.

pub mod admin;
pub mod role;
pub mod scope;

use serde_json::{json, Value};

/// Wraps a body into the backend's `{"data": ...}` envelope.
pub fn wrapped(data: Value) -> Value {
    json!({ "data": data })
}
