//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for `--json`

mod json;

pub use json::JsonEventSink;
