//! Integration tests for miaudote-validator, exercised through the public API.

mod age;
mod documents;
mod forms;
mod masks;
mod password;

/// Routes the validator's `tracing` events into the test capture buffer.
fn init_logging() {
    miaudote_log::init_test();
}
