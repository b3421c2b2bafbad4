//! Transport integration tests.

#[path = "adapters/local_test.rs"]
mod local_test;
#[path = "adapters/logger_test.rs"]
mod logger_test;
