//! Logging for integration test binaries.
//!
//! Integration tests can't reach the crate's `cfg(test)` bootstrap, so each
//! binary initialises through the shared test-support crate instead.
//! `TEST_LOG=debug` shows every storage event.

#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    storage_test_support::logging::init();
}
