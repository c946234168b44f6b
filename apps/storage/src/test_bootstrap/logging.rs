#![cfg(test)]

//! Test logging for the crate's unit tests.
//!
//! One-time guarded so the ctor in `lib.rs` and explicit calls never collide.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize logging for tests. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `warn`.
///
/// ```bash
/// TEST_LOG=debug cargo test -p hbnb-storage
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_is_idempotent() {
        super::init();
        super::init();
        tracing::warn!("logging initialised twice without panicking");
    }
}
