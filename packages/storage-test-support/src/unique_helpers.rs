//! Unique test values built from ULIDs, so rows from different tests never
//! collide on name or email.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use storage_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("state");
/// assert_ne!(a, unique_str("state"));
/// assert!(a.starts_with("state-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// `{prefix}-{ulid}@hbnb.test`
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@hbnb.test", prefix, Ulid::new())
}
