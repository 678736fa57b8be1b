//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created snowflake is unique
/// to prevent collisions between tests running in parallel.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Lowest 18-digit value, the typical length of a current Discord snowflake.
const SNOWFLAKE_BASE: u64 = 100_000_000_000_000_000;

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a unique, realistic-length snowflake as a string.
///
/// # Returns
/// - `String` - 18-digit decimal snowflake
pub fn snowflake() -> String {
    (SNOWFLAKE_BASE + next_id()).to_string()
}
