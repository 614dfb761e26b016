//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique record identifier for test data.
///
/// The counter is rendered as 24 zero-padded lowercase hexadecimal digits, matching the
/// identifier format the application assigns and validates.
///
/// # Returns
/// - `String` - Unique, well-formed record identifier
pub fn next_object_id() -> String {
    format!("{:024x}", next_id())
}
