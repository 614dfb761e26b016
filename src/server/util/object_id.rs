//! Record identifiers.
//!
//! Every record is keyed by a 24-character lowercase hexadecimal token assigned at
//! creation time: a 4-byte big-endian seconds timestamp, 5 random bytes, and a 3-byte
//! process-wide counter. Identifiers are checked with `is_valid_id` before any lookup so
//! that a malformed identifier is reported as a bad request rather than a missing record.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use rand::Rng;

/// Number of hexadecimal characters in a record identifier.
pub const ID_LENGTH: usize = 24;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Checks whether `raw` is a structurally valid record identifier.
///
/// # Arguments
/// - `raw` - Identifier as received from the request path
///
/// # Returns
/// - `true` - `raw` is exactly 24 hexadecimal characters
/// - `false` - Otherwise
pub fn is_valid_id(raw: &str) -> bool {
    raw.len() == ID_LENGTH && raw.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Generates a new record identifier.
///
/// # Returns
/// - `String` - 24 lowercase hexadecimal characters, always accepted by `is_valid_id`
pub fn generate_id() -> String {
    // Seconds wrap modulo 2^32 to fit the 4-byte timestamp field.
    let timestamp = (Utc::now().timestamp() & 0xFFFF_FFFF) as u32;
    let random: [u8; 5] = rand::rng().random();
    let count = COUNTER.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

    let mut id = format!("{:08x}", timestamp);
    for byte in random {
        id.push_str(&format!("{:02x}", byte));
    }
    id.push_str(&format!("{:06x}", count));

    id
}
