//! Identifier generation for persisted records.

use std::sync::atomic::{AtomicU64, Ordering};

use jiff::Timestamp;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Returns a process-unique identifier such as `plan-1718000000000000-3`.
///
/// The microsecond timestamp keeps identifiers unique across runs sharing a
/// database; the sequence number separates records created within the same
/// microsecond.
pub fn next_id(prefix: &str) -> String {
    let micros = Timestamp::now().as_microsecond();
    let seq = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{micros}-{seq}")
}
