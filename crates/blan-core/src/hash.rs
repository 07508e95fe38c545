//! Record fingerprinting for ledger-style display hashes.
//!
//! This is deliberately NOT cryptographic. The fingerprint stamps a record
//! at creation time for display and audit purposes; collisions are
//! acceptable and must never be treated as record identity.

use serde::Serialize;

use crate::error::Result;

/// Width of the hex field the 32-bit value is embedded in.
///
/// The padded width is a display contract inherited from the stored format;
/// it does not imply 256-bit strength.
const FINGERPRINT_HEX_WIDTH: usize = 64;

/// Computes a deterministic, non-cryptographic fingerprint of any
/// serializable value.
///
/// The value is serialized to its canonical JSON string, folded into a
/// 32-bit signed accumulator via `acc = acc * 31 + unit` over UTF-16 code
/// units with wraparound, and rendered as the absolute value in lowercase
/// hex, left-padded with zeros to 64 characters and prefixed with `0x`.
///
/// Same input always yields the same output, within one process and across
/// processes, given identical JSON serialization.
pub fn fingerprint<T: Serialize>(value: &T) -> Result<String> {
    let serialized = serde_json::to_string(value)?;
    let mut acc: i32 = 0;
    for unit in serialized.encode_utf16() {
        acc = acc.wrapping_mul(31).wrapping_add(unit as i32);
    }
    Ok(format!(
        "0x{:0>width$x}",
        acc.unsigned_abs(),
        width = FINGERPRINT_HEX_WIDTH
    ))
}
