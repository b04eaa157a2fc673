//! UTF-16 decoding primitives shared by [`TextSource`] and its length
//! counter.
//!
//! The decoder is total: every sequence of 16-bit code units decodes to a
//! sequence of codepoints. A high surrogate immediately followed by a low
//! surrogate combines into one supplementary-plane scalar value. Every other
//! unit, including an unpaired surrogate, is returned as its raw 16-bit value.
//!
//! ```rust
//! use textsource::decode::{count_codepoints, decode_at};
//!
//! let units = [0x0041, 0xD83D, 0xDE00, 0xDC00];
//! assert_eq!(decode_at(&units, 0), Some((0x41, 1)));
//! assert_eq!(decode_at(&units, 1), Some((0x1F600, 2)));
//! // lone low surrogate passes through
//! assert_eq!(decode_at(&units, 3), Some((0xDC00, 1)));
//! assert_eq!(count_codepoints(&units), 3);
//! ```
//!
//! [`TextSource`]: crate::TextSource

use crate::Codepoint;

const HIGH_SURROGATE_START: u16 = 0xD800;
const HIGH_SURROGATE_END: u16 = 0xDBFF;
const LOW_SURROGATE_START: u16 = 0xDC00;
const LOW_SURROGATE_END: u16 = 0xDFFF;
const SUPPLEMENTARY_START: u32 = 0x1_0000;

/// Returns `true` for a leading (high) surrogate, `0xD800..=0xDBFF`.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, HIGH_SURROGATE_START..=HIGH_SURROGATE_END)
}

/// Returns `true` for a trailing (low) surrogate, `0xDC00..=0xDFFF`.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, LOW_SURROGATE_START..=LOW_SURROGATE_END)
}

/// Returns `true` for any surrogate code unit, high or low.
#[inline]
#[must_use]
pub const fn is_surrogate(unit: u16) -> bool {
    matches!(unit, HIGH_SURROGATE_START..=LOW_SURROGATE_END)
}

/// Returns `true` if `high` and `low` form a valid surrogate pair, in that
/// order.
#[inline]
#[must_use]
pub const fn is_surrogate_pair(high: u16, low: u16) -> bool {
    is_high_surrogate(high) && is_low_surrogate(low)
}

/// Combines a surrogate pair into its scalar value.
///
/// The result is only meaningful when [`is_surrogate_pair`] holds for the
/// arguments.
#[inline]
#[must_use]
pub fn combine_surrogates(high: u16, low: u16) -> Codepoint {
    let high = u32::from(high.wrapping_sub(HIGH_SURROGATE_START) & 0x3FF);
    let low = u32::from(low.wrapping_sub(LOW_SURROGATE_START) & 0x3FF);
    SUPPLEMENTARY_START + ((high << 10) | low)
}

/// Decodes one codepoint starting at `index`.
///
/// Returns the codepoint together with the number of code units it occupies
/// (1 or 2), or `None` when `index` is at or past the end of `units`.
#[inline]
#[must_use]
pub fn decode_at(units: &[u16], index: usize) -> Option<(Codepoint, usize)> {
    let &unit = units.get(index)?;
    if is_high_surrogate(unit) {
        if let Some(&next) = units.get(index + 1) {
            if is_low_surrogate(next) {
                return Some((combine_surrogates(unit, next), 2));
            }
        }
    }
    Some((Codepoint::from(unit), 1))
}

/// Counts codepoints in `units` using the same pairing rule as
/// [`decode_at`]: one per valid surrogate pair, one per other unit.
#[must_use]
pub fn count_codepoints(units: &[u16]) -> usize {
    let mut pos = 0;
    let mut count = 0;
    while let Some((_, width)) = decode_at(units, pos) {
        pos += width;
        count += 1;
    }
    count
}
