use alloc::vec::Vec;

use quickcheck_macros::quickcheck;

use crate::TextSource;

/// Reading any prefix, resetting, then reading to the end reproduces the
/// full sequence.
#[quickcheck]
fn reset_after_partial_read_replays(units: Vec<u16>, read: usize) -> bool {
    let mut source = TextSource::from_slice(&units);
    let full: Vec<u32> = source.clone().collect();

    let read = if full.is_empty() { 0 } else { read % (full.len() + 1) };
    for _ in 0..read {
        let _ = source.next_codepoint();
    }
    source.reset();
    source.position() == 0 && source.collect::<Vec<_>>() == full
}

/// The cursor never moves backwards and never passes the backing length.
#[quickcheck]
fn cursor_is_monotonic_and_bounded(units: Vec<u16>) -> bool {
    let mut source = TextSource::from_slice(&units);
    let mut last = 0;
    while source.next_codepoint().is_some() {
        let pos = source.position();
        if pos <= last || pos > units.len() || pos - last > 2 {
            return false;
        }
        last = pos;
    }
    source.position() == units.len() && source.next_codepoint().is_none()
}
