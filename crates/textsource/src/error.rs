use thiserror::Error;

/// A segment that does not describe a range inside its text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    /// `offset + len` does not fit in `usize`.
    #[error("segment offset {offset} with length {len} overflows")]
    Overflow {
        /// Requested start, in code units.
        offset: usize,
        /// Requested length, in code units.
        len: usize,
    },
    /// The range ends past the end of the text.
    #[error("segment {offset}..{end} is out of bounds for text of length {text_len}")]
    OutOfBounds {
        /// Requested start, in code units.
        offset: usize,
        /// Requested end (exclusive), in code units.
        end: usize,
        /// Length of the text the segment was taken from.
        text_len: usize,
    },
}
