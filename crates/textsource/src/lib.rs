//! Allocation-free codepoint iteration over borrowed UTF-16 text.
//!
//! Layout and shaping code often receives text in several shapes: a whole
//! string, a window into a string, a growable buffer the caller is still
//! appending to, or a bare slice. [`TextSource`] walks any of them codepoint
//! by codepoint without first copying into a common buffer.
//!
//! ```rust
//! use textsource::{Segment, TextSource, Utf16Buffer};
//!
//! let text: Vec<u16> = "glyph 😀".encode_utf16().collect();
//! let buffer = Utf16Buffer::from("glyph 😀");
//!
//! let sources = [
//!     TextSource::new(&text),
//!     TextSource::from_segment(Segment::new(&text, 0, text.len())),
//!     TextSource::from_buffer(&buffer),
//!     TextSource::from_slice(&text),
//! ];
//! for source in sources {
//!     let cps: Vec<u32> = source.collect();
//!     assert_eq!(cps.last(), Some(&0x1F600));
//!     assert_eq!(cps.len(), TextSource::calculate_length(&text));
//! }
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
pub mod decode;
mod error;
mod segment;
mod source;

#[cfg(test)]
mod tests;

pub use buffer::Utf16Buffer;
pub use error::SegmentError;
pub use segment::Segment;
pub use source::{BackingKind, TextSource};

/// A decoded codepoint: a Unicode scalar value, or the raw value of an
/// unpaired surrogate.
pub type Codepoint = u32;
