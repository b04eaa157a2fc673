use alloc::vec::Vec;
use core::fmt::{self, Write};

use bstr::ByteSlice;

use crate::decode::count_codepoints;

/// A growable buffer of UTF-16 code units.
///
/// This is the append-capable backing a [`TextSource`](crate::TextSource)
/// can borrow. The buffer does not validate what is pushed into it: unpaired
/// surrogates are stored as given.
///
/// ```rust
/// use textsource::{TextSource, Utf16Buffer};
///
/// let mut buf = Utf16Buffer::new();
/// buf.push_str("hi ");
/// buf.push_char('😀');
/// assert_eq!(buf.len(), 5);
/// assert_eq!(buf.codepoint_count(), 4);
///
/// let cps: Vec<u32> = TextSource::from_buffer(&buf).collect();
/// assert_eq!(cps, [0x68, 0x69, 0x20, 0x1F600]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Utf16Buffer {
    units: Vec<u16>,
}

impl Utf16Buffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Creates an empty buffer with room for `capacity` code units.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Appends one raw code unit.
    pub fn push_unit(&mut self, unit: u16) {
        self.units.push(unit);
    }

    /// Appends `ch` as one or two code units.
    pub fn push_char(&mut self, ch: char) {
        let mut tmp = [0u16; 2];
        self.units.extend_from_slice(ch.encode_utf16(&mut tmp));
    }

    /// Appends UTF-8 text, transcoded to UTF-16.
    pub fn push_str(&mut self, text: &str) {
        // Byte length bounds the number of UTF-16 units
        self.units.reserve(text.len());
        self.units.extend(text.encode_utf16());
    }

    /// Appends bytes decoded as UTF-8, substituting U+FFFD for each invalid
    /// sequence.
    pub fn extend_from_utf8_lossy(&mut self, bytes: &[u8]) {
        self.units.reserve(bytes.len());
        for ch in bytes.chars() {
            self.push_char(ch);
        }
    }

    /// Length in code units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the buffer holds no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Capacity in code units.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.units.capacity()
    }

    /// Removes all code units, keeping the allocation.
    pub fn clear(&mut self) {
        self.units.clear();
    }

    /// Shortens the buffer to `len` code units. No-op if `len` is not less
    /// than the current length.
    pub fn truncate(&mut self, len: usize) {
        self.units.truncate(len);
    }

    /// The buffered code units.
    #[must_use]
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Number of codepoints, pairing surrogates the way
    /// [`TextSource`](crate::TextSource) does.
    #[must_use]
    pub fn codepoint_count(&self) -> usize {
        count_codepoints(&self.units)
    }
}

impl fmt::Display for Utf16Buffer {
    /// Writes the buffer as text, substituting U+FFFD for unpaired
    /// surrogates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in char::decode_utf16(self.units.iter().copied()) {
            f.write_char(ch.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl AsRef<[u16]> for Utf16Buffer {
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}

impl From<&str> for Utf16Buffer {
    fn from(text: &str) -> Self {
        let mut buf = Self::with_capacity(text.len());
        buf.push_str(text);
        buf
    }
}

impl From<Vec<u16>> for Utf16Buffer {
    fn from(units: Vec<u16>) -> Self {
        Self { units }
    }
}

impl From<Utf16Buffer> for Vec<u16> {
    fn from(buf: Utf16Buffer) -> Self {
        buf.units
    }
}

impl FromIterator<u16> for Utf16Buffer {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

impl Extend<u16> for Utf16Buffer {
    fn extend<I: IntoIterator<Item = u16>>(&mut self, iter: I) {
        self.units.extend(iter);
    }
}

impl Extend<char> for Utf16Buffer {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.push_char(ch);
        }
    }
}
