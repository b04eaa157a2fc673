//! Text Source: a forward cursor over one borrowed UTF-16 backing.
//!
//! A [`TextSource`] wraps exactly one of four backings without copying it:
//!
//! - immutable text (`&[u16]`), see [`TextSource::new`];
//! - a [`Segment`] view, see [`TextSource::from_segment`];
//! - a growable [`Utf16Buffer`], see [`TextSource::from_buffer`];
//! - a slice (`&[u16]`), see [`TextSource::from_slice`].
//!
//! Empty text and empty segments produce the null source, as do absent
//! (`None`) backings of any kind. The null source is exhausted from the
//! start.
//!
//! Iteration decodes surrogate pairs and passes every other code unit
//! through, so it never fails. [`TextSource::reset`] rewinds to the first
//! codepoint, which lets a two-pass layout measure and then render from the
//! same source.
//!
//! Invariants
//! - At most one backing is present.
//! - `position() <= len_units()` at all times.
//! - The cursor only moves forward, except through `reset()`.
//!
//! ```rust
//! use textsource::TextSource;
//!
//! let text: Vec<u16> = "a😀".encode_utf16().collect();
//! let mut source = TextSource::new(&text);
//! assert_eq!(source.next_codepoint(), Some(0x61));
//! assert_eq!(source.next_codepoint(), Some(0x1F600));
//! assert_eq!(source.position(), 3);
//! assert_eq!(source.next_codepoint(), None);
//!
//! source.reset();
//! assert_eq!(source.next_codepoint(), Some(0x61));
//! ```

use core::iter::FusedIterator;

use crate::{
    Codepoint, Segment, Utf16Buffer,
    decode::{count_codepoints, decode_at, is_surrogate},
};

/// Which backing a non-null [`TextSource`] reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackingKind {
    /// A whole immutable string.
    Text,
    /// A `(text, offset, len)` view.
    Segment,
    /// A growable [`Utf16Buffer`].
    Buffer,
    /// A borrowed slice.
    Slice,
}

#[derive(Debug, Clone, Copy)]
enum Backing<'a> {
    Absent,
    Text(&'a [u16]),
    Segment(Segment<'a>),
    Buffer(&'a Utf16Buffer),
    Slice(&'a [u16]),
}

impl<'a> Backing<'a> {
    #[inline]
    fn units(&self) -> &'a [u16] {
        match *self {
            Backing::Absent => &[],
            Backing::Text(text) | Backing::Slice(text) => text,
            Backing::Segment(segment) => segment.units(),
            Backing::Buffer(buffer) => buffer.as_units(),
        }
    }
}

/// A restartable, forward-only codepoint cursor over borrowed UTF-16 text.
///
/// Construct one immediately before iterating and let it drop at the end of
/// the same scope; it borrows its backing for `'a` and holds no other state
/// than a cursor.
#[derive(Debug, Clone)]
pub struct TextSource<'a> {
    backing: Backing<'a>,
    position: usize,
}

impl<'a> TextSource<'a> {
    /// The null source: no backing, immediately exhausted.
    #[must_use]
    pub const fn null() -> Self {
        Self::with_backing(Backing::Absent)
    }

    const fn with_backing(backing: Backing<'a>) -> Self {
        Self {
            backing,
            position: 0,
        }
    }

    /// Wraps an immutable string over its full length.
    ///
    /// Empty text yields the null source.
    #[must_use]
    pub const fn new(text: &'a [u16]) -> Self {
        if text.is_empty() {
            Self::null()
        } else {
            Self::with_backing(Backing::Text(text))
        }
    }

    /// Wraps a segment view. An empty segment yields the null source.
    #[must_use]
    pub const fn from_segment(segment: Segment<'a>) -> Self {
        if segment.is_empty() {
            Self::null()
        } else {
            Self::with_backing(Backing::Segment(segment))
        }
    }

    /// Wraps a growable buffer by reference.
    ///
    /// The buffer stays borrowed for as long as the source lives, so it cannot
    /// change length mid-iteration. An empty buffer is present but yields no
    /// codepoints.
    #[must_use]
    pub const fn from_buffer(buffer: &'a Utf16Buffer) -> Self {
        Self::with_backing(Backing::Buffer(buffer))
    }

    /// Wraps a slice of code units. An empty slice is present but yields no
    /// codepoints.
    #[must_use]
    pub const fn from_slice(units: &'a [u16]) -> Self {
        Self::with_backing(Backing::Slice(units))
    }

    /// Returns `true` if no backing is present.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.backing, Backing::Absent)
    }

    /// The active backing, or `None` for the null source.
    #[must_use]
    pub const fn kind(&self) -> Option<BackingKind> {
        match self.backing {
            Backing::Absent => None,
            Backing::Text(_) => Some(BackingKind::Text),
            Backing::Segment(_) => Some(BackingKind::Segment),
            Backing::Buffer(_) => Some(BackingKind::Buffer),
            Backing::Slice(_) => Some(BackingKind::Slice),
        }
    }

    /// Cursor position in code units from the start of the backing.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Length of the active backing in code units; 0 for the null source.
    #[must_use]
    pub fn len_units(&self) -> usize {
        self.backing.units().len()
    }

    /// Returns `true` once every code unit has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.len_units()
    }

    /// Decodes the codepoint at the cursor and advances past it.
    ///
    /// A valid surrogate pair yields its supplementary-plane scalar and
    /// advances by two units. Any other unit, including an unpaired
    /// surrogate, is returned as is and advances by one. Returns `None` once
    /// the backing is exhausted, leaving the cursor in place.
    pub fn next_codepoint(&mut self) -> Option<Codepoint> {
        let (codepoint, width) = decode_at(self.backing.units(), self.position)?;
        if width == 1 && u16::try_from(codepoint).is_ok_and(is_surrogate) {
            log::trace!(
                "unpaired surrogate {codepoint:#06X} at unit {}",
                self.position
            );
        }
        self.position += width;
        Some(codepoint)
    }

    /// Rewinds the cursor to the first code unit.
    pub fn reset(&mut self) {
        log::trace!("text source reset from unit {}", self.position);
        self.position = 0;
    }

    /// Counts the codepoints in `text` without building a source.
    ///
    /// Surrogate pairs count once; every other code unit counts once. Returns
    /// 0 for empty text.
    #[must_use]
    pub fn calculate_length(text: &[u16]) -> usize {
        count_codepoints(text)
    }
}

impl Default for TextSource<'_> {
    fn default() -> Self {
        Self::null()
    }
}

impl Iterator for TextSource<'_> {
    type Item = Codepoint;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_codepoint()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len_units().saturating_sub(self.position);
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl FusedIterator for TextSource<'_> {}

impl<'a> From<&'a [u16]> for TextSource<'a> {
    fn from(text: &'a [u16]) -> Self {
        Self::new(text)
    }
}

impl<'a> From<Segment<'a>> for TextSource<'a> {
    fn from(segment: Segment<'a>) -> Self {
        Self::from_segment(segment)
    }
}

impl<'a> From<&'a Utf16Buffer> for TextSource<'a> {
    fn from(buffer: &'a Utf16Buffer) -> Self {
        Self::from_buffer(buffer)
    }
}

/// An absent backing of any kind yields the null source.
impl<'a, T> From<Option<T>> for TextSource<'a>
where
    T: Into<TextSource<'a>>,
{
    fn from(backing: Option<T>) -> Self {
        backing.map_or_else(Self::null, Into::into)
    }
}
