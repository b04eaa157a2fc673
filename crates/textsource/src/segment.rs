//! Borrowed `(text, offset, len)` views.

use crate::SegmentError;

/// A view over `len` code units of `text` starting at `offset`.
///
/// Bounds are checked once, when the segment is built. The segment keeps the
/// sub-slice it describes, so reading from it never re-validates.
///
/// ```rust
/// use textsource::Segment;
///
/// let text: Vec<u16> = "hello world".encode_utf16().collect();
/// let world = Segment::try_new(&text, 6, 5)?;
/// assert_eq!(world.offset(), 6);
/// assert_eq!(world.units(), &text[6..]);
///
/// assert!(Segment::try_new(&text, 6, 6).is_err());
/// # Ok::<(), textsource::SegmentError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    text: &'a [u16],
    offset: usize,
    units: &'a [u16],
}

impl<'a> Segment<'a> {
    /// Builds a segment, checking that `offset..offset + len` lies within
    /// `text`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::Overflow`] if `offset + len` overflows and
    /// [`SegmentError::OutOfBounds`] if the range ends past `text.len()`.
    pub fn try_new(text: &'a [u16], offset: usize, len: usize) -> Result<Self, SegmentError> {
        let Some(end) = offset.checked_add(len) else {
            log::debug!("rejected segment: offset {offset} + len {len} overflows");
            return Err(SegmentError::Overflow { offset, len });
        };
        let Some(units) = text.get(offset..end) else {
            log::debug!(
                "rejected segment {offset}..{end} over text of {} units",
                text.len()
            );
            return Err(SegmentError::OutOfBounds {
                offset,
                end,
                text_len: text.len(),
            });
        };
        Ok(Self {
            text,
            offset,
            units,
        })
    }

    /// Builds a segment over `offset..offset + len` of `text`.
    ///
    /// # Panics
    ///
    /// Panics with the [`SegmentError`] message if the range is not within
    /// `text`. Use [`Segment::try_new`] to handle that case.
    #[must_use]
    pub fn new(text: &'a [u16], offset: usize, len: usize) -> Self {
        match Self::try_new(text, offset, len) {
            Ok(segment) => segment,
            Err(err) => panic!("{err}"),
        }
    }

    /// A segment spanning all of `text`.
    #[must_use]
    pub const fn whole(text: &'a [u16]) -> Self {
        Self {
            text,
            offset: 0,
            units: text,
        }
    }

    /// The full text this segment was taken from.
    #[must_use]
    pub const fn text(&self) -> &'a [u16] {
        self.text
    }

    /// Start of the segment within [`text`](Self::text), in code units.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Length in code units.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the segment covers no code units.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The code units inside the segment.
    #[must_use]
    pub const fn units(&self) -> &'a [u16] {
        self.units
    }
}

impl<'a> From<&'a [u16]> for Segment<'a> {
    fn from(text: &'a [u16]) -> Self {
        Self::whole(text)
    }
}
