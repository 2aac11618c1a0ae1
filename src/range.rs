//! Compact ranges over the converted text.
//!
//! Annotation ranges are half-open byte offsets into the output buffer,
//! stored as `u32` so an annotation stays small. Output up to 4GB is supported.

/// Half-open byte range `[start, end)` over converted text.
///
/// # Example
/// ```
/// use htmlconvert::Range;
///
/// let text = "Hello, World!";
/// let range = Range::new(7, 12);
/// assert_eq!(range.slice(text), "World");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from buffer offsets.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Create an empty range anchored at an offset.
    ///
    /// Open annotations start out this way and are extended when closed.
    #[inline]
    pub const fn empty_at(pos: u32) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// The text this range covers.
    ///
    /// Panics if the range is out of bounds or splits a character, like
    /// any other `str` slicing.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start as usize..self.end as usize]
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this range covers an offset.
    #[inline]
    pub const fn contains(&self, pos: u32) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Move the end of this range forward to a buffer offset to close it.
    ///
    /// # Panics
    /// Panics in debug mode if `new_end` exceeds u32::MAX.
    #[inline]
    pub fn extend_to(&mut self, new_end: usize) {
        debug_assert!(new_end <= u32::MAX as usize);
        debug_assert!(new_end >= self.end as usize);
        self.end = new_end as u32;
    }

    /// Shrink the range so it lies within `[0, len)`.
    #[inline]
    pub fn clamp_to(&mut self, len: u32) {
        self.end = self.end.min(len);
        self.start = self.start.min(self.end);
    }
}

impl From<std::ops::Range<u32>> for Range {
    #[inline]
    fn from(r: std::ops::Range<u32>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<std::ops::Range<usize>> for Range {
    #[inline]
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::from_usize(r.start, r.end)
    }
}

impl From<Range> for std::ops::Range<usize> {
    #[inline]
    fn from(r: Range) -> Self {
        r.start as usize..r.end as usize
    }
}
