//! Byte predicates: pure `u8 -> bool` classifiers and their combinators.
//!
//! A [`ByteRange`] is the trigger of every lexical and ignore rule. Ranges are
//! immutable once built and cheap to clone, so one set of ranges can be shared by
//! any number of lexers and threads.

use std::fmt;
use std::sync::Arc;

/// A byte classifier. Answers whether a byte belongs to the range.
#[derive(Clone)]
pub struct ByteRange(Arc<dyn Fn(u8) -> bool + Send + Sync>);

impl ByteRange {
    /// Wrap an arbitrary classifier.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(u8) -> bool + Send + Sync + 'static,
    {
        ByteRange(Arc::new(f))
    }

    /// Whether `b` is in the range.
    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        (self.0)(b)
    }
}

impl fmt::Debug for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByteRange(..)")
    }
}

/// Exactly `expected`.
pub fn single(expected: u8) -> ByteRange {
    ByteRange::new(move |b| b == expected)
}

/// Every byte between `lo` and `hi`, both inclusive.
pub fn bounded(lo: u8, hi: u8) -> ByteRange {
    ByteRange::new(move |b| b >= lo && b <= hi)
}

/// Any of the listed bytes.
pub fn set(bytes: &[u8]) -> ByteRange {
    let members = bytes.to_vec();
    ByteRange::new(move |b| members.contains(&b))
}

/// Logical OR of the given ranges.
pub fn union<I>(ranges: I) -> ByteRange
where
    I: IntoIterator<Item = ByteRange>,
{
    let members: Vec<ByteRange> = ranges.into_iter().collect();
    ByteRange::new(move |b| members.iter().any(|r| r.contains(b)))
}

// ==================== Reference ASCII classes ====================

/// `0`..=`9`.
pub fn digits() -> ByteRange {
    bounded(0x30, 0x39)
}

/// `a`..=`z`, `A`..=`Z` and `_`.
pub fn letters() -> ByteRange {
    union([bounded(0x61, 0x7A), bounded(0x41, 0x5A), single(0x5F)])
}

/// [`letters`] plus [`digits`].
pub fn alphanumeric() -> ByteRange {
    union([letters(), digits()])
}

/// The double-quote string delimiter.
pub fn quote() -> ByteRange {
    single(0x22)
}

/// `= , ( ) { } #`.
pub fn punctuation() -> ByteRange {
    set(b"=,(){}#")
}

/// The space byte (0x20) and nothing else.
pub fn space() -> ByteRange {
    single(0x20)
}
