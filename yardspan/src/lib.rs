use std::error::Error;
use std::fmt::Display;
use std::ops::Range;

/// Half-open byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub lo: u32,
    pub hi: u32,
}

impl Span {
    #[must_use]
    #[inline]
    pub const fn new(lo: u32, hi: u32) -> Self {
        if hi < lo {
            Self { lo: hi, hi: lo }
        } else {
            Self { lo, hi }
        }
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    #[inline]
    pub fn join(self, other: Self) -> Self {
        Self::new(self.lo.min(other.lo), self.hi.max(other.hi))
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.lo as usize..span.hi as usize
    }
}

/// A kind paired with the span it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spand<T> {
    pub kind: T,
    pub span: Span,
}

impl<T> Spand<T> {
    #[inline]
    pub const fn new(kind: T, span: Span) -> Self {
        Self { kind, span }
    }
}

impl<T: Display> Display for Spand<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

impl<T: Error> Error for Spand<T> {}
