use num_traits::{PrimInt, Unsigned};
use std::cmp::Ordering::{self};

/// A closed genomic range `[start, end]` carrying a value.
///
/// Copy-number callers report both segment ends as covered, so both are
/// inclusive here. Equality and ordering look at the bounds only.
#[derive(Eq, Debug, Clone)]
pub struct Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    pub start: I,
    pub end: I,
    pub val: T,
}

impl<I, T> Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Check if a single position falls inside the interval
    #[inline]
    pub fn contains(&self, pos: I) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// Check if two closed ranges share at least one position
    #[inline]
    pub fn overlap(&self, start: I, end: I) -> bool {
        self.start <= end && start <= self.end
    }

    /// Number of positions covered, saturating at `I::max_value()`
    #[inline]
    pub fn span(&self) -> I {
        self.end
            .checked_sub(&self.start)
            .map(|w| w.saturating_add(I::one()))
            .unwrap_or_else(I::zero)
    }
}

impl<I, T> Ord for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn cmp(&self, other: &Interval<I, T>) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl<I, T> PartialOrd for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I, T> PartialEq for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn eq(&self, other: &Interval<I, T>) -> bool {
        self.start == other.start && self.end == other.end
    }
}
