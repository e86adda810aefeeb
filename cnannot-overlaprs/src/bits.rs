use num_traits::{PrimInt, Unsigned, identities::zero};

use super::Overlapper;
use cnannot_core::models::Interval;

/// A Binary Interval Search structure over closed intervals.
///
/// From the journal article: <https://academic.oup.com/bioinformatics/article/29/1/1/273289>
///
/// Intervals are sorted by start on build. A query first binary-searches the
/// earliest start that could still reach the query (query start minus the
/// longest interval), then scans forward until starts pass the query end.
///
/// Sorting loses the input order, so callers that care about it should carry
/// an ordinal in `val` (the segment index does).
///
/// # Examples
///
/// ```
/// use cnannot_overlaprs::{Bits, Overlapper, Interval};
///
/// let segments = vec![
///     Interval { start: 100u64, end: 150, val: 0usize },
///     Interval { start: 200, end: 250, val: 1 },
///     Interval { start: 225, end: 275, val: 2 },
/// ];
///
/// let bits = Bits::build(segments);
///
/// assert_eq!(bits.find(210, 240).len(), 2);
/// assert_eq!(bits.count(250, 250), 2); // both ends are inclusive
/// assert_eq!(bits.find_point_iter(151).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Intervals sorted by (start, end)
    pub intervals: Vec<Interval<I, T>>,
    /// Sorted list of start positions
    starts: Vec<I>,
    /// Sorted list of end positions
    ends: Vec<I>,
    /// Largest `end - start` seen
    max_len: I,
}

impl<I, T> Overlapper<I, T> for Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn build(mut intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized,
    {
        // stable, so equal ranges keep their input order
        intervals.sort();
        let (mut starts, mut ends): (Vec<_>, Vec<_>) =
            intervals.iter().map(|x| (x.start, x.end)).unzip();
        starts.sort();
        ends.sort();
        let max_len = intervals
            .iter()
            .map(|iv| iv.end.checked_sub(&iv.start).unwrap_or_else(zero::<I>))
            .max()
            .unwrap_or_else(zero::<I>);

        Bits {
            intervals,
            starts,
            ends,
            max_len,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.intervals.len()
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        Box::new(IterFind {
            inner: self,
            off: Self::lower_bound(
                start.checked_sub(&self.max_len).unwrap_or_else(zero::<I>),
                &self.intervals,
            ),
            start,
            end,
        })
    }
}

impl<I, T> Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// First index whose interval start is `>= start`.
    #[inline]
    pub fn lower_bound(start: I, intervals: &[Interval<I, T>]) -> usize {
        let mut size = intervals.len();
        let mut low = 0;

        while size > 0 {
            let half = size / 2;
            let other_half = size - half;
            let probe = low + half;
            let other_low = low + other_half;
            let v = &intervals[probe];
            size = half;
            low = if v.start < start { other_low } else { low }
        }
        low
    }

    /// Count intervals overlapping `[start, end]` without visiting them: everything
    /// minus the intervals ending before `start` minus those starting after `end`.
    #[inline]
    pub fn count(&self, start: I, end: I) -> usize {
        let len = self.intervals.len();
        let ending_before = self.ends.partition_point(|e| *e < start);
        let starting_after = len - self.starts.partition_point(|s| *s <= end);
        len.saturating_sub(ending_before + starting_after)
    }

    /// Return an iterator over the intervals in sorted order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<I, T>> {
        self.intervals.iter()
    }
}

/// An iterator over intervals in a [`Bits`] structure that overlap a query range.
#[derive(Debug)]
pub struct IterFind<'a, I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: PrimInt + Unsigned + Send + Sync,
{
    inner: &'a Bits<I, T>,
    off: usize,
    start: I,
    end: I,
}

impl<'a, I, T> Iterator for IterFind<'a, I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: PrimInt + Unsigned + Send + Sync,
{
    type Item = &'a Interval<I, T>;

    #[inline]
    // interval.start <= end && interval.end >= start
    fn next(&mut self) -> Option<Self::Item> {
        while self.off < self.inner.intervals.len() {
            let interval = &self.inner.intervals[self.off];
            self.off += 1;
            if interval.overlap(self.start, self.end) {
                return Some(interval);
            } else if interval.start > self.end {
                break;
            }
        }
        None
    }
}

impl<'a, I, T> IntoIterator for &'a Bits<I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: PrimInt + Unsigned + Send + Sync,
{
    type Item = &'a Interval<I, T>;
    type IntoIter = std::slice::Iter<'a, Interval<I, T>>;

    fn into_iter(self) -> std::slice::Iter<'a, Interval<I, T>> {
        self.intervals.iter()
    }
}
