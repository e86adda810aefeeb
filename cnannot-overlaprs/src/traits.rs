use num_traits::{PrimInt, Unsigned};

pub use cnannot_core::models::Interval;

/// A per-chromosome structure answering overlap queries on closed intervals.
pub trait Overlapper<I, T>: Send + Sync
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn build(intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized;

    /// Number of intervals held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All intervals sharing at least one position with `[start, end]`
    fn find(&self, start: I, end: I) -> Vec<Interval<I, T>> {
        self.find_iter(start, end).cloned().collect()
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a>;

    /// All intervals containing a single position
    fn find_point_iter<'a>(&'a self, pos: I) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        self.find_iter(pos, pos)
    }
}
