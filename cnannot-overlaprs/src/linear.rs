use num_traits::{PrimInt, Unsigned};

use super::Overlapper;
use cnannot_core::models::Interval;

/// Intervals kept exactly as they were given and scanned front to back.
///
/// Every query costs O(n), but hits come back in input order, which makes this
/// the reference the other backends are checked against.
///
/// ```
/// use cnannot_overlaprs::{Linear, Overlapper, Interval};
///
/// let linear = Linear::build(vec![
///     Interval { start: 500u64, end: 900, val: "late" },
///     Interval { start: 100, end: 600, val: "early" },
/// ]);
///
/// let vals: Vec<&str> = linear.find_point_iter(550).map(|iv| iv.val).collect();
/// assert_eq!(vals, vec!["late", "early"]);
/// ```
#[derive(Debug, Clone)]
pub struct Linear<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    pub intervals: Vec<Interval<I, T>>,
}

impl<I, T> Overlapper<I, T> for Linear<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn build(intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized,
    {
        Linear { intervals }
    }

    fn len(&self) -> usize {
        self.intervals.len()
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        Box::new(
            self.intervals
                .iter()
                .filter(move |iv| iv.overlap(start, end)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_hits_keep_input_order() {
        let linear = Linear::build(vec![
            Interval { start: 10u64, end: 20, val: 0usize },
            Interval { start: 1, end: 30, val: 1 },
            Interval { start: 15, end: 15, val: 2 },
        ]);
        let hits: Vec<usize> = linear.find_point_iter(15).map(|iv| iv.val).collect();
        assert_eq!(hits, vec![0, 1, 2]);
    }

    #[rstest]
    fn test_no_hits() {
        let linear = Linear::build(vec![Interval { start: 10u64, end: 20, val: () }]);
        assert!(linear.find(21, 40).is_empty());
        assert!(linear.find(0, 9).is_empty());
        assert_eq!(linear.find(0, 10).len(), 1);
    }
}
