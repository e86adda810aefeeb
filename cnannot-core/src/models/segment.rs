use std::fmt::{self, Display};

use crate::errors::CoreError;
use crate::models::Interval;

///
/// One called copy-number region, e.g. a row of a Sequenza `_segments.txt` file.
///
/// `start` and `end` are both inclusive. `major_cn` is `None` when the caller
/// did not produce an allele-specific split for the region.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Segment {
    pub chromosome: String,
    pub start: u64,
    pub end: u64,
    pub total_cn: u32,
    pub major_cn: Option<u32>,
}

impl Segment {
    ///
    /// Build a segment, rejecting inverted coordinates.
    ///
    pub fn try_new(
        chromosome: String,
        start: u64,
        end: u64,
        total_cn: u32,
        major_cn: Option<u32>,
    ) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidSegmentBounds {
                chromosome,
                start,
                end,
            });
        }
        Ok(Segment {
            chromosome,
            start,
            end,
            total_cn,
            major_cn,
        })
    }

    /// Whether `position` lies in `[start, end]`
    pub fn contains(&self, position: u64) -> bool {
        self.start <= position && position <= self.end
    }

    ///
    /// Convert the segment into an [Interval] whose value is `val`
    /// (the index uses the segment's input ordinal).
    ///
    pub fn to_interval<T>(&self, val: T) -> Interval<u64, T>
    where
        T: Eq + Clone + Send + Sync,
    {
        Interval {
            start: self.start,
            end: self.end,
            val,
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{} (CNt={}, A={})",
            self.chromosome,
            self.start,
            self.end,
            self.total_cn,
            self.major_cn
                .map_or_else(|| "NA".to_string(), |a| a.to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_inverted_segment_is_rejected() {
        let res = Segment::try_new("1".to_string(), 200, 100, 2, None);
        assert!(matches!(res, Err(CoreError::InvalidSegmentBounds { .. })));
    }

    #[rstest]
    fn test_display() {
        let seg = Segment::try_new("1".to_string(), 100, 200, 3, None).unwrap();
        assert_eq!(seg.to_string(), "1:100-200 (CNt=3, A=NA)");
    }

    #[rstest]
    fn test_to_interval_keeps_bounds() {
        let seg = Segment::try_new("X".to_string(), 10, 20, 1, Some(1)).unwrap();
        let iv = seg.to_interval(7usize);
        assert_eq!((iv.start, iv.end, iv.val), (10, 20, 7));
    }
}
