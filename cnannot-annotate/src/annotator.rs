use rayon::prelude::*;

use cnannot_core::consts::{FALLBACK_MAJOR_CN, FALLBACK_MINOR_CN};
use cnannot_core::models::{AnnotatedRecord, VariantLocus, WarningEntry};
use cnannot_overlaprs::SegmentIndex;

use crate::ploidy::PloidyPolicy;

/// Outcome of annotating one locus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub record: AnnotatedRecord,
    /// Set when no segment contained the locus and fallback copy numbers were used
    pub warning: Option<WarningEntry>,
}

///
/// Annotate a single locus.
///
/// A single lookup supplies both the total and the major copy number, so they
/// always come from the same segment: the first one in input order that
/// contains the locus.
///
/// - segment with a major copy number `a`: `major = a`, `minor = total - a`
/// - segment without one: `major = total`, `minor = 0`
/// - no segment: `major = 1`, `minor = 1`, plus a warning entry
///
/// `minor` is not clamped, a major copy number larger than the total yields a
/// negative value.
///
pub fn annotate<P: PloidyPolicy + ?Sized>(
    locus: &VariantLocus,
    index: &SegmentIndex,
    policy: &P,
) -> Annotation {
    let mutation_id = locus.mutation_id();

    let (major_cn, minor_cn, warning) = match index.find_first(&locus.chromosome, locus.position) {
        Some(segment) => match segment.major_cn {
            Some(major) => (major, segment.total_cn as i64 - major as i64, None),
            None => (segment.total_cn, 0, None),
        },
        None => (
            FALLBACK_MAJOR_CN,
            FALLBACK_MINOR_CN,
            Some(WarningEntry {
                mutation_id: mutation_id.clone(),
            }),
        ),
    };

    let normal_cn = policy.normal_copy_number(&locus.chromosome, index.has_y_segment());

    Annotation {
        record: AnnotatedRecord {
            mutation_id,
            ref_counts: locus.ref_count,
            var_counts: locus.var_count,
            normal_cn,
            major_cn,
            minor_cn,
        },
        warning,
    }
}

/// A segment index paired with the ploidy policy used against it.
pub struct Annotator<'a, P: PloidyPolicy> {
    index: &'a SegmentIndex,
    policy: &'a P,
}

impl<'a, P: PloidyPolicy> Annotator<'a, P> {
    pub fn new(index: &'a SegmentIndex, policy: &'a P) -> Self {
        Annotator { index, policy }
    }

    pub fn annotate(&self, locus: &VariantLocus) -> Annotation {
        annotate(locus, self.index, self.policy)
    }

    /// Annotate loci one after the other, in input order.
    pub fn annotate_all(&self, loci: &[VariantLocus]) -> Vec<Annotation> {
        loci.iter().map(|locus| self.annotate(locus)).collect()
    }

    /// Same output as [`Annotator::annotate_all`], computed with rayon.
    pub fn par_annotate_all(&self, loci: &[VariantLocus]) -> Vec<Annotation> {
        loci.par_iter().map(|locus| self.annotate(locus)).collect()
    }

    pub fn index(&self) -> &SegmentIndex {
        self.index
    }
}
