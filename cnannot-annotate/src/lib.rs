//! # Copy-number annotation of point variants
//!
//! Assigns each variant locus the allele-specific copy-number state of the
//! segment that contains it, producing PyClone input rows.
//!
//! ```rust
//! use cnannot_annotate::{Annotator, ResultAccumulator, SexChromosomePloidy};
//! use cnannot_core::models::{Segment, VariantLocus};
//! use cnannot_overlaprs::{OverlapperType, SegmentIndex};
//!
//! let index = SegmentIndex::build(
//!     vec![Segment { chromosome: "1".to_string(), start: 1000, end: 2000, total_cn: 3, major_cn: Some(2) }],
//!     OverlapperType::Bits,
//! );
//! let policy = SexChromosomePloidy::default();
//! let annotator = Annotator::new(&index, &policy);
//!
//! let loci = vec![
//!     VariantLocus::new("1".to_string(), 1500, Some(10), Some(5)),
//!     VariantLocus::new("1".to_string(), 5000, Some(8), Some(2)),
//! ];
//!
//! let tables: ResultAccumulator = annotator.annotate_all(&loci).into_iter().collect();
//! let tables = tables.finalize();
//!
//! assert_eq!(tables.records[0].major_cn, 2);
//! assert_eq!(tables.records[0].minor_cn, 1);
//! assert_eq!(tables.warnings[0].mutation_id, "1:5000");
//! ```
pub mod accumulator;
pub mod annotator;
pub mod config;
pub mod consts;
pub mod ploidy;
pub mod validation;

pub use accumulator::{AnnotationTables, ResultAccumulator};
pub use annotator::{Annotation, Annotator, annotate};
pub use config::{AnnotateConfig, ConfigError, PloidyConfig};
pub use ploidy::{PloidyPolicy, SexChromosomePloidy};
pub use validation::{ValidationReport, validate};

use cnannot_core::models::VariantLocus;
use cnannot_overlaprs::SegmentIndex;

///
/// Annotate every locus and finalize the output tables.
///
/// # Arguments
/// - loci: variant loci in input order
/// - index: the sample's segment index
/// - policy: normal copy-number policy
/// - parallel: annotate with rayon; the output order is the same either way
///
pub fn annotate_loci<P: PloidyPolicy>(
    loci: &[VariantLocus],
    index: &SegmentIndex,
    policy: &P,
    parallel: bool,
) -> AnnotationTables {
    let annotator = Annotator::new(index, policy);
    let annotations = if parallel {
        annotator.par_annotate_all(loci)
    } else {
        annotator.annotate_all(loci)
    };

    let mut acc = ResultAccumulator::with_capacity(loci.len());
    acc.extend(annotations);
    acc.finalize()
}
