//! # cnannot
//!
//! Allele-specific copy-number annotation of point variants. Each variant is
//! given the copy-number state of the segment that contains it, producing a
//! PyClone input table.
//!
//! This crate only re-exports the workspace crates behind features:
//!
//! * `core` - data model and file helpers
//! * `io` - segment table and VCF readers, atomic table writers
//! * `overlaprs` - the per-chromosome segment index
//! * `annotate` - ploidy policy, annotator, accumulator and validation

#[cfg(feature = "core")]
#[doc(inline)]
pub use cnannot_core as core;

#[cfg(feature = "io")]
#[doc(inline)]
pub use cnannot_io as io;

#[cfg(feature = "overlaprs")]
#[doc(inline)]
pub use cnannot_overlaprs as overlaprs;

#[cfg(feature = "annotate")]
#[doc(inline)]
pub use cnannot_annotate as annotate;
