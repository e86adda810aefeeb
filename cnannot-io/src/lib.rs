//! # Input/Output for copy-number annotation.
//!
//! Small, io focused crate. It reads the two inputs of an annotation run, a
//! tab-delimited copy-number segment table (Sequenza `_segments.txt` by
//! default) and a VCF with per-sample allele depths, and writes the delimited
//! output tables.
//!
//! Output tables are staged into temporary files next to their destination and
//! only renamed into place by [`StagedTable::commit`], so a run that fails
//! halfway never leaves a primary table behind that looks complete.
//!
pub mod error;
pub mod segments;
pub mod tsv;
pub mod vcf;

// re-expose core functions
pub use error::*;
pub use segments::*;
pub use tsv::*;
pub use vcf::*;
