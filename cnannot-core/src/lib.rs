//! Core data model for copy-number annotation of point variants.
//!
//! This crate holds the types that every other `cnannot` crate passes around:
//! copy-number [`Segment`](models::Segment)s, the [`VariantLocus`](models::VariantLocus)
//! being annotated and the [`AnnotatedRecord`](models::AnnotatedRecord) that ends up in the
//! PyClone-style output table. It also has a handful of small helpers for opening
//! (optionally gzipped) input files and normalizing chromosome names.
//!
//! ```rust
//! use cnannot_core::models::{Segment, VariantLocus};
//! use cnannot_core::utils::normalize_chromosome;
//!
//! let segment = Segment {
//!     chromosome: normalize_chromosome("chr1", 3),
//!     start: 1000,
//!     end: 2000,
//!     total_cn: 3,
//!     major_cn: Some(2),
//! };
//! let locus = VariantLocus::new(normalize_chromosome("chr1", 3), 1500, Some(10), Some(5));
//!
//! assert!(segment.contains(locus.position));
//! assert_eq!(locus.mutation_id(), "1:1500");
//! ```
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;
