//! Interval lookups for copy-number segments.
//!
//! This crate answers one question for the annotation engine: which copy-number
//! segment(s) contain a given `(chromosome, position)`. Segments are grouped per
//! chromosome and each chromosome gets its own [`Overlapper`] backend.
//!
//! All overlap logic lives here. The annotator only consumes the matches and
//! never reimplements containment checks.
//!
//! ## Quick Start
//!
//! ```rust
//! use cnannot_core::models::Segment;
//! use cnannot_overlaprs::{OverlapperType, SegmentIndex};
//!
//! let segments = vec![
//!     Segment { chromosome: "1".to_string(), start: 1000, end: 2000, total_cn: 3, major_cn: Some(2) },
//!     Segment { chromosome: "1".to_string(), start: 1500, end: 2500, total_cn: 4, major_cn: None },
//!     Segment { chromosome: "Y".to_string(), start: 1, end: 500, total_cn: 1, major_cn: Some(1) },
//! ];
//!
//! let index = SegmentIndex::build(segments, OverlapperType::Bits);
//!
//! // overlapping segments come back in input order, the first one wins
//! assert_eq!(index.find_containing("1", 1800).len(), 2);
//! assert_eq!(index.find_first("1", 1800).unwrap().total_cn, 3);
//!
//! // no segment is an explicit `None`, never a default value
//! assert!(index.find_first("1", 5000).is_none());
//! assert!(index.has_y_segment());
//! ```
//!
//! ## Backends
//!
//! [`Bits`] keeps intervals sorted by start and binary-searches the first
//! candidate, which is what you want for genome-wide segment tables. [`Linear`]
//! scans every interval of the chromosome in input order; it is the reference
//! behaviour and is fine for small tables.

/// Binary Interval Search implementation.
///
/// See [`Bits`] for details.
pub mod bits;

/// Input-ordered linear scan implementation.
///
/// See [`Linear`] for details.
pub mod linear;

/// Genome-wide segment index.
///
/// See [`SegmentIndex`] for details.
pub mod segment_index;

/// Core traits for overlap operations.
///
/// See [`Overlapper`] for the main trait.
pub mod traits;

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

// re-exports
pub use self::bits::Bits;
pub use self::linear::Linear;
pub use self::segment_index::{IntoSegmentIndex, SegmentIndex};
pub use self::traits::{Interval, Overlapper};

/// The type of overlap data structure to use for every chromosome of a
/// [`SegmentIndex`].
///
/// # Variants
///
/// * `Bits` - Binary Interval Search. Sorted by start, logarithmic lookups.
/// * `Linear` - Plain scan in input order, O(segments) per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapperType {
    #[default]
    Bits,
    Linear,
}

#[derive(Debug, Error, PartialEq)]
#[error("Invalid backend type: {0}. Valid options are 'bits' or 'linear'")]
pub struct InvalidOverlapperType(pub String);

impl FromStr for OverlapperType {
    type Err = InvalidOverlapperType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bits" => Ok(OverlapperType::Bits),
            "linear" => Ok(OverlapperType::Linear),
            _ => Err(InvalidOverlapperType(s.to_string())),
        }
    }
}

impl Display for OverlapperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapperType::Bits => write!(f, "bits"),
            OverlapperType::Linear => write!(f, "linear"),
        }
    }
}
