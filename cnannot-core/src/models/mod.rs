pub mod interval;
pub mod locus;
pub mod record;
pub mod segment;

// re-export for cleaner imports
pub use self::interval::Interval;
pub use self::locus::VariantLocus;
pub use self::record::{AnnotatedRecord, DroppedEntry, WarningEntry};
pub use self::segment::Segment;
