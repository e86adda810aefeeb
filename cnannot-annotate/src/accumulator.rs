use cnannot_core::models::{AnnotatedRecord, DroppedEntry, WarningEntry};

use crate::annotator::Annotation;

/// The finished output of an annotation run, in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnnotationTables {
    /// Complete rows of the primary table
    pub records: Vec<AnnotatedRecord>,
    /// Loci that matched no segment
    pub warnings: Vec<WarningEntry>,
    /// Loci removed for a missing read count
    pub dropped: Vec<DroppedEntry>,
}

impl AnnotationTables {
    /// Number of loci that went into the tables
    pub fn loci(&self) -> usize {
        self.records.len() + self.dropped.len()
    }
}

///
/// Collects annotations as loci are processed.
///
/// Rows are only handed out by [`ResultAccumulator::finalize`], which consumes
/// the accumulator, so a partially filled table can't be observed.
///
#[derive(Debug, Default)]
pub struct ResultAccumulator {
    records: Vec<AnnotatedRecord>,
    warnings: Vec<WarningEntry>,
    dropped: Vec<DroppedEntry>,
}

impl ResultAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ResultAccumulator {
            records: Vec::with_capacity(capacity),
            warnings: Vec::new(),
            dropped: Vec::new(),
        }
    }

    ///
    /// Record one annotation.
    ///
    /// A record missing either read count goes to the dropped ledger instead
    /// of the primary table, and its warning (if any) is discarded with it.
    /// The warnings table therefore only lists loci that also appear in the
    /// primary table; a locus that matched no segment and lacks read counts
    /// is reported once, in the dropped ledger.
    ///
    pub fn push(&mut self, annotation: Annotation) {
        let Annotation { record, warning } = annotation;

        if !record.is_complete() {
            self.dropped.push(DroppedEntry::from(&record));
            return;
        }

        if let Some(warning) = warning {
            self.warnings.push(warning);
        }
        self.records.push(record);
    }

    /// Loci pushed so far, dropped ones included
    pub fn len(&self) -> usize {
        self.records.len() + self.dropped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn finalize(self) -> AnnotationTables {
        AnnotationTables {
            records: self.records,
            warnings: self.warnings,
            dropped: self.dropped,
        }
    }
}

impl Extend<Annotation> for ResultAccumulator {
    fn extend<T: IntoIterator<Item = Annotation>>(&mut self, iter: T) {
        for annotation in iter {
            self.push(annotation);
        }
    }
}

impl FromIterator<Annotation> for ResultAccumulator {
    fn from_iter<T: IntoIterator<Item = Annotation>>(iter: T) -> Self {
        let mut acc = ResultAccumulator::new();
        acc.extend(iter);
        acc
    }
}
