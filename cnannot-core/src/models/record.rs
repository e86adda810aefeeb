#[cfg(feature = "serde")]
use serde::Serialize;

///
/// One row of the primary output table.
///
/// Field names double as the output column names. `minor_cn` is signed: a
/// segment whose major copy number exceeds its total yields a negative value,
/// which is kept as is.
///
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AnnotatedRecord {
    pub mutation_id: String,
    pub ref_counts: Option<u32>,
    pub var_counts: Option<u32>,
    pub normal_cn: u32,
    pub major_cn: u32,
    pub minor_cn: i64,
}

impl AnnotatedRecord {
    /// No unresolved field; only complete rows reach the final table
    pub fn is_complete(&self) -> bool {
        self.ref_counts.is_some() && self.var_counts.is_some()
    }
}

/// A locus that matched no segment and received the fallback copy numbers.
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct WarningEntry {
    pub mutation_id: String,
}

/// A locus removed from the primary table because a read count was missing.
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DroppedEntry {
    pub mutation_id: String,
}

impl From<&AnnotatedRecord> for DroppedEntry {
    fn from(record: &AnnotatedRecord) -> Self {
        DroppedEntry {
            mutation_id: record.mutation_id.clone(),
        }
    }
}
