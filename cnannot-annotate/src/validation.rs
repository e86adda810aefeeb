use log::warn;
use serde::Serialize;

use crate::accumulator::AnnotationTables;

///
/// Data-quality summary of a finished run.
///
/// Nothing here changes the output; the report only counts what the tables
/// already contain.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub input_loci: usize,
    pub records: usize,
    pub warnings: usize,
    pub dropped: usize,
    /// Records whose major copy number exceeds the total
    pub negative_minor: Vec<String>,
    /// Pairs of overlapping segments on the same chromosome
    pub overlapping_segments: usize,
    /// `records + dropped == input_loci`
    pub row_count_consistent: bool,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings == 0
            && self.dropped == 0
            && self.negative_minor.is_empty()
            && self.overlapping_segments == 0
            && self.row_count_consistent
    }

    pub fn with_overlapping_segments(mut self, pairs: usize) -> Self {
        self.overlapping_segments = pairs;
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Log every issue found at `warn` level.
    pub fn log(&self) {
        if !self.row_count_consistent {
            warn!(
                "Row count mismatch: {} loci read but {} records and {} dropped",
                self.input_loci, self.records, self.dropped
            );
        }
        if self.warnings > 0 {
            warn!(
                "{} loci matched no copy-number segment and were given major_cn=1, minor_cn=1",
                self.warnings
            );
        }
        if self.dropped > 0 {
            warn!("{} loci were dropped for missing read counts", self.dropped);
        }
        if !self.negative_minor.is_empty() {
            warn!(
                "{} records have a negative minor copy number: {}",
                self.negative_minor.len(),
                self.negative_minor.join(", ")
            );
        }
        if self.overlapping_segments > 0 {
            warn!(
                "{} pairs of copy-number segments overlap; the first in file order was used",
                self.overlapping_segments
            );
        }
    }
}

///
/// Check finished tables against the number of loci that were read.
///
/// # Arguments
/// - tables: the finalized tables
/// - input_loci: number of loci read from the variant file
///
pub fn validate(tables: &AnnotationTables, input_loci: usize) -> ValidationReport {
    let negative_minor = tables
        .records
        .iter()
        .filter(|r| r.minor_cn < 0)
        .map(|r| r.mutation_id.clone())
        .collect();

    ValidationReport {
        input_loci,
        records: tables.records.len(),
        warnings: tables.warnings.len(),
        dropped: tables.dropped.len(),
        negative_minor,
        overlapping_segments: 0,
        row_count_consistent: tables.records.len() + tables.dropped.len() == input_loci,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use cnannot_core::models::{AnnotatedRecord, DroppedEntry, WarningEntry};

    fn record(id: &str, minor_cn: i64) -> AnnotatedRecord {
        AnnotatedRecord {
            mutation_id: id.to_string(),
            ref_counts: Some(1),
            var_counts: Some(1),
            normal_cn: 2,
            major_cn: 3,
            minor_cn,
        }
    }

    #[fixture]
    fn tables() -> AnnotationTables {
        AnnotationTables {
            records: vec![record("1:10", 1), record("1:20", -1), record("2:5", 0)],
            warnings: vec![WarningEntry {
                mutation_id: "2:5".to_string(),
            }],
            dropped: vec![DroppedEntry {
                mutation_id: "3:1".to_string(),
            }],
        }
    }

    #[rstest]
    fn test_validate_counts(tables: AnnotationTables) {
        let report = validate(&tables, 4);
        assert_eq!(
            report,
            ValidationReport {
                input_loci: 4,
                records: 3,
                warnings: 1,
                dropped: 1,
                negative_minor: vec!["1:20".to_string()],
                overlapping_segments: 0,
                row_count_consistent: true,
            }
        );
        assert!(!report.is_clean());
    }

    #[rstest]
    fn test_row_count_mismatch(tables: AnnotationTables) {
        let report = validate(&tables, 7);
        assert!(!report.row_count_consistent);
    }

    #[rstest]
    fn test_clean_report() {
        let tables = AnnotationTables {
            records: vec![record("1:10", 0)],
            ..Default::default()
        };
        assert!(validate(&tables, 1).is_clean());
        assert!(!validate(&tables, 1).with_overlapping_segments(2).is_clean());
    }

    #[rstest]
    fn test_report_serializes_to_json(tables: AnnotationTables) {
        let report = validate(&tables, 4).with_overlapping_segments(3);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["negative_minor"][0], "1:20");
        assert_eq!(json["overlapping_segments"], 3);
        assert_eq!(json["row_count_consistent"], true);
    }
}
