use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use cnannot_core::consts::DELIMITER;
use cnannot_core::models::Segment;
use cnannot_core::utils::{get_dynamic_reader, normalize_chromosome};

use crate::error::SegmentTableError;

/// Tokens treated as "no value" in the optional major copy-number column.
const MISSING_VALUES: [&str; 5] = ["", "NA", "NaN", "nan", "."];

///
/// Header names of the segment table columns. The defaults match the
/// `_segments.txt` files written by Sequenza.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SegmentColumns {
    pub chromosome: String,
    pub start: String,
    pub end: String,
    pub total_cn: String,
    /// Optional; when `None`, or absent from the header, every segment lacks
    /// a major copy number.
    pub major_cn: Option<String>,
}

impl Default for SegmentColumns {
    fn default() -> Self {
        SegmentColumns {
            chromosome: "chromosome".to_string(),
            start: "start.pos".to_string(),
            end: "end.pos".to_string(),
            total_cn: "CNt".to_string(),
            major_cn: Some("A".to_string()),
        }
    }
}

/// Resolved positions of the columns in one particular header.
struct ColumnIndices {
    chromosome: usize,
    start: usize,
    end: usize,
    total_cn: usize,
    major_cn: Option<usize>,
}

impl ColumnIndices {
    fn resolve(
        headers: &StringRecord,
        columns: &SegmentColumns,
    ) -> Result<Self, SegmentTableError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| SegmentTableError::MissingColumn(name.to_string()))
        };

        let major_cn = columns.major_cn.as_deref().and_then(|name| {
            let idx = find(name);
            if idx.is_none() {
                info!(
                    "Segment table has no '{}' column; major copy numbers are treated as missing",
                    name
                );
            }
            idx
        });

        Ok(ColumnIndices {
            chromosome: require(&columns.chromosome)?,
            start: require(&columns.start)?,
            end: require(&columns.end)?,
            total_cn: require(&columns.total_cn)?,
            major_cn,
        })
    }
}

/// Parse a non-negative integer, also accepting integral floats such as `1e+05`
/// or `3.0` the way R writes numeric columns.
fn parse_integral(value: &str) -> Option<u64> {
    value.parse::<u64>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn field<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("")
}

fn parse_u64(
    record: &StringRecord,
    idx: usize,
    column: &str,
    line: u64,
) -> Result<u64, SegmentTableError> {
    let value = field(record, idx);
    parse_integral(value).ok_or_else(|| SegmentTableError::InvalidValue {
        column: column.to_string(),
        value: value.to_string(),
        line,
    })
}

fn parse_u32(
    record: &StringRecord,
    idx: usize,
    column: &str,
    line: u64,
) -> Result<u32, SegmentTableError> {
    let value = field(record, idx);
    parse_integral(value)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| SegmentTableError::InvalidValue {
            column: column.to_string(),
            value: value.to_string(),
            line,
        })
}

///
/// Read segments from any tab-delimited source with a header row.
///
/// Chromosome names are normalized with [normalize_chromosome] so that they
/// compare equal to loci normalized with the same `prefix_len`. Rows are
/// returned in file order, which is the order the tie-break rule relies on.
///
/// # Arguments
/// - reader: the raw table
/// - columns: header names to look for
/// - prefix_len: number of leading characters stripped from chromosome names
///
pub fn read_segments<R: Read>(
    reader: R,
    columns: &SegmentColumns,
    prefix_len: usize,
) -> Result<Vec<Segment>, SegmentTableError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let idx = ColumnIndices::resolve(&headers, columns)?;
    let major_name = columns.major_cn.as_deref().unwrap_or_default();

    let mut segments = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let chromosome = normalize_chromosome(field(&record, idx.chromosome), prefix_len);
        let start = parse_u64(&record, idx.start, &columns.start, line)?;
        let end = parse_u64(&record, idx.end, &columns.end, line)?;
        let total_cn = parse_u32(&record, idx.total_cn, &columns.total_cn, line)?;
        let major_cn = match idx.major_cn {
            Some(i) if !MISSING_VALUES.contains(&field(&record, i)) => {
                Some(parse_u32(&record, i, major_name, line)?)
            }
            _ => None,
        };

        let segment = Segment::try_new(chromosome, start, end, total_cn, major_cn)
            .map_err(|source| SegmentTableError::InvalidSegment { line, source })?;
        segments.push(segment);
    }

    Ok(segments)
}

///
/// Read a segment table from disk (plain or gzipped).
///
/// An input with a header but no rows is rejected.
///
pub fn read_segment_table(
    path: &Path,
    columns: &SegmentColumns,
    prefix_len: usize,
) -> Result<Vec<Segment>, SegmentTableError> {
    let reader = get_dynamic_reader(path)
        .map_err(|e| SegmentTableError::FileReadError(format!("{e:#}")))?;

    let segments = read_segments(reader, columns, prefix_len)?;
    if segments.is_empty() {
        return Err(SegmentTableError::EmptySegmentTable(
            path.display().to_string(),
        ));
    }

    debug!("Read {} segments from {}", segments.len(), path.display());

    Ok(segments)
}
