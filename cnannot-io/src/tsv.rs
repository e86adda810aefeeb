use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use log::debug;
use serde::Serialize;
use tempfile::NamedTempFile;

use cnannot_core::consts::{DELIMITER, MUTATION_ID_COL_NAME, OUTPUT_COLUMNS};
use cnannot_core::models::{AnnotatedRecord, DroppedEntry, WarningEntry};

use crate::error::TableWriteError;

///
/// A fully written table waiting in a temporary file next to its destination.
///
/// Dropping a `StagedTable` without calling [`StagedTable::commit`] deletes the
/// temporary file, so nothing appears at the destination.
///
pub struct StagedTable {
    file: NamedTempFile,
    destination: PathBuf,
    rows: usize,
}

impl StagedTable {
    /// Atomically rename the staged file to its destination.
    pub fn commit(self) -> Result<PathBuf, TableWriteError> {
        let StagedTable {
            file,
            destination,
            rows,
        } = self;

        file.persist(&destination)
            .map_err(|e| TableWriteError::Persist {
                path: destination.clone(),
                source: e.error,
            })?;

        debug!("Wrote {} rows to {}", rows, destination.display());
        Ok(destination)
    }

    /// Number of data rows, header excluded
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

///
/// Write a tab-delimited table with an explicit header into a temporary file
/// in the destination's directory.
///
/// # Arguments
/// - path: final location of the table
/// - header: column names, written as the first line
/// - rows: serializable rows whose fields follow `header`
///
pub fn stage_table<S, I>(
    path: &Path,
    header: &[&str],
    rows: I,
) -> Result<StagedTable, TableWriteError>
where
    S: Serialize,
    I: IntoIterator<Item = S>,
{
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    create_dir_all(parent).map_err(|e| TableWriteError::ParentDirectoryCreation {
        path: parent.to_path_buf(),
        source: e,
    })?;

    let file = NamedTempFile::new_in(parent)?;
    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_writer(file);

    wtr.write_record(header)?;
    let mut count = 0;
    for row in rows {
        wtr.serialize(row)?;
        count += 1;
    }
    wtr.flush()?;

    let file = wtr.into_inner().map_err(|e| e.into_error())?;

    Ok(StagedTable {
        file,
        destination: path.to_path_buf(),
        rows: count,
    })
}

/// Stage the primary annotation table.
pub fn stage_annotation_table(
    path: &Path,
    records: &[AnnotatedRecord],
) -> Result<StagedTable, TableWriteError> {
    stage_table(path, &OUTPUT_COLUMNS, records)
}

/// Stage the table of loci that matched no segment.
pub fn stage_warning_table(
    path: &Path,
    warnings: &[WarningEntry],
) -> Result<StagedTable, TableWriteError> {
    stage_table(path, &[MUTATION_ID_COL_NAME], warnings)
}

/// Stage the table of loci dropped for missing read counts.
pub fn stage_dropped_table(
    path: &Path,
    dropped: &[DroppedEntry],
) -> Result<StagedTable, TableWriteError> {
    stage_table(path, &[MUTATION_ID_COL_NAME], dropped)
}
