use std::io;
use std::path::PathBuf;

use thiserror::Error;

use cnannot_core::errors::CoreError;

/// Errors raised while reading a copy-number segment table.
#[derive(Error, Debug)]
pub enum SegmentTableError {
    /// The file could not be opened.
    #[error("Can't read segment table: {0}")]
    FileReadError(String),

    /// A required column is absent from the header.
    #[error("Missing required column '{0}' in segment table header")]
    MissingColumn(String),

    /// A cell could not be parsed as a non-negative integer.
    #[error("Invalid value '{value}' in column '{column}' at line {line}")]
    InvalidValue {
        column: String,
        value: String,
        line: u64,
    },

    /// The row parsed but does not describe a valid segment.
    #[error("Invalid segment at line {line}: {source}")]
    InvalidSegment {
        line: u64,
        #[source]
        source: CoreError,
    },

    /// No data rows were found.
    #[error("Corrupted file. 0 segments found in the file: {0}")]
    EmptySegmentTable(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors raised while reading variant records from a VCF.
#[derive(Error, Debug)]
pub enum VcfError {
    /// The file could not be opened.
    #[error("Can't read VCF: {0}")]
    FileReadError(String),

    /// The `#CHROM` header line never appeared before the first record.
    #[error("VCF has no '#CHROM' header line")]
    MissingHeader,

    /// The designated sample is not one of the VCF's genotype columns.
    #[error("Sample '{sample}' not found in VCF header. Available samples: {available:?}")]
    SampleNotFound {
        sample: String,
        available: Vec<String>,
    },

    /// A record is missing required columns or has an invalid position.
    #[error("Malformed VCF record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// The sample's `AD` value is present but cannot be read as two depths.
    #[error("Malformed genotype field at line {line}: AD='{value}'")]
    MalformedGenotype { line: u64, value: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors raised while staging or committing an output table.
#[derive(Error, Debug)]
pub enum TableWriteError {
    #[error("Failed to create output directory {path:?}: {source}")]
    ParentDirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to move staged table into place at {path:?}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
