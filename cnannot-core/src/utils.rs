use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::consts::{BGZ_FILE_EXTENSION, GZ_FILE_EXTENSION};

///
/// Strip a fixed-length assembly prefix from a chromosome name.
///
/// The first `prefix_len` characters are removed no matter what they are, so
/// `chr1` and `Chr1` both become `1`, while a name that never had a prefix
/// (`1`) is cut down to an empty string and will not match a prefixed
/// segment table. Segments and loci must go through the same call.
///
/// # Arguments
///
/// - name: the chromosome name as found in the input file
/// - prefix_len: number of leading characters to drop (0 keeps the name)
///
pub fn normalize_chromosome(name: &str, prefix_len: usize) -> String {
    name.chars().skip(prefix_len).collect()
}

///
/// Get a reader for either a gzip'd (or bgzf) or plain text file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = matches!(
        path.extension().and_then(OsStr::to_str),
        Some(GZ_FILE_EXTENSION) | Some(BGZ_FILE_EXTENSION)
    );
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        let file_path = Path::new(file_path_str);
        get_dynamic_reader(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{BufRead, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("chr1", 3, "1")]
    #[case("chrX", 3, "X")]
    #[case("Chr22", 3, "22")]
    #[case("1", 3, "")]
    #[case("chr1", 0, "chr1")]
    #[case("", 3, "")]
    fn test_normalize_chromosome(#[case] name: &str, #[case] len: usize, #[case] expected: &str) {
        assert_eq!(normalize_chromosome(name, len), expected);
    }

    #[rstest]
    fn test_dynamic_reader_reads_gzip() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("segments.txt.gz");

        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        writeln!(encoder, "chr1\t1\t10").unwrap();
        encoder.finish().unwrap();

        let reader = get_dynamic_reader(&path).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["chr1\t1\t10".to_string()]);
    }

    #[rstest]
    fn test_dynamic_reader_missing_file() {
        let res = get_dynamic_reader(Path::new("does/not/exist.tsv"));
        assert!(res.is_err());
    }
}
