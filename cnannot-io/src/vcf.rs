//! Minimal VCF reading for copy-number annotation.
//!
//! Only what the annotator needs is parsed: CHROM, POS and the designated
//! sample's `AD` (allelic depths) value. `AD[0]` is the reference depth and
//! `AD[1]` the first alternate depth.

use std::io::{BufRead, BufReader, Read};

use log::debug;

use cnannot_core::models::VariantLocus;
use cnannot_core::utils::{get_dynamic_reader_w_stdin, normalize_chromosome};

use crate::error::VcfError;

const HEADER_PREFIX: &str = "#CHROM";
const FORMAT_COL: usize = 8;
const FIRST_SAMPLE_COL: usize = 9;
const AD_KEY: &str = "AD";
const MISSING: &str = ".";

/// Streams [`VariantLocus`] values out of a VCF, one per data line.
pub struct VcfReader<R: BufRead> {
    reader: R,
    samples: Vec<String>,
    sample_col: usize,
    prefix_len: usize,
    line_buf: String,
    line_no: u64,
}

impl VcfReader<BufReader<Box<dyn Read>>> {
    ///
    /// Open a VCF (plain, gzip or bgzf) or `-` for stdin.
    ///
    /// # Arguments
    /// - path: path to the VCF
    /// - sample: genotype column whose allele depths are read
    /// - prefix_len: leading characters stripped from CHROM
    ///
    pub fn from_path(path: &str, sample: &str, prefix_len: usize) -> Result<Self, VcfError> {
        let reader = get_dynamic_reader_w_stdin(path)
            .map_err(|e| VcfError::FileReadError(format!("{e:#}")))?;
        VcfReader::new(reader, sample, prefix_len)
    }
}

impl<R: BufRead> VcfReader<R> {
    ///
    /// Consume the meta-information lines and the `#CHROM` header, and locate
    /// the sample column.
    ///
    pub fn new(mut reader: R, sample: &str, prefix_len: usize) -> Result<Self, VcfError> {
        let mut line_buf = String::new();
        let mut line_no = 0;

        let samples = loop {
            line_buf.clear();
            if reader.read_line(&mut line_buf)? == 0 {
                return Err(VcfError::MissingHeader);
            }
            line_no += 1;

            let line = line_buf.trim_end_matches(['\n', '\r']);
            if line.starts_with("##") {
                continue;
            }
            if line.starts_with(HEADER_PREFIX) {
                break line
                    .split('\t')
                    .skip(FIRST_SAMPLE_COL)
                    .map(str::to_string)
                    .collect::<Vec<String>>();
            }
            return Err(VcfError::MissingHeader);
        };

        let sample_idx = samples
            .iter()
            .position(|s| s == sample)
            .ok_or_else(|| VcfError::SampleNotFound {
                sample: sample.to_string(),
                available: samples.clone(),
            })?;

        debug!(
            "Reading allele depths for sample '{}' (column {} of {})",
            sample,
            sample_idx + 1,
            samples.len()
        );

        Ok(VcfReader {
            reader,
            samples,
            sample_col: FIRST_SAMPLE_COL + sample_idx,
            prefix_len,
            line_buf,
            line_no,
        })
    }

    /// Sample names from the header, in column order
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    fn parse_record(&self, line: &str) -> Result<VariantLocus, VcfError> {
        let malformed = |reason: String| VcfError::MalformedRecord {
            line: self.line_no,
            reason,
        };

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() <= self.sample_col {
            return Err(malformed(format!(
                "expected at least {} columns, found {}",
                self.sample_col + 1,
                fields.len()
            )));
        }

        let chromosome = normalize_chromosome(fields[0], self.prefix_len);
        let position = fields[1]
            .parse::<u64>()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| malformed(format!("invalid POS '{}'", fields[1])))?;

        let (ref_count, var_count) =
            self.parse_allele_depths(fields[FORMAT_COL], fields[self.sample_col])?;

        Ok(VariantLocus::new(chromosome, position, ref_count, var_count))
    }

    /// Returns `(None, None)` when the genotype carries no AD value at all.
    fn parse_allele_depths(
        &self,
        format: &str,
        genotype: &str,
    ) -> Result<(Option<u32>, Option<u32>), VcfError> {
        let ad = format
            .split(':')
            .position(|key| key == AD_KEY)
            .and_then(|idx| genotype.split(':').nth(idx));

        let ad = match ad {
            Some(ad) if ad != MISSING => ad,
            _ => return Ok((None, None)),
        };

        let malformed = || VcfError::MalformedGenotype {
            line: self.line_no,
            value: ad.to_string(),
        };
        let depth = |value: &str| -> Result<Option<u32>, VcfError> {
            match value {
                MISSING => Ok(None),
                v => v.parse::<u32>().map(Some).map_err(|_| malformed()),
            }
        };

        let mut depths = ad.split(',');
        match (depths.next(), depths.next()) {
            (Some(r), Some(v)) => Ok((depth(r)?, depth(v)?)),
            _ => Err(malformed()),
        }
    }
}

impl<R: BufRead> Iterator for VcfReader<R> {
    type Item = Result<VariantLocus, VcfError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buf.clear();
            match self.reader.read_line(&mut self.line_buf) {
                Ok(0) => return None,
                Ok(_) => self.line_no += 1,
                Err(e) => return Some(Err(e.into())),
            }

            let line = self.line_buf.trim_end_matches(['\n', '\r']);
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            return Some(self.parse_record(line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn mutect_vcf() -> &'static str {
        concat!(
            "##fileformat=VCFv4.2\n",
            "##FORMAT=<ID=AD,Number=R,Type=Integer,Description=\"Allelic depths\">\n",
            "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tNORMAL\tTUMOR\n",
            "chr1\t1500\t.\tA\tT\t.\tPASS\t.\tGT:AD:DP\t0/0:30,0:30\t0/1:10,5:15\n",
            "chr1\t5000\t.\tC\tG\t.\tPASS\t.\tGT:AD\t0/0:20,1\t0/1:8,4\n",
            "\n",
            "chrX\t200\t.\tG\tA\t.\tPASS\t.\tGT:DP\t0/0:12\t0/1:9\n",
            "chr2\t300\t.\tG\tA\t.\tPASS\t.\tGT:AD\t0/0:12,0\t0/1:.\n",
        )
    }

    #[rstest]
    fn test_read_tumor_depths(mutect_vcf: &str) {
        let reader = VcfReader::new(mutect_vcf.as_bytes(), "TUMOR", 3).unwrap();
        assert_eq!(reader.samples(), &["NORMAL".to_string(), "TUMOR".to_string()]);

        let loci: Vec<VariantLocus> = reader.map(|r| r.unwrap()).collect();
        assert_eq!(
            loci,
            vec![
                VariantLocus::new("1".to_string(), 1500, Some(10), Some(5)),
                VariantLocus::new("1".to_string(), 5000, Some(8), Some(4)),
                VariantLocus::new("X".to_string(), 200, None, None),
                VariantLocus::new("2".to_string(), 300, None, None),
            ]
        );
    }

    #[rstest]
    fn test_read_normal_depths(mutect_vcf: &str) {
        let reader = VcfReader::new(mutect_vcf.as_bytes(), "NORMAL", 3).unwrap();
        let first = reader.into_iter().next().unwrap().unwrap();
        assert_eq!((first.ref_count, first.var_count), (Some(30), Some(0)));
    }

    #[rstest]
    fn test_from_gzipped_path(mutect_vcf: &str) {
        use std::io::Write;

        use flate2::Compression;
        use flate2::write::GzEncoder;

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("calls.vcf.gz");
        let mut encoder =
            GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
        encoder.write_all(mutect_vcf.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let loci: Vec<VariantLocus> = VcfReader::from_path(path.to_str().unwrap(), "TUMOR", 3)
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(loci.len(), 4);
        assert_eq!(loci[0].mutation_id(), "1:1500");
    }

    #[rstest]
    fn test_missing_file() {
        let res = VcfReader::from_path("does/not/exist.vcf", "TUMOR", 3);
        assert!(matches!(res, Err(VcfError::FileReadError(_))));
    }

    #[rstest]
    fn test_unknown_sample(mutect_vcf: &str) {
        let res = VcfReader::new(mutect_vcf.as_bytes(), "SAMPLE1", 3);
        match res {
            Err(VcfError::SampleNotFound { sample, available }) => {
                assert_eq!(sample, "SAMPLE1");
                assert_eq!(available, vec!["NORMAL", "TUMOR"]);
            }
            _ => panic!("expected SampleNotFound"),
        }
    }

    #[rstest]
    fn test_missing_header() {
        let vcf = "##fileformat=VCFv4.2\nchr1\t1\t.\tA\tT\t.\tPASS\t.\tAD\t1,2\n";
        assert!(matches!(
            VcfReader::new(vcf.as_bytes(), "TUMOR", 3),
            Err(VcfError::MissingHeader)
        ));
        assert!(matches!(
            VcfReader::new("".as_bytes(), "TUMOR", 3),
            Err(VcfError::MissingHeader)
        ));
    }

    #[rstest]
    #[case("GT:AD\t0/1:ten,5", 2)]
    #[case("GT:AD\t0/1:10", 2)]
    fn test_malformed_allele_depths(#[case] tail: &str, #[case] line: u64) {
        let vcf = format!(
            "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tTUMOR\nchr1\t100\t.\tA\tT\t.\tPASS\t.\t{tail}\n"
        );
        let mut reader = VcfReader::new(vcf.as_bytes(), "TUMOR", 3).unwrap();
        match reader.next() {
            Some(Err(VcfError::MalformedGenotype { line: l, .. })) => assert_eq!(l, line),
            other => panic!("expected MalformedGenotype, got {:?}", other),
        }
    }

    #[rstest]
    fn test_partially_missing_depth() {
        let vcf = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tTUMOR\nchr3\t7\t.\tA\tT\t.\tPASS\t.\tAD\t12,.\n";
        let locus = VcfReader::new(vcf.as_bytes(), "TUMOR", 3)
            .unwrap()
            .next()
            .unwrap()
            .unwrap();
        assert_eq!((locus.ref_count, locus.var_count), (Some(12), None));
    }

    #[rstest]
    #[case("chr1\tzero\t.\tA\tT\t.\tPASS\t.\tAD\t1,2")]
    #[case("chr1\t0\t.\tA\tT\t.\tPASS\t.\tAD\t1,2")]
    #[case("chr1\t10\t.\tA\tT\t.\tPASS\t.\tAD")]
    fn test_malformed_records(#[case] record: &str) {
        let vcf =
            format!("#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tTUMOR\n{record}\n");
        let mut reader = VcfReader::new(vcf.as_bytes(), "TUMOR", 3).unwrap();
        assert!(matches!(
            reader.next(),
            Some(Err(VcfError::MalformedRecord { line: 2, .. }))
        ));
    }
}
