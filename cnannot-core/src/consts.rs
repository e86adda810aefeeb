/// Chromosome name used to infer that a sample carries a Y chromosome.
pub const Y_CHROMOSOME: &str = "Y";
pub const X_CHROMOSOME: &str = "X";

/// Number of leading characters stripped from chromosome names (`chr1` -> `1`).
pub const DEFAULT_CHROM_PREFIX_LEN: usize = 3;

/// Copy numbers assigned to loci that fall outside every segment.
pub const FALLBACK_MAJOR_CN: u32 = 1;
pub const FALLBACK_MINOR_CN: i64 = 1;

pub const DEFAULT_AUTOSOMAL_PLOIDY: u32 = 2;
pub const DEFAULT_HAPLOID_PLOIDY: u32 = 1;

pub const MUTATION_ID_SEPARATOR: char = ':';
pub const DELIMITER: u8 = b'\t';

// output columns, in order
pub const MUTATION_ID_COL_NAME: &str = "mutation_id";
pub const REF_COUNTS_COL_NAME: &str = "ref_counts";
pub const VAR_COUNTS_COL_NAME: &str = "var_counts";
pub const NORMAL_CN_COL_NAME: &str = "normal_cn";
pub const MAJOR_CN_COL_NAME: &str = "major_cn";
pub const MINOR_CN_COL_NAME: &str = "minor_cn";

pub const OUTPUT_COLUMNS: [&str; 6] = [
    MUTATION_ID_COL_NAME,
    REF_COUNTS_COL_NAME,
    VAR_COUNTS_COL_NAME,
    NORMAL_CN_COL_NAME,
    MAJOR_CN_COL_NAME,
    MINOR_CN_COL_NAME,
];

pub const GZ_FILE_EXTENSION: &str = "gz";
pub const BGZ_FILE_EXTENSION: &str = "bgz";
