pub const ANNOTATE_CMD: &str = "annotate";

pub const DEFAULT_SAMPLE: &str = "TUMOR";
pub const DEFAULT_OUTPUT_FILE: &str = "PyClone_input.tsv";
pub const DEFAULT_WARNINGS_FILE: &str = "warning_sequenza_mutations.tsv";
