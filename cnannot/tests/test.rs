use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rstest::*;

use cnannot::annotate::{AnnotateConfig, AnnotationTables, annotate_loci, validate};
use cnannot::core::models::VariantLocus;
use cnannot::io::{
    SegmentColumns, VcfReader, read_segment_table, stage_annotation_table, stage_warning_table,
};
use cnannot::overlaprs::{IntoSegmentIndex, OverlapperType, SegmentIndex};

#[fixture]
fn path_to_segments() -> &'static str {
    "../tests/data/sample_segments.txt"
}

#[fixture]
fn path_to_segments_gz() -> &'static str {
    "../tests/data/sample_segments.txt.gz"
}

#[fixture]
fn path_to_vcf() -> &'static str {
    "../tests/data/mutect.vcf"
}

#[fixture]
fn path_to_vcf_gz() -> &'static str {
    "../tests/data/mutect.vcf.gz"
}

#[fixture]
fn path_to_expected_output() -> &'static str {
    "../tests/data/expected_PyClone_input.tsv"
}

#[fixture]
fn path_to_expected_warnings() -> &'static str {
    "../tests/data/expected_warnings.tsv"
}

fn build_index(path: &str, overlapper_type: OverlapperType) -> SegmentIndex {
    read_segment_table(Path::new(path), &SegmentColumns::default(), 3)
        .unwrap()
        .into_segment_index(overlapper_type)
}

fn read_loci(path: &str, sample: &str) -> Vec<VariantLocus> {
    VcfReader::from_path(path, sample, 3)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fn run(
    segments: &str,
    vcf: &str,
    overlapper_type: OverlapperType,
    parallel: bool,
) -> AnnotationTables {
    let config = AnnotateConfig::default();
    let index = build_index(segments, overlapper_type);
    let loci = read_loci(vcf, &config.sample);
    annotate_loci(&loci, &index, &config.policy(), parallel)
}

#[rstest]
#[case(OverlapperType::Bits, false)]
#[case(OverlapperType::Bits, true)]
#[case(OverlapperType::Linear, false)]
#[case(OverlapperType::Linear, true)]
fn test_end_to_end_tables(
    path_to_segments: &str,
    path_to_vcf: &str,
    path_to_expected_output: &str,
    path_to_expected_warnings: &str,
    #[case] overlapper_type: OverlapperType,
    #[case] parallel: bool,
) {
    let tables = run(path_to_segments, path_to_vcf, overlapper_type, parallel);

    let tempdir = tempfile::tempdir().unwrap();
    let output: PathBuf = tempdir.path().join("PyClone_input.tsv");
    let warnings: PathBuf = tempdir.path().join("warning_sequenza_mutations.tsv");

    stage_annotation_table(&output, &tables.records)
        .unwrap()
        .commit()
        .unwrap();
    stage_warning_table(&warnings, &tables.warnings)
        .unwrap()
        .commit()
        .unwrap();

    assert_eq!(
        read_to_string(&output).unwrap(),
        read_to_string(path_to_expected_output).unwrap()
    );
    assert_eq!(
        read_to_string(&warnings).unwrap(),
        read_to_string(path_to_expected_warnings).unwrap()
    );
}

#[rstest]
fn test_repeated_runs_are_byte_identical(path_to_segments: &str, path_to_vcf: &str) {
    let tempdir = tempfile::tempdir().unwrap();

    let outputs: Vec<String> = (0..2)
        .map(|i| {
            let tables = run(path_to_segments, path_to_vcf, OverlapperType::Bits, true);
            let path = tempdir.path().join(format!("run_{i}.tsv"));
            stage_annotation_table(&path, &tables.records)
                .unwrap()
                .commit()
                .unwrap();
            read_to_string(&path).unwrap()
        })
        .collect();

    assert_eq!(outputs[0], outputs[1]);
}

#[rstest]
fn test_gzipped_inputs_match_plain(
    path_to_segments: &str,
    path_to_segments_gz: &str,
    path_to_vcf: &str,
    path_to_vcf_gz: &str,
) {
    let plain = run(path_to_segments, path_to_vcf, OverlapperType::Bits, false);
    let gzipped = run(path_to_segments_gz, path_to_vcf_gz, OverlapperType::Bits, false);
    assert_eq!(plain, gzipped);
}

#[rstest]
fn test_row_counts_and_ledgers(path_to_segments: &str, path_to_vcf: &str) {
    let index = build_index(path_to_segments, OverlapperType::Bits);
    let loci = read_loci(path_to_vcf, "TUMOR");
    let tables = annotate_loci(&loci, &index, &AnnotateConfig::default().policy(), false);

    assert_eq!(loci.len(), 9);
    assert_eq!(tables.records.len(), 8);
    assert_eq!(tables.dropped.len(), 1);
    assert_eq!(tables.dropped[0].mutation_id, "3:100");
    assert!(tables.warnings.len() <= tables.records.len());

    let report =
        validate(&tables, loci.len()).with_overlapping_segments(index.overlapping_pairs());
    assert!(report.row_count_consistent);
    assert_eq!(report.negative_minor, vec!["2:300".to_string()]);
    assert_eq!(report.overlapping_segments, 1);
    assert_eq!(report.warnings, 2);
}

#[rstest]
fn test_index_from_sequenza_table(path_to_segments: &str) {
    let index = build_index(path_to_segments, OverlapperType::Bits);

    assert_eq!(index.len(), 6);
    assert!(index.has_y_segment());
    assert_eq!(index.chromosomes(), vec!["1", "2", "X", "Y"]);

    // overlapping calls: the first row in the file wins
    let first = index.find_first("1", 1800).unwrap();
    assert_eq!((first.total_cn, first.major_cn), (3, Some(2)));
    assert_eq!(index.find_containing("1", 1800).len(), 2);

    // 1e+05 end coordinate
    assert!(index.find_first("X", 100_000).is_some());
    assert!(index.find_first("X", 100_001).is_none());
}

#[rstest]
fn test_config_files() {
    let toml = AnnotateConfig::try_from(Path::new("../tests/data/cnannot.toml")).unwrap();
    assert_eq!(toml, AnnotateConfig::default());

    let yaml = AnnotateConfig::try_from(Path::new("../tests/data/cnannot.yaml")).unwrap();
    assert_eq!(yaml.sample, "NORMAL");
    assert_eq!(yaml.overlapper_type().unwrap(), OverlapperType::Linear);
    assert_eq!(yaml.ploidy.overrides.get("X"), Some(&2));
}

#[rstest]
fn test_normal_sample_with_overrides(path_to_segments: &str, path_to_vcf: &str) {
    let config = AnnotateConfig::try_from(Path::new("../tests/data/cnannot.yaml")).unwrap();
    let index = build_index(path_to_segments, config.overlapper_type().unwrap());
    let loci = read_loci(path_to_vcf, &config.sample);
    let tables = annotate_loci(&loci, &index, &config.policy(), false);

    // every NORMAL genotype has an AD value
    assert_eq!(tables.records.len(), 9);
    assert_eq!(tables.records[0].ref_counts, Some(20));
    assert_eq!(tables.records[0].var_counts, Some(0));

    let x = tables
        .records
        .iter()
        .find(|r| r.mutation_id == "X:500")
        .unwrap();
    assert_eq!(x.normal_cn, 2);

    let y = tables
        .records
        .iter()
        .find(|r| r.mutation_id == "Y:3000000")
        .unwrap();
    assert_eq!(y.normal_cn, 1);
}
