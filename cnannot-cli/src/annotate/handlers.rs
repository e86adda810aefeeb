use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use cnannot_annotate::{AnnotateConfig, annotate_loci, validate};
use cnannot_core::models::VariantLocus;
use cnannot_io::{
    VcfReader, read_segment_table, stage_annotation_table, stage_dropped_table,
    stage_warning_table,
};
use cnannot_overlaprs::{IntoSegmentIndex, OverlapperType};

/// Resolved settings of one `annotate` invocation.
struct AnnotateRun {
    segments: PathBuf,
    vcf: String,
    output: PathBuf,
    warnings: PathBuf,
    dropped: Option<PathBuf>,
    report: Option<PathBuf>,
    parallel: bool,
    quiet: bool,
    config: AnnotateConfig,
}

impl AnnotateRun {
    ///
    /// Merge command line flags over the config file (or the defaults).
    ///
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let required = |id: &str| {
            matches
                .get_one::<String>(id)
                .cloned()
                .with_context(|| format!("Missing required argument: --{id}"))
        };

        let mut config = match matches.get_one::<String>("config") {
            Some(path) => AnnotateConfig::try_from(Path::new(path))
                .with_context(|| format!("Failed to load config file {path}"))?,
            None => AnnotateConfig::default(),
        };

        if let Some(sample) = matches.get_one::<String>("sample") {
            config.sample = sample.clone();
        }
        if let Some(prefix_len) = matches.get_one::<usize>("prefix-len") {
            config.chrom_prefix_len = *prefix_len;
        }
        if let Some(backend) = matches.get_one::<String>("backend") {
            config.backend = backend.clone();
        }

        Ok(AnnotateRun {
            segments: PathBuf::from(required("segments")?),
            vcf: required("vcf")?,
            output: PathBuf::from(required("output")?),
            warnings: PathBuf::from(required("warnings")?),
            dropped: matches.get_one::<String>("dropped").map(PathBuf::from),
            report: matches.get_one::<String>("report").map(PathBuf::from),
            parallel: matches.get_flag("parallel"),
            quiet: matches.get_flag("quiet"),
            config,
        })
    }
}

fn read_loci(run: &AnnotateRun) -> Result<Vec<VariantLocus>> {
    let reader = VcfReader::from_path(&run.vcf, &run.config.sample, run.config.chrom_prefix_len)
        .with_context(|| format!("Failed to open VCF {}", run.vcf))?;

    let pb = if run.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg} ({pos} loci)")?,
    );
    pb.set_message(format!("Reading variants from {}", run.vcf));
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut loci = Vec::new();
    for locus in reader {
        let locus = locus.with_context(|| format!("Failed to read VCF {}", run.vcf))?;
        loci.push(locus);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(loci)
}

pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let run = AnnotateRun::from_matches(matches)?;
    let overlapper_type: OverlapperType = run.config.overlapper_type()?;

    let segments = read_segment_table(
        &run.segments,
        &run.config.columns,
        run.config.chrom_prefix_len,
    )
    .with_context(|| format!("Failed to read segment table {}", run.segments.display()))?;
    let index = segments.into_segment_index(overlapper_type);
    info!(
        "Indexed {} segments on chromosomes [{}]",
        index.len(),
        index.chromosomes().join(", ")
    );

    let loci = read_loci(&run)?;
    info!("Read {} loci for sample '{}'", loci.len(), run.config.sample);

    let policy = run.config.policy();
    let tables = annotate_loci(&loci, &index, &policy, run.parallel);

    let report = validate(&tables, loci.len()).with_overlapping_segments(index.overlapping_pairs());
    report.log();

    // nothing is committed until every table is fully written
    let mut staged = vec![
        stage_annotation_table(&run.output, &tables.records)?,
        stage_warning_table(&run.warnings, &tables.warnings)?,
    ];
    if let Some(dropped) = &run.dropped {
        staged.push(stage_dropped_table(dropped, &tables.dropped)?);
    }
    for table in staged {
        let path = table.commit()?;
        info!("Wrote {}", path.display());
    }

    if let Some(report_path) = &run.report {
        std::fs::write(report_path, report.to_json()?)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
    }

    info!(
        "Annotated {} loci: {} rows, {} without a segment, {} dropped",
        loci.len(),
        tables.records.len(),
        tables.warnings.len(),
        tables.dropped.len()
    );

    Ok(())
}
