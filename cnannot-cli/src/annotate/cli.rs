use clap::{Arg, Command, arg, value_parser};

pub use cnannot_annotate::consts::*;

pub fn create_annotate_cli() -> Command {
    Command::new(ANNOTATE_CMD)
        .author("cnannot developers")
        .about(
            "Annotate VCF variants with the allele-specific copy number of their segment, as PyClone input.",
        )
        .arg_required_else_help(true)
        .arg(
            arg!(-i --segments <segments> "Copy-number segment table (Sequenza _segments.txt, optionally gzipped)")
                .required(true),
        )
        .arg(
            arg!(-v --vcf <vcf> "VCF with allele depths for the sample, or - for stdin")
                .required(true),
        )
        .arg(
            arg!(-o --output <output> "Primary output table")
                .required(false)
                .default_value(DEFAULT_OUTPUT_FILE),
        )
        .arg(
            arg!(--warnings <warnings> "Table of loci that matched no segment")
                .required(false)
                .default_value(DEFAULT_WARNINGS_FILE),
        )
        .arg(
            arg!(--dropped <dropped> "Table of loci dropped for missing read counts")
                .required(false),
        )
        .arg(arg!(--report <report> "Write a JSON data-quality report here").required(false))
        .arg(
            arg!(-s --sample <sample> "VCF sample to read allele depths from [default: TUMOR]")
                .required(false),
        )
        .arg(arg!(-c --config <config> "Run configuration (.toml, .yaml or .yml)").required(false))
        .arg(
            Arg::new("prefix-len")
                .long("prefix-len")
                .value_name("N")
                .help("Leading characters stripped from chromosome names [default: 3]")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(-e --backend <backend> "Which segment index backend to use (bits or linear)")
                .required(false),
        )
        .arg(arg!(--parallel "Annotate loci in parallel"))
        .arg(arg!(-q --quiet "Only log errors and hide the progress spinner"))
}
