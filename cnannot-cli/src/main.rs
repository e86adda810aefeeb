mod annotate;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "cnannot";
}

/// Global verbosity flag; long form only, `-v` is the VCF.
fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .long("verbose")
        .help("Increase logging verbosity (repeat for more)")
        .action(ArgAction::Count)
        .global(true)
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("cnannot developers")
        .about(
            "Allele-specific copy-number annotation of point variants, producing PyClone input tables.",
        )
        .subcommand_required(true)
        .arg(verbose_arg())
        .subcommand(annotate::cli::create_annotate_cli())
}

///
/// Warnings are shown by default, `--verbose` adds info then debug output and
/// `--quiet` keeps only errors. `RUST_LOG` still applies on top.
///
fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("quiet") {
        LevelFilter::Error
    } else {
        match matches.get_count("verbose") {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ANNOTATE
        //
        Some((annotate::cli::ANNOTATE_CMD, matches)) => {
            init_logging(matches);
            annotate::handlers::run_annotate(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_verbose_is_global() {
        let matches = build_parser()
            .try_get_matches_from([
                "cnannot", "annotate", "-i", "seg.txt", "-v", "calls.vcf", "--verbose", "--verbose",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_count("verbose"), 2);
        assert_eq!(sub.get_one::<String>("vcf").unwrap(), "calls.vcf");
    }

    #[rstest]
    fn test_verbose_belongs_to_top_level() {
        assert!(
            build_parser()
                .get_arguments()
                .any(|a| a.get_id() == "verbose")
        );
        assert!(
            annotate::cli::create_annotate_cli()
                .get_arguments()
                .all(|a| a.get_id() != "verbose")
        );
    }

    #[rstest]
    fn test_subcommand_is_required() {
        assert!(build_parser().try_get_matches_from(["cnannot"]).is_err());
    }
}
