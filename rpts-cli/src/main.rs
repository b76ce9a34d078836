mod filter;
mod inputs;
mod summary;

use anyhow::Result;
use clap::{Command, arg};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "rpts";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Load repeat annotation hits, join repeat family labels onto them and summarize the result.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose ...)
                .global(true)
                .help("Increase logging verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence"),
        )
        .subcommand(summary::cli::create_summary_cli())
        .subcommand(filter::cli::create_filter_cli())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // SUMMARY
        //
        Some((summary::cli::SUMMARY_CMD, matches)) => {
            summary::handlers::run_summary(matches)?;
        }

        //
        // FILTER
        //
        Some((filter::cli::FILTER_CMD, matches)) => {
            filter::handlers::run_filter(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    #[case(&["rpts", "summary", "--hits", "a.hits", "--families", "f.json"], 0)]
    #[case(&["rpts", "-vv", "summary", "--hits", "a.hits", "--families", "f.json"], 2)]
    #[case(&["rpts", "filter", "--hits", "a.hits", "--families", "f.json", "--missing", "-v"], 1)]
    fn test_verbosity_is_global(#[case] args: &[&str], #[case] expected: u8) {
        let matches = build_parser().try_get_matches_from(args).unwrap();
        assert_eq!(matches.get_count("verbose"), expected);
    }

    #[rstest]
    #[case(&["rpts", "filter", "--hits", "a.hits", "--families", "f.json"])]
    #[case(&["rpts", "filter", "--hits", "a.hits", "--families", "f.json", "--repeat-type", "LTR", "--missing"])]
    #[case(&["rpts", "summary", "--hits", "a.hits"])]
    fn test_invalid_invocations(#[case] args: &[&str]) {
        assert!(build_parser().try_get_matches_from(args).is_err());
    }
}
