use clap::{Command, arg, value_parser};

use crate::inputs::input_args;

pub const SUMMARY_CMD: &str = "summary";
pub const DEFAULT_BINS: &str = "256";
pub const DEFAULT_TOP: &str = "30";
pub const DEFAULT_LONGEST: &str = "10";

pub fn create_summary_cli() -> Command {
    Command::new(SUMMARY_CMD)
        .about("Summarize a hits file and its repeat families as JSON on stdout.")
        .args(input_args())
        .arg(
            arg!(--"repeat-type" <LABEL>)
                .required(false)
                .help("Also summarize the hits and families of this repeat type"),
        )
        .arg(
            arg!(--bins <BINS>)
                .required(false)
                .default_value(DEFAULT_BINS)
                .value_parser(value_parser!(usize))
                .help("Number of bins for the alignment length histogram"),
        )
        .arg(
            arg!(--top <TOP>)
                .required(false)
                .default_value(DEFAULT_TOP)
                .value_parser(value_parser!(usize))
                .help("Number of entries to keep in each value count listing"),
        )
        .arg(
            arg!(--longest <LONGEST>)
                .required(false)
                .default_value(DEFAULT_LONGEST)
                .value_parser(value_parser!(usize))
                .help("Number of longest alignments to list"),
        )
}
