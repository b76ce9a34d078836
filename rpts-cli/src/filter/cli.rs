use clap::{ArgAction, Command, arg};

use crate::inputs::input_args;

pub const FILTER_CMD: &str = "filter";

pub fn create_filter_cli() -> Command {
    Command::new(FILTER_CMD)
        .about("Print the enriched hits of one repeat type as TSV on stdout.")
        .args(input_args())
        .arg(
            arg!(--"repeat-type" <LABEL>)
                .required(false)
                .required_unless_present("missing")
                .conflicts_with("missing")
                .help("Repeat type to keep"),
        )
        .arg(
            arg!(--missing)
                .action(ArgAction::SetTrue)
                .help("Keep the hits without family labels instead"),
        )
}
