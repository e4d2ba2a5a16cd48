mod args;
mod output;

pub(crate) use args::{CliArgs, Commands, OutputFormat, parse_cli};
pub(crate) use output::{print_beers, print_identified, print_outcome};
