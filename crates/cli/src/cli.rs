// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;
use std::time::Duration;

use clap::{command, value_parser, Arg, ArgAction, Command, ValueHint};
use const_format::formatcp;
use rdfresolve_resolver::Target;

use crate::config::Config;

pub const A_S_VERSION: char = 'V';
pub const A_L_VERSION: &str = "version";
pub const A_S_QUIET: char = 'q';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_DATA: char = 'd';
pub const A_L_DATA: &str = "data";
pub const A_S_REQUEST: char = 'r';
pub const A_L_REQUEST: &str = "request";
pub const A_S_CHAIN: char = 'c';
pub const A_L_CHAIN: &str = "chain";
pub const A_S_TIMEOUT: char = 't';
pub const A_L_TIMEOUT: &str = "timeout";

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stderr")
        .long_help("Minimize or suppress output to stderr; the resolved resources still get printed to stdout.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_data() -> Arg {
    Arg::new(A_L_DATA)
        .help("The RDF file all requests get answered from; the format is derived from the file extension")
        .short(A_S_DATA)
        .long(A_L_DATA)
        .action(ArgAction::Set)
        .value_parser(value_parser!(std::path::PathBuf))
        .value_hint(ValueHint::FilePath)
        .value_name("DATA_FILE")
        .required_unless_present(A_L_VERSION)
}

fn arg_request() -> Arg {
    Arg::new(A_L_REQUEST)
        .help("Request the resource at URI, and store it under the identifier ID")
        .short(A_S_REQUEST)
        .long(A_L_REQUEST)
        .action(ArgAction::Append)
        .value_hint(ValueHint::Other)
        .value_names(["ID", "URI"])
        .num_args(2)
}

fn arg_chain() -> Arg {
    Arg::new(A_L_CHAIN)
        .help(formatcp!(
            "Request the resource at the URI found as value of PREDICATE \
on the resource stored under ACCESSOR, and store it under the identifier ID. \
ACCESSOR has to be the ID of an other -{A_S_REQUEST},--{A_L_REQUEST} \
or -{A_S_CHAIN},--{A_L_CHAIN}."
        ))
        .short(A_S_CHAIN)
        .long(A_L_CHAIN)
        .action(ArgAction::Append)
        .value_hint(ValueHint::Other)
        .value_names(["ID", "ACCESSOR", "PREDICATE"])
        .num_args(3)
}

fn arg_timeout() -> Arg {
    Arg::new(A_L_TIMEOUT)
        .help("Give up if not all resources are resolved after this many seconds")
        .short(A_S_TIMEOUT)
        .long(A_L_TIMEOUT)
        .action(ArgAction::Set)
        .value_parser(value_parser!(u64))
        .value_hint(ValueHint::Other)
        .value_name("SECONDS")
}

#[must_use]
pub fn args_matcher() -> Command {
    command!()
        .about(clap::crate_description!())
        .bin_name("rdfresolve")
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_version())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_data())
        .arg(arg_request())
        .arg(arg_chain())
        .arg(arg_timeout())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("rdfresolve ");
    }
    println!("{}", crate::VERSION);
    std::process::exit(0);
}

#[derive(Clone, Debug)]
pub struct Args {
    pub quiet: bool,
    pub verbose: bool,
    pub config: Config,
}

fn values(args: &clap::ArgMatches, id: &str) -> Vec<String> {
    args.get_many::<String>(id)
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default()
}

fn requests(args: &clap::ArgMatches) -> Vec<(String, Target)> {
    let mut requests = Vec::new();
    for request in values(args, A_L_REQUEST).chunks_exact(2) {
        if let [identifier, uri] = request {
            requests.push((identifier.clone(), Target::Direct(uri.clone())));
        }
    }
    for chain in values(args, A_L_CHAIN).chunks_exact(3) {
        if let [identifier, accessor, predicate] = chain {
            requests.push((
                identifier.clone(),
                Target::Chained {
                    accessor: accessor.clone(),
                    predicate: predicate.clone(),
                },
            ));
        }
    }
    requests
}

/// Parses the command line arguments,
/// including verification.
///
/// # Panics
///
/// - The data file was not supplied
#[must_use]
pub fn parse() -> Args {
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let data = args
        .get_one::<PathBuf>(A_L_DATA)
        .cloned()
        .expect("The data file is required");
    let deadline = args
        .get_one::<u64>(A_L_TIMEOUT)
        .copied()
        .map(Duration::from_secs);

    let config = Config {
        data,
        requests: requests(&args),
        deadline,
    };

    Args {
        quiet,
        verbose,
        config,
    }
}
