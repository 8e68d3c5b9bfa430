// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

#![allow(unused_crate_dependencies)]

mod cli;

use cli_utils::logging;
use cli_utils::BoxResult;
pub use rdfresolve_cli as resolve_cli;
use tracing::metadata::LevelFilter;
pub use resolve_cli::config;

pub use resolve_cli::VERSION;

#[tokio::main]
async fn main() -> BoxResult<()> {
    let log_reload_handle = logging::setup(clap::crate_name!())?;

    let cli_args = cli::parse();

    let log_level = if cli_args.verbose {
        LevelFilter::DEBUG
    } else if cli_args.quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    logging::set_log_level_tracing(&log_reload_handle, log_level)?;

    let results = resolve_cli::run(&cli_args.config).await?;
    tracing::info!("Resolved {} resource(s)", results.len());
    print_results(&resolve_cli::render(&results)?);

    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_results(rendered: &str) {
    print!("{rendered}");
}
