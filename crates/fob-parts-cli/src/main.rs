//! fob-parts entry point: argument parsing, logging setup and command
//! dispatch.

use clap::Parser;
use fob_parts_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Compose(compose_args) => commands::compose_execute(compose_args),
        cli::Command::Targets(manifest_args) => commands::targets_execute(manifest_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
