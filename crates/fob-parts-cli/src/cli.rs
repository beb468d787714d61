//! Command-line interface definition for fob-parts.
//!
//! # Command Structure
//!
//! - `fob-parts compose` - Merge a target's fragments and print the result
//! - `fob-parts targets` - List manifest targets and their parts
//! - `fob-parts check` - Compose every target and report failures

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// fob-parts - Compose bundler configuration from reusable fragments
#[derive(Parser, Debug)]
#[command(
    name = "fob-parts",
    version,
    about = "Compose bundler configuration from reusable fragments",
    long_about = "fob-parts reads a parts manifest (parts.toml, parts.json or the \"parts\"\n\
                  field of package.json), merges the fragments of the selected target and\n\
                  prints the resulting configuration as JSON for the bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge the fragments of a target and print the configuration
    ///
    /// The target is taken from --target, then from the npm lifecycle event
    /// (`npm run build` selects `build`), then from `default_target`.
    Compose(ComposeArgs),

    /// List targets and the parts they apply
    Targets(ManifestArgs),

    /// Compose every target and report the ones that fail
    Check(CheckArgs),
}

/// Manifest location shared by all commands
#[derive(Args, Debug, Clone, Default)]
pub struct ManifestArgs {
    /// Path to the parts manifest
    ///
    /// Defaults to parts.toml, parts.json or package.json in the current
    /// directory.
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Target to compose
    #[arg(short, long, value_name = "NAME")]
    pub target: Option<String>,

    /// Working directory the clean and purge fragments are anchored to
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Working directory the clean and purge fragments are anchored to
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_compose_flags() {
        let cli = Cli::parse_from([
            "fob-parts",
            "compose",
            "--target",
            "build",
            "--manifest",
            "cfg/parts.toml",
            "--compact",
        ]);
        match cli.command {
            Command::Compose(args) => {
                assert_eq!(args.target.as_deref(), Some("build"));
                assert_eq!(args.manifest.manifest, Some(PathBuf::from("cfg/parts.toml")));
                assert!(args.compact);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["fob-parts", "-v", "-q", "targets"]);
        assert!(result.is_err());
    }
}
