//! CLI argument parsing for mfdecode.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// mfdecode: strict multi-document YAML manifest decoder.
///
/// Every document is decoded into the type registered for its kind/version
/// (or the legacy machine config), then checked for fields the type ignored.
#[derive(Parser, Debug)]
#[command(name = "mfdecode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a decoder config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for mfdecode.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode and strictly validate manifest files.
    ///
    /// Reads stdin when no file (or `-`) is given.
    Check(InputArgs),

    /// Decode manifest files and print the decoded objects.
    Dump(DumpArgs),

    /// List registered kind/version pairs.
    Kinds,
}

/// Input file arguments shared by commands that decode.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Manifest files to read (`-` for stdin).
    pub files: Vec<PathBuf>,
}

/// Arguments for the `dump` command.
#[derive(Args, Debug)]
pub struct DumpArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = DumpFormat::Yaml)]
    pub format: DumpFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpFormat {
    Yaml,
    Json,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_files() {
        let cli = Cli::try_parse_from(["mfdecode", "check", "a.yaml", "b.yaml"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(
                args.files,
                vec![PathBuf::from("a.yaml"), PathBuf::from("b.yaml")]
            );
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_check_without_files() {
        let cli = Cli::try_parse_from(["mfdecode", "check"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert!(args.files.is_empty());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_dump_json() {
        let cli = Cli::try_parse_from(["mfdecode", "dump", "--format", "json", "x.yaml"]).unwrap();
        if let Command::Dump(args) = cli.command {
            assert_eq!(args.format, DumpFormat::Json);
            assert_eq!(args.input.files, vec![PathBuf::from("x.yaml")]);
        } else {
            panic!("Expected Dump command");
        }
    }

    #[test]
    fn parse_dump_defaults_to_yaml() {
        let cli = Cli::try_parse_from(["mfdecode", "dump"]).unwrap();
        if let Command::Dump(args) = cli.command {
            assert_eq!(args.format, DumpFormat::Yaml);
        } else {
            panic!("Expected Dump command");
        }
    }

    #[test]
    fn parse_kinds() {
        let cli = Cli::try_parse_from(["mfdecode", "kinds"]).unwrap();
        assert!(matches!(cli.command, Command::Kinds));
    }

    #[test]
    fn parse_global_flags() {
        let cli =
            Cli::try_parse_from(["mfdecode", "check", "-vv", "--config", "mf.yaml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("mf.yaml")));
    }
}
