//! Command-line interface handling for the speedhost demo server.
//!
//! This module provides command-line argument parsing using the `clap`
//! crate for robust argument handling.

use clap::{Arg, Command};
use std::path::PathBuf;

/// Command line arguments parsed from user input.
///
/// This structure holds all the command-line options that can be used to
/// override configuration file settings or provide runtime parameters.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Optional override for the world variable store file
    pub world_path: Option<PathBuf>,
    /// Optional override for the operator display name
    pub operator_name: Option<String>,
    /// Optional override for log level
    pub log_level: Option<String>,
    /// Whether to force JSON log output
    pub json_logs: bool,
}

impl CliArgs {
    /// Parses command line arguments using clap.
    ///
    /// Sets up the command-line interface with all available options and
    /// returns a structured representation of the parsed arguments.
    ///
    /// # Returns
    ///
    /// A `CliArgs` instance containing all parsed command-line options.
    pub fn parse() -> Self {
        Self::from_matches(Self::command().get_matches())
    }

    /// Builds the clap command definition.
    pub(crate) fn command() -> Command {
        Command::new("Speedhost Demo Server")
            .version(env!("CARGO_PKG_VERSION"))
            .about("In-process host for the speed configuration protocol")
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path")
                    .default_value("speedhost.toml"),
            )
            .arg(
                Arg::new("world")
                    .short('w')
                    .long("world")
                    .value_name("FILE")
                    .help("World variable store file path"),
            )
            .arg(
                Arg::new("name")
                    .short('n')
                    .long("name")
                    .value_name("NAME")
                    .help("Display name of the hosting operator"),
            )
            .arg(
                Arg::new("log-level")
                    .short('l')
                    .long("log-level")
                    .value_name("LEVEL")
                    .help("Log level (trace, debug, info, warn, error)"),
            )
            .arg(
                Arg::new("json-logs")
                    .long("json-logs")
                    .help("Output logs in JSON format")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    /// Extracts the structured arguments from parsed matches.
    pub(crate) fn from_matches(matches: clap::ArgMatches) -> Self {
        Self {
            config_path: PathBuf::from(
                matches
                    .get_one::<String>("config")
                    .map(String::as_str)
                    .unwrap_or("speedhost.toml"),
            ),
            world_path: matches.get_one::<String>("world").map(PathBuf::from),
            operator_name: matches.get_one::<String>("name").cloned(),
            log_level: matches.get_one::<String>("log-level").cloned(),
            json_logs: matches.get_flag("json-logs"),
        }
    }
}
