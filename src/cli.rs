//! Command-line interface implementation for pyskel.
//! Provides argument parsing using clap.

use std::ffi::OsString;

use clap::Parser;

use crate::constants::DEFAULT_PROJECT_NAME;
use crate::options::Options;

/// Two-letter short flag kept for compatibility with existing scripts.
const OVERWRITE_MAIN_SHORT: &str = "-om";

/// Command-line arguments structure for pyskel.
#[derive(Parser, Debug)]
#[command(author, version, about = "pyskel: poetry project scaffolding tool", long_about = None)]
pub struct Args {
    /// Name of the project
    #[arg(short, long, default_value = DEFAULT_PROJECT_NAME)]
    pub name: String,

    /// If the project will be tested
    #[arg(short, long)]
    pub tests: bool,

    /// If the project needs environment variables
    #[arg(short, long)]
    pub config: bool,

    /// If the project will have a logger system
    #[arg(short, long)]
    pub logger: bool,

    /// If after execution the main file content will be erased (also `-om`)
    #[arg(short, long)]
    pub overwrite_main: bool,

    /// If the project will be deployed to a docker container
    #[arg(short, long)]
    pub docker: bool,

    /// To add all generated files
    #[arg(short, long)]
    pub all: bool,

    /// Project description written to the manifest, instead of asking for it
    #[arg(long)]
    pub description: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Args> for Options {
    fn from(args: &Args) -> Self {
        Options {
            name: args.name.clone(),
            tests: args.tests,
            config: args.config,
            logger: args.logger,
            overwrite_main: args.overwrite_main,
            docker: args.docker,
            all: args.all,
        }
    }
}

/// Rewrites `-om` into `--overwrite-main`, which clap cannot express as a
/// short flag. Everything after a bare `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut escaped = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if arg == "--" {
                escaped = true;
            }
            if !escaped && arg == OVERWRITE_MAIN_SHORT {
                OsString::from("--overwrite-main")
            } else {
                arg
            }
        })
        .collect()
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse_from(normalize_args(std::env::args_os()))
}
