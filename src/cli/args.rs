// SPDX-License-Identifier: MPL-2.0
//! Command-line flags.

use crate::app::Flags;
use std::ffi::OsString;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: gallery_lens --catalog <FILE> [OPTIONS]

Options:
  --catalog <FILE>     TOML catalog file to display
  --lang <ID>          Locale override (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --data-dir <DIR>     Directory holding state.cbor
  -h, --help           Print this help
  -V, --version        Print version

Commands are read from stdin, one per line. Type `help` for the list.";

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("{0}")]
    Parse(#[from] pico_args::Error),
    #[error("unexpected argument: {0}")]
    Unexpected(String),
}

/// Parsed command-line flags.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Args {
    pub help: bool,
    pub version: bool,
    pub catalog: Option<String>,
    pub lang: Option<String>,
    pub config_dir: Option<String>,
    pub data_dir: Option<String>,
}

impl Args {
    pub fn from_env() -> Result<Self, ArgsError> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn from_vec(args: Vec<OsString>) -> Result<Self, ArgsError> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self, ArgsError> {
        let parsed = Self {
            help: args.contains(["-h", "--help"]),
            version: args.contains(["-V", "--version"]),
            catalog: args.opt_value_from_str("--catalog")?,
            lang: args.opt_value_from_str("--lang")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
            data_dir: args.opt_value_from_str("--data-dir")?,
        };
        if let Some(extra) = args.finish().into_iter().next() {
            return Err(ArgsError::Unexpected(extra.to_string_lossy().into_owned()));
        }
        Ok(parsed)
    }

    /// Converts into the runtime flags consumed by `App::from_flags`.
    #[must_use]
    pub fn into_flags(self) -> Flags {
        Flags {
            lang: self.lang,
            catalog_path: self.catalog,
            data_dir: self.data_dir,
            config_dir: self.config_dir,
        }
    }
}
