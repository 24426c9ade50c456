//! CLI argument parsing.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::ffi::OsString;
use svg_transformer::DEFAULT_COMPONENT_NAME;

/// Long flags that are also accepted with a single leading dash.
const LEGACY_FLAGS: &[&str] = &["input", "output", "name"];

/// Convert an SVG file into a React TSX icon component.
#[derive(Debug, Parser)]
#[command(name = "svg-to-tsx")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Input SVG file path
    #[arg(short, long)]
    pub input: Option<Utf8PathBuf>,

    /// Output TSX file path (defaults to the input's base name with a .tsx extension)
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// React component name
    #[arg(short, long, default_value = DEFAULT_COMPONENT_NAME)]
    pub name: String,
}

impl Args {
    /// Parses arguments, accepting `-input`-style long flags.
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_legacy_flags(args))
    }

    /// Returns the output path, deriving it from the input when not given.
    pub fn output_path(&self, input: &Utf8Path) -> Utf8PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(input))
    }
}

/// Rewrites `-input`, `-output` and `-name` (also in `-flag=value` form)
/// to their double-dash spelling. Other arguments are left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(flag) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if LEGACY_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

/// `icons/arrow-left.svg` becomes `arrow-left.tsx`, relative to the
/// current directory.
pub fn default_output_path(input: &Utf8Path) -> Utf8PathBuf {
    let stem = input.file_stem().unwrap_or("output");
    Utf8PathBuf::from(format!("{}.tsx", stem))
}
