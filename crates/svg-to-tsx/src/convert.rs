//! Reads the SVG, runs the transformer and writes the component file.

use crate::cli::Args;
use camino::Utf8PathBuf;
use miette::Diagnostic;
use std::fs;
use std::io;
use svg_transformer::{transform, TransformOptions};
use thiserror::Error;

/// Conversion errors.
#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    /// No input file was given.
    #[error("please provide an input file with the --input flag")]
    #[diagnostic(code(svg_to_tsx::missing_input))]
    MissingInput,

    /// Failed to read the input file.
    #[error("failed to read input file {path}")]
    #[diagnostic(
        code(svg_to_tsx::read_failed),
        help("check that the file exists and is readable")
    )]
    ReadFailed {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the output file.
    #[error("failed to write output file {path}")]
    #[diagnostic(
        code(svg_to_tsx::write_failed),
        help("check that the destination directory exists and is writable")
    )]
    WriteFailed {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a successful conversion produced.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// The SVG that was read.
    pub input: Utf8PathBuf,
    /// The TSX file that was written.
    pub output: Utf8PathBuf,
}

/// Converts the file named by `args`.
///
/// The input is read as raw bytes and never decoded, so documents declaring
/// a non-UTF-8 encoding keep their bytes unchanged in the output.
pub fn run(args: &Args) -> Result<ConvertSummary, ConvertError> {
    let input = args.input.clone().ok_or(ConvertError::MissingInput)?;
    let output = args.output_path(&input);
    if args.output.is_none() {
        tracing::debug!(%output, "no output path given, using default");
    }

    let source = fs::read(&input).map_err(|source| ConvertError::ReadFailed {
        path: input.clone(),
        source,
    })?;

    let result = transform(
        &source,
        &TransformOptions {
            component_name: args.name.clone(),
        },
    );

    fs::write(&output, &result.tsx_code).map_err(|source| ConvertError::WriteFailed {
        path: output.clone(),
        source,
    })?;

    tracing::info!(
        %input,
        %output,
        component = %args.name,
        root_attributes = result.root_attributes,
        body_lines = result.body_lines,
        "wrote component"
    );

    Ok(ConvertSummary { input, output })
}
