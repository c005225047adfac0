use std::{io, path::PathBuf};

use miette::Diagnostic;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum Error {
    #[error("could not process {}", path.display())]
    #[diagnostic(code(unquote::input))]
    Input {
        path: PathBuf,
        #[source]
        source: unquote_core::Error,
        #[help]
        advice: Option<&'static str>,
    },

    #[error("could not write {}", path.display())]
    #[diagnostic(
        code(unquote::write),
        help("check that the output directory exists and is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot derive an output file name from {}", .0.display())]
    #[diagnostic(help("pass a path to a file, or name the output with --output"))]
    NoFileName(PathBuf),

    #[error("refusing to overwrite the input file {}", .0.display())]
    #[diagnostic(help("use a non-empty --prefix, --output-dir or --output"))]
    WouldOverwriteInput(PathBuf),

    #[error("--output can only be used with a single input file, got {0}")]
    #[diagnostic(help("use --output-dir to collect the results of several files"))]
    OutputWithManyInputs(usize),

    #[error("could not write to stdout")]
    Stdout(#[source] io::Error),

    #[error("failed to process {0} file(s)")]
    Failed(usize),
}
