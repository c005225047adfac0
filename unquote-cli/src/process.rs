use std::{
    ffi::OsString,
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use clap::Args as ClapArgs;
use rayon::prelude::*;
use serde::Serialize;
use unquote_core::{Options, TransformSummary, Transformed};

use crate::error::Error;

const DEFAULT_PREFIX: &str = "processed_";

/// Normalize quotes in every line of text files
#[derive(ClapArgs, Debug)]
pub struct Args {
    /// List of files to process
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    pub files: Vec<PathBuf>,

    /// Read a single document from stdin and write the result to stdout
    #[arg(long, conflicts_with_all = ["output", "output_dir", "stdout", "json"])]
    pub stdin: bool,

    /// Write results to stdout, in argument order, instead of to files
    #[arg(long, conflicts_with_all = ["output", "output_dir", "json"])]
    pub stdout: bool,

    /// Output file path (only with a single input file)
    #[arg(short, long, value_name = "PATH", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for output files instead of the input file's directory
    #[arg(short = 'd', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Prefix prepended to the input file name to name the output file
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Decode input with this encoding instead of detecting it
    ///
    /// Accepts any WHATWG encoding label, e.g. `utf-16le` or `windows-1251`.
    /// Without it, inputs with a byte order mark are decoded accordingly and
    /// everything else must be UTF-8.
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Print a JSON summary line per processed file to stdout
    #[arg(long)]
    pub json: bool,

    /// Do not print per-file summaries to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct Report {
    input: String,
    output: String,
    #[serde(flatten)]
    summary: TransformSummary,
}

pub fn run(args: &Args) -> Result<(), Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(args, stdin.lock(), stdout.lock())
}

/// Same as [`run`], reading `--stdin` input from `input` and writing
/// everything meant for stdout to `out`.
fn run_with<R: Read, W: Write>(args: &Args, input: R, out: W) -> Result<(), Error> {
    let options = Options::builder()
        .with_optional_encoding(args.encoding.clone())
        .build();

    if args.stdin {
        return run_stdin(args, &options, input, out);
    }

    if args.output.is_some() && args.files.len() > 1 {
        return Err(Error::OutputWithManyInputs(args.files.len()));
    }

    if args.stdout {
        run_files_to_stdout(args, &options, out)
    } else {
        run_files(args, &options, out)
    }
}

#[tracing::instrument(skip_all)]
fn run_stdin<R: Read, W: Write>(
    args: &Args,
    options: &Options,
    input: R,
    mut out: W,
) -> Result<(), Error> {
    let transformed =
        unquote_core::transform_reader(input, options).map_err(|source| Error::Input {
            path: PathBuf::from("<stdin>"),
            advice: source.advice(),
            source,
        })?;
    out.write_all(transformed.result().as_bytes())
        .and_then(|()| out.flush())
        .map_err(Error::Stdout)?;
    if !args.quiet {
        eprintln!("{}", describe("<stdin>", &transformed, None));
    }
    Ok(())
}

/// Transform all files in parallel, then print them in argument order so
/// documents never interleave.
#[tracing::instrument(skip_all, fields(files = args.files.len()))]
fn run_files_to_stdout<W: Write>(args: &Args, options: &Options, mut out: W) -> Result<(), Error> {
    let results: Vec<(&PathBuf, Result<Transformed<'static>, Error>)> = args
        .files
        .par_iter()
        .map(|file| (file, read_and_transform(file, options)))
        .collect();

    // A broken stdout stops the output, not the reporting of failed inputs.
    let mut written = Ok(());
    let mut errors = Vec::new();
    for (file, result) in results {
        match result {
            Ok(transformed) => {
                if written.is_ok() {
                    written = out.write_all(transformed.result().as_bytes());
                }
                if !args.quiet {
                    eprintln!("{}", describe(&file.display().to_string(), &transformed, None));
                }
            }
            Err(e) => errors.push((file, e)),
        }
    }
    finish(written.and_then(|()| out.flush()), errors)
}

/// Each file is read, transformed and written by its own rayon task.
#[tracing::instrument(skip_all, fields(files = args.files.len()))]
fn run_files<W: Write>(args: &Args, options: &Options, mut out: W) -> Result<(), Error> {
    let results: Vec<(&PathBuf, Result<Report, Error>)> = args
        .files
        .par_iter()
        .map(|file| (file, process_file(file, args, options)))
        .collect();

    let mut written = Ok(());
    let mut errors = Vec::new();
    for (file, result) in results {
        match result {
            Ok(report) if args.json && written.is_ok() => {
                written = serde_json::to_writer(&mut out, &report)
                    .map_err(io::Error::from)
                    .and_then(|()| writeln!(out));
            }
            Ok(_) => {}
            Err(e) => errors.push((file, e)),
        }
    }
    finish(written.and_then(|()| out.flush()), errors)
}

/// Report every failed input first, then surface a stdout failure, if any.
fn finish(written: io::Result<()>, errors: Vec<(&PathBuf, Error)>) -> Result<(), Error> {
    let reported = report_failures(errors);
    written.map_err(Error::Stdout)?;
    reported
}

fn read_and_transform(file: &Path, options: &Options) -> Result<Transformed<'static>, Error> {
    unquote_core::transform_file(file, options).map_err(|source| Error::Input {
        path: file.to_path_buf(),
        advice: source.advice(),
        source,
    })
}

#[tracing::instrument(skip(args, options))]
fn process_file(file: &Path, args: &Args, options: &Options) -> Result<Report, Error> {
    let output = match &args.output {
        Some(output) => output.clone(),
        None => processed_path(file, &args.prefix, args.output_dir.as_deref())?,
    };
    if is_same_file(file, &output) {
        return Err(Error::WouldOverwriteInput(output));
    }

    let transformed = read_and_transform(file, options)?;
    write_output(&output, transformed.result())?;

    tracing::info!(
        input = %file.display(),
        output = %output.display(),
        lines = transformed.line_count_result(),
        "file written"
    );
    if !args.quiet {
        eprintln!(
            "{}",
            describe(&file.display().to_string(), &transformed, Some(&output))
        );
    }

    Ok(Report {
        input: file.display().to_string(),
        output: output.display().to_string(),
        summary: transformed.summary(),
    })
}

/// Whether writing `output` would clobber `input`, after resolving `.`,
/// `..` and symlinks.
fn is_same_file(input: &Path, output: &Path) -> bool {
    if let (Ok(input), Ok(output)) = (fs::canonicalize(input), fs::canonicalize(output)) {
        return input == output;
    }
    match (resolved_location(input), resolved_location(output)) {
        (Some(input), Some(output)) => input == output,
        _ => input == output,
    }
}

/// Canonical parent directory joined with the file name. Works for paths
/// that do not exist yet, as long as their directory does.
fn resolved_location(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    let parent = parent_dir(path);
    Some(fs::canonicalize(parent).ok()?.join(name))
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Write `content` to a temporary file next to `path`, then move it into
/// place. On failure the temporary file is dropped and `path` is untouched.
fn write_output(path: &Path, content: &str) -> Result<(), Error> {
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = tempfile::NamedTempFile::new_in(parent_dir(path)).map_err(write_error)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(write_error)?;
    }
    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(write_error)?;
    file.persist(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e.error, "could not move output into place");
        write_error(e.error)
    })?;
    Ok(())
}

/// Derive the output path for `input`: `prefix` is prepended to the file
/// name, and the file lands in `output_dir` or next to the input.
pub(crate) fn processed_path(
    input: &Path,
    prefix: &str,
    output_dir: Option<&Path>,
) -> Result<PathBuf, Error> {
    let name = input
        .file_name()
        .ok_or_else(|| Error::NoFileName(input.to_path_buf()))?;
    let mut processed = OsString::from(prefix);
    processed.push(name);

    let dir = output_dir.or_else(|| input.parent()).unwrap_or(Path::new(""));
    Ok(dir.join(processed))
}

fn describe(input: &str, transformed: &Transformed<'_>, output: Option<&Path>) -> String {
    let summary = format!(
        "{input}: {} lines, {} changed",
        transformed.line_count_result(),
        transformed.changed_lines()
    );
    match output {
        Some(output) => format!("{summary} -> {}", output.display()),
        None => summary,
    }
}

fn report_failures(errors: Vec<(&PathBuf, Error)>) -> Result<(), Error> {
    if errors.is_empty() {
        return Ok(());
    }
    let count = errors.len();
    eprintln!("\nFailed to process {count} file(s):");
    for (idx, (file, error)) in errors.into_iter().enumerate() {
        tracing::error!(path = %file.display(), %error, "file not processed");
        eprintln!("\n{}. File: {}", idx + 1, file.display());
        eprintln!("{:?}", miette::Report::new(error));
    }
    Err(Error::Failed(count))
}
