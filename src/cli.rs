//! Command-line front end: argument parsing and file I/O around the converter.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use crate::{to_html_with_options, Error, ListMarkers, Options};

/// Path that stands for stdin (as input) or stdout (as output).
pub const STDIO_PATH: &str = "-";

/// Convert a Markdown file to HTML, one line at a time.
#[derive(Debug, Clone, Parser)]
#[command(name = "linemark", version)]
pub struct Args {
    /// Markdown file to read (`-` for stdin)
    pub input: PathBuf,

    /// HTML file to write (`-` for stdout)
    pub output: PathBuf,

    /// Use `* ` for unordered and `- ` for ordered lists
    #[arg(long)]
    pub swap_list_markers: bool,

    /// Emit paragraph text without inline substitutions
    #[arg(long)]
    pub no_inline: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Conversion options selected by the flags.
    pub fn options(&self) -> Options {
        Options {
            list_markers: if self.swap_list_markers {
                ListMarkers::SWAPPED
            } else {
                ListMarkers::DEFAULT
            },
            inline: !self.no_inline,
        }
    }

    /// Default tracing filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "linemark=warn",
            1 => "linemark=info",
            2 => "linemark=debug",
            _ => "linemark=trace",
        }
    }
}

/// Parse command-line arguments (including the program name).
pub fn parse_args<I, T>(args: I) -> Result<Args, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Args::try_parse_from(args)?)
}

/// Read the input, convert it, and write the output.
///
/// The input is checked before the output is touched, so a missing input
/// never creates an output file.
pub fn run(args: &Args) -> Result<(), Error> {
    let markdown = read_input(&args.input)?;
    let html = to_html_with_options(&markdown, &args.options());
    write_output(&args.output, &html)
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

fn read_input(path: &Path) -> Result<String, Error> {
    let read_err = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    if is_stdio(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        debug!(bytes = buf.len(), "read markdown from stdin");
        return Ok(buf);
    }

    if !path.is_file() {
        return Err(Error::MissingInputFile {
            path: path.to_path_buf(),
        });
    }

    let markdown = fs::read_to_string(path).map_err(read_err)?;
    debug!(path = %path.display(), bytes = markdown.len(), "read markdown");
    Ok(markdown)
}

fn write_output(path: &Path, html: &str) -> Result<(), Error> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(html.as_bytes()).map_err(write_err)?;
        return stdout.flush().map_err(write_err);
    }

    fs::write(path, html).map_err(write_err)?;
    info!(path = %path.display(), bytes = html.len(), "wrote html");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_positionals() {
        let args = parse_args(["linemark", "in.md", "out.html"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.md"));
        assert_eq!(args.output, PathBuf::from("out.html"));
        assert_eq!(args.options(), Options::default());
        assert_eq!(args.log_filter(), "linemark=warn");
    }

    #[test]
    fn missing_output_is_usage_error() {
        let err = parse_args(["linemark", "in.md"]).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn extra_argument_is_usage_error() {
        let err = parse_args(["linemark", "a", "b", "c"]).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn no_arguments_is_usage_error() {
        let err = parse_args(["linemark"]).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn flags_map_to_options() {
        let args =
            parse_args(["linemark", "--swap-list-markers", "--no-inline", "-vv", "a", "b"]).unwrap();
        assert_eq!(
            args.options(),
            Options {
                list_markers: ListMarkers::SWAPPED,
                inline: false,
            }
        );
        assert_eq!(args.log_filter(), "linemark=debug");
    }

    #[test]
    fn stdio_path() {
        assert!(is_stdio(Path::new("-")));
        assert!(!is_stdio(Path::new("./-")));
    }
}
