//! CLI entry point for clip

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use clip::options::parse_escape_char;
use clip::{ClipError, ClipResult, OutputConfig, TextFormatter, WrapOptions, WrapReport, print_json};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "clip")]
#[command(about = "Reflow text into fixed-width lines with indent, margin and justification")]
#[command(version)]
struct Args {
    /// File to wrap (reads standard input when omitted or "-")
    file: Option<PathBuf>,

    /// Line width in characters (default: terminal width, 0 for the same)
    #[arg(short, long)]
    width: Option<usize>,

    /// Spaces before the first line and after an indent escape
    #[arg(short, long, default_value = "0")]
    indent: usize,

    /// Spaces before continuation lines and after a margin escape
    #[arg(short, long, default_value = "0")]
    margin: usize,

    /// Stretch wrapped lines to exactly the line width
    #[arg(short, long)]
    justify: bool,

    /// Also strip leading spaces from lines that follow an explicit newline
    #[arg(short = 't', long = "trim-newline-spaces")]
    trim_newline_spaces: bool,

    /// Escape character that breaks onto a margin line
    /// Accepts a single character, tab/cr/lf/space, or \t, \r, \n, \xHH
    #[arg(long = "margin-char", value_name = "CHAR", default_value = "tab")]
    margin_char: String,

    /// Escape character that breaks onto an indent line
    #[arg(long = "indent-char", value_name = "CHAR", default_value = "cr")]
    indent_char: String,

    /// Print a column ruler above the wrapped text
    #[arg(long = "ruler", conflicts_with = "json")]
    ruler: bool,

    /// Output the options and wrapped lines as JSON
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Trace the wrapper's scan on stderr
    #[arg(long = "debug")]
    debug: bool,
}

impl Args {
    /// Build wrap options from the command line, starting from the defaults.
    fn wrap_options(&self) -> ClipResult<WrapOptions> {
        let mut options = WrapOptions::new()
            .with_indent(self.indent)
            .with_margin(self.margin)
            .with_justify(self.justify)
            .with_trim_newline_spaces(self.trim_newline_spaces)
            .with_margin_char(parse_escape_char(&self.margin_char)?)
            .with_indent_char(parse_escape_char(&self.indent_char)?);

        if let Some(width) = self.width {
            options = options.with_width(width);
        }
        Ok(options)
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("clip=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read the whole input, replacing invalid UTF-8.
fn read_input(file: Option<&Path>) -> ClipResult<String> {
    let bytes = match file {
        Some(path) if path != Path::new("-") => fs::read(path).map_err(|source| ClipError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(ClipError::Stdin)?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn run(args: &Args) -> ClipResult<()> {
    let options = args.wrap_options()?;
    let text = read_input(args.file.as_deref())?;
    tracing::debug!(bytes = text.len(), ?options, "wrapping input");

    let wrapped = options.wrap(&text);

    if args.json {
        return print_json(&WrapReport::new(&options, &wrapped));
    }

    let formatter = TextFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
        ruler: args.ruler,
    });
    formatter.print(options.normalized().width, &wrapped)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("clip: {}", e);
        process::exit(1);
    }
}
