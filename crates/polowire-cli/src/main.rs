use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use polowire_core::{DecodedFrame, EventDispatcher, ScoreboardEvent, decode_frame};
use serde::Serialize;

mod logging;

use logging::{LogFormat, LogLevel, init_logging};

#[derive(Parser, Debug)]
#[command(name = "polowire")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("POLOWIRE_BUILD_COMMIT"),
    ", ",
    env!("POLOWIRE_BUILD_DATE"),
    ")"
))]
#[command(
    about = "Offline decoder for water polo scoreboard controller frames.",
    long_about = None,
    after_help = "Examples:\n  polowire capture decode match.hex -o report.json\n  polowire capture analyze match.hex --stdout --pretty\n  polowire frame 4131171601303034323130303031350230373134"
)]
struct Cli {
    /// Log verbosity (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on recorded frame captures (one hex frame per line).
    Capture {
        #[command(subcommand)]
        command: CaptureCommands,
    },
    /// Decode and dispatch a single hex-encoded frame, printing JSON.
    Frame {
        /// Frame bytes as hex (whitespace between digits is ignored)
        hex: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Subcommand, Debug)]
enum CaptureCommands {
    /// Decode a capture file and generate a versioned JSON report.
    #[command(alias = "analyze", alias = "analyse")]
    #[command(
        after_help = "Examples:\n  polowire capture decode match.hex -o report.json\n  polowire capture decode 'captures/*.hex' --stdout"
    )]
    Decode {
        /// Path to a .hex or .txt capture (a glob matching one file is accepted)
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any frame was rejected or skipped
        #[arg(long)]
        strict: bool,

        /// List rejected and skipped frames after decoding
        #[arg(long)]
        list_issues: bool,
    },
}

struct DecodeOptions {
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
    strict: bool,
    list_issues: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let quiet = matches!(
        cli.command,
        Commands::Capture {
            command: CaptureCommands::Decode { quiet: true, .. }
        }
    );
    init_logging(cli.log_format, cli.log_level, quiet);

    let result = match cli.command {
        Commands::Capture { command } => match command {
            CaptureCommands::Decode {
                input,
                report,
                stdout,
                pretty,
                compact,
                quiet,
                strict,
                list_issues,
            } => cmd_capture_decode(
                &input,
                DecodeOptions {
                    report,
                    stdout,
                    pretty,
                    compact,
                    quiet,
                    strict,
                    list_issues,
                },
            ),
        },
        Commands::Frame { hex, pretty } => cmd_frame(&hex, pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn cmd_capture_decode(input: &Path, opts: DecodeOptions) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(input)?;
    validate_input_file(&resolved_input)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;

    let report_path = match (opts.stdout, opts.report) {
        (true, _) => None,
        (false, Some(path)) => Some(path),
        (false, None) => {
            return Err(CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            ));
        }
    };

    if let Some(report_path) = report_path.as_ref() {
        ensure_distinct_output(report_path, &input_abs)?;
    }

    let rep = polowire_core::analyze_frame_file(&resolved_input)
        .context("capture decoding failed")?;
    let json = to_json(&rep, opts.pretty, opts.compact)?;

    match report_path {
        None => print!("{}", json),
        Some(report_path) => {
            if let Some(parent) = report_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&report_path, json)
                .with_context(|| format!("Failed to write report: {}", report_path.display()))?;
            if !opts.quiet {
                eprintln!("OK: report written -> {}", report_path.display());
            }
        }
    }

    if opts.list_issues && !opts.quiet {
        print_issues(&rep);
    }
    if opts.strict && !rep.issues.is_empty() {
        return Err(CliError::new(
            format!("{} frame(s) rejected or skipped", rep.issues.len()),
            Some("use --list-issues to inspect".to_string()),
        ));
    }
    Ok(())
}

#[derive(Serialize)]
struct FrameOutput {
    frame: DecodedFrame,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<ScoreboardEvent>,
}

fn cmd_frame(input: &str, pretty: bool) -> Result<(), CliError> {
    let digits: String = input.split_whitespace().collect();
    let bytes = hex::decode(&digits).map_err(|err| {
        CliError::new(
            format!("invalid frame hex: {err}"),
            Some("pass the raw frame bytes as hex digits".to_string()),
        )
    })?;

    let frame = decode_frame(&bytes).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("expected id, ETB SYN, [8 digits], SOH, 10-digit type, STX, payload".to_string()),
        )
    })?;

    let mut dispatcher = EventDispatcher::new(());
    let event = dispatcher.dispatch(&frame).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some(format!(
                "payload {:?} does not match message type {}",
                frame.payload, frame.message_type
            )),
        )
    })?;

    let json = to_json(&FrameOutput { frame, event }, pretty, false)?;
    println!("{}", json);
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn ensure_distinct_output(report_path: &Path, input_abs: &Path) -> Result<(), CliError> {
    let parent = match report_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A missing parent is created later, so it cannot alias the input.
    let Ok(report_dir) = fs::canonicalize(parent) else {
        return Ok(());
    };
    let file_name = report_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid report path: {}", report_path.display()))?;
    if report_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!(
                "report path must differ from input: {}",
                report_path.display()
            ),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn print_issues(rep: &polowire_core::Report) {
    eprintln!("Issues:");
    for issue in &rep.issues {
        eprintln!(
            "  line {} {} ({}): {}",
            issue.line, issue.kind, issue.severity, issue.message
        );
    }
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .hex or .txt capture file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .hex or .txt capture file".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "hex" && ext != "txt" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .hex or .txt capture file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected .hex or .txt".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single capture file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
