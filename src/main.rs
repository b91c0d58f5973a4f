//! Simplified sort: CLI entry point
//!
//! Sorts lines of text files by whole-line or single-column keys with
//! numeric, human-size and month comparison modes, or checks that input is
//! already sorted.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

use clap::{Arg, ArgAction, Command};

use rsort::{
    check,
    config::SortConfig,
    error::{SortContext, SortResult},
    sort, CheckOutcome, EXIT_FAILURE, EXIT_SUCCESS,
};

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("sort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();

    let config = parse_config_from_matches(&matches)?;
    warn_conflicting_modes(&config);

    let input_files: Vec<String> = matches
        .get_many::<String>("files")
        .unwrap_or_default()
        .cloned()
        .collect();

    if matches.get_flag("check") {
        return match check(&config, &input_files)? {
            CheckOutcome::Sorted => Ok(EXIT_SUCCESS),
            CheckOutcome::Disorder { line, prev, next } => {
                eprintln!("sort: disorder at line {line}: {prev:?} > {next:?}");
                Ok(EXIT_FAILURE)
            }
        };
    }

    let sorted = sort(&config, &input_files)?;
    write_output(&sorted, config.output_file.as_deref())?;

    Ok(EXIT_SUCCESS)
}

fn build_cli() -> Command {
    Command::new("rsort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("rsort [OPTION]... [FILE]...")
        .about("Sort lines of text files")
        .long_about("Sort lines of text files by whole-line or single-column keys.\n\nComparison modes combine with a fixed priority: month names dominate human-readable sizes, which dominate plain numbers; lexicographic comparison is the final fallback for every mode.")
        .disable_help_flag(true) // We use -h for human-numeric-sort
        // Input files
        .arg(Arg::new("files")
            .help("Input files to sort (use '-' or omit for stdin)")
            .num_args(0..)
            .value_name("FILE"))
        // Sort modes
        .arg(Arg::new("numeric-sort")
            .short('n')
            .long("numeric-sort")
            .help("Compare according to string numerical value")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("human-numeric-sort")
            .short('h')
            .long("human-numeric-sort")
            .help("Compare human readable numbers (e.g., 2K 1G)")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("month-sort")
            .short('M')
            .long("month-sort")
            .help("Compare by month names (Jan..Dec)")
            .action(ArgAction::SetTrue))
        // Sort modifiers
        .arg(Arg::new("reverse")
            .short('r')
            .long("reverse")
            .help("Reverse the result of comparisons")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("unique")
            .short('u')
            .long("unique")
            .help("Output only the first of an equal run")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("ignore-trailing-blanks")
            .short('b')
            .long("ignore-trailing-blanks")
            .help("Ignore trailing blanks when comparing")
            .action(ArgAction::SetTrue))
        // Field and key options
        .arg(Arg::new("key")
            .short('k')
            .long("key")
            .help("Sort by column N (1-based); default is the whole line")
            .value_name("N")
            .value_parser(clap::value_parser!(usize)))
        .arg(Arg::new("field-separator")
            .short('t')
            .long("field-separator")
            .help("Use SEP as the column separator instead of TAB")
            .value_name("SEP"))
        // I/O options
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Write result to FILE instead of standard output")
            .value_name("FILE"))
        // Operation modes
        .arg(Arg::new("check")
            .short('c')
            .long("check")
            .help("Check for sorted input; do not sort")
            .action(ArgAction::SetTrue))
        // Add an explicit help option since we disabled the automatic one
        .arg(Arg::new("help")
            .long("help")
            .help("Display this help and exit")
            .action(ArgAction::Help))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut config = SortConfig::new()
        .with_numeric(matches.get_flag("numeric-sort"))
        .with_human_numeric(matches.get_flag("human-numeric-sort"))
        .with_month(matches.get_flag("month-sort"))
        .with_reverse(matches.get_flag("reverse"))
        .with_unique(matches.get_flag("unique"))
        .with_ignore_trailing_blanks(matches.get_flag("ignore-trailing-blanks"));

    if let Some(column) = matches.get_one::<usize>("key") {
        config.column = *column;
    }

    if let Some(separator) = matches.get_one::<String>("field-separator") {
        config.delimiter = separator.clone();
    }

    if let Some(output) = matches.get_one::<String>("output") {
        config.output_file = Some(output.clone());
    }

    config.validate()?;

    Ok(config)
}

/// Warn about conflicting mode flags; dominance resolves them, so none is
/// fatal.
fn warn_conflicting_modes(config: &SortConfig) {
    if config.numeric && config.human_numeric {
        eprintln!("sort: warning: both -n and -h specified; using -h (human-readable numbers)");
    }
    if config.month && (config.numeric || config.human_numeric) {
        eprintln!("sort: warning: -M is incompatible with -n/-h; using -M");
    }
}

/// Write sorted lines to the output file, or stdout when none is configured
fn write_output(lines: &[String], output_file: Option<&str>) -> SortResult<()> {
    let raw: Box<dyn Write> = match output_file {
        Some(path) => Box::new(File::create(path).with_file_context(path)?),
        None => Box::new(io::stdout()),
    };
    let mut writer = BufWriter::new(raw);

    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}
