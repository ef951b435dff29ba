//! initialisms CLI
//!
//! Commands:
//!   convert  - Print name variants
//!   rules    - List the initialism table
//!   check    - Compare the matcher engines over the table
//!   schema   - Print JSON schema for an output type

use ::initialisms::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    init_logging(&args);

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "convert" => cmd_convert(&args[2..]),
        "rules" => cmd_rules(),
        "check" => cmd_check(),
        "schema" => cmd_schema(&args[2..]),
        "version" | "--version" | "-V" => {
            println!("initialisms {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
initialisms - Identifier naming with acronym normalization

USAGE:
    initialisms <COMMAND> [OPTIONS]

COMMANDS:
    convert <NAME>...                Print every variant of each name
    rules                            List the initialism table in application order
    check                            Run both matcher engines over the table and diff them
    schema [names|config]            Print JSON schema for an output type
    version                          Print version

OPTIONS:
    --format <text|json>             Output format for convert (default: text)
    --engine <regex|substring>       Matcher engine (default: regex)
    --config <file>                  YAML config file; flags override it
    -v, --verbose                    Debug logging (-vv for trace)

ENVIRONMENT:
    INITIALISMS_LOG                  Log level: error, warn, info, debug, trace

EXAMPLES:
    initialisms convert DbInstanceId roleArn
    initialisms convert SSEKMSKeyId --format json
    initialisms rules | grep Ttl
"#
    );
}

// ============================================================================
// Logging
// ============================================================================

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN",
                Level::Info => "INFO",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            eprintln!("[{}] {}: {}", tag, record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(args: &[String]) {
    let mut level = std::env::var("INITIALISMS_LOG")
        .ok()
        .and_then(|v| LevelFilter::from_str(&v).ok())
        .unwrap_or(LevelFilter::Warn);

    if args.iter().any(|a| a == "-vv") {
        level = LevelFilter::Trace;
    } else if args.iter().any(|a| a == "-v" || a == "--verbose") {
        level = level.max(LevelFilter::Debug);
    }

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_convert(args: &[String]) -> Result<()> {
    let names = positional_args(args);
    if names.is_empty() {
        return Err(Error::Usage(
            "initialisms convert <NAME>... [--format text|json]".into(),
        ));
    }

    let config = load_config(args)?;
    let normalizer = Normalizer::new(config.engine)?;
    let converted: Vec<Names> = names
        .iter()
        .map(|name| Names::with_normalizer(name, &normalizer))
        .collect();

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&converted)?),
        OutputFormat::Text => println!("{}", render_table(&converted, &config.variants)),
    }
    Ok(())
}

fn cmd_rules() -> Result<()> {
    for (i, rule) in INITIALISMS.iter().enumerate() {
        let matcher = rule
            .matcher
            .map_or_else(|| "literal".to_string(), |m| m.to_string());
        println!(
            "{:>3}  {:<8} {:<8} {:<8} {}",
            i + 1,
            rule.camel,
            rule.upper,
            rule.lower,
            matcher
        );
    }
    Ok(())
}

fn cmd_check() -> Result<()> {
    let regex = Normalizer::new(MatchEngine::Regex)?;
    let substring = Normalizer::new(MatchEngine::Substring)?;

    let mut probes = 0;
    let mut mismatches = 0;
    for rule in INITIALISMS {
        for subject in rule.probes() {
            probes += 1;
            let a = Names::with_normalizer(&subject, &regex);
            let b = Names::with_normalizer(&subject, &substring);
            if a != b {
                mismatches += 1;
                println!("MISMATCH {} ({})", subject, rule.camel);
                println!("  regex:     {}", a);
                println!("  substring: {}", b);
            }
        }
    }

    if mismatches > 0 {
        return Err(format!("{} of {} probes disagree between engines", mismatches, probes).into());
    }
    println!(
        "✓ {} probes across {} rules, engines agree",
        probes,
        INITIALISMS.len()
    );
    Ok(())
}

fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: names, config");
            Ok(())
        }
        "names" => print_schema::<Vec<Names>>(),
        "config" => print_schema::<Config>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Flags that consume the following argument
const VALUE_FLAGS: [&str; 3] = ["--format", "--engine", "--config"];

fn parse_flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for (i, arg) in args.iter().enumerate() {
        if arg == flag {
            return args.get(i + 1).map(String::as_str);
        }
    }
    None
}

fn positional_args(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip = false;
    for arg in args {
        if skip {
            skip = false;
        } else if VALUE_FLAGS.contains(&arg.as_str()) {
            skip = true;
        } else if !arg.starts_with('-') {
            out.push(arg.as_str());
        }
    }
    out
}

/// Config file (if any) with command-line overrides applied
fn load_config(args: &[String]) -> Result<Config> {
    let mut config = match parse_flag_value(args, "--config") {
        Some(path) => Config::from_file(&PathBuf::from(path))?,
        None => Config::default(),
    };

    if let Some(format) = parse_flag_value(args, "--format") {
        config.format = OutputFormat::from_name(format)
            .ok_or_else(|| Error::Usage(format!("unknown format '{}'", format)))?;
    }
    if let Some(engine) = parse_flag_value(args, "--engine") {
        config.engine = MatchEngine::from_name(engine)
            .ok_or_else(|| Error::Usage(format!("unknown engine '{}'", engine)))?;
    }
    Ok(config)
}

fn render_table(names: &[Names], variants: &[Variant]) -> String {
    let columns: Vec<Variant> = std::iter::once(Variant::Original)
        .chain(variants.iter().copied().filter(|v| *v != Variant::Original))
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .map(|v| {
            names
                .iter()
                .map(|n| n.get(*v).chars().count())
                .chain(std::iter::once(v.name().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<&str> = columns.iter().map(|v| v.name()).collect();
    let mut lines = vec![pad_row(&header, &widths)];
    for n in names {
        let cells: Vec<&str> = columns.iter().map(|v| n.get(*v)).collect();
        lines.push(pad_row(&cells, &widths));
    }
    lines.join("\n")
}

fn pad_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
