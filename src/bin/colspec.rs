//! colspec CLI - Column template parser for LaTeX-style array preambles

use clap::{Parser, Subcommand, ValueEnum};
use colspec::{
    constants::SPECIFIER_HELP,
    diagnostics::{check_template, format_diagnostics},
    environment::extract_template,
    ArrayMetadata, ColumnError, ColumnParser, ColumnParserOptions,
};
use serde::Serialize;
use std::io::{self, Read};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "colspec")]
#[command(version)]
#[command(about = "colspec - Parse LaTeX-style column templates into array metadata", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Column templates (reads one template per line from stdin if none are given)
    templates: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Check mode - report diagnostics instead of metadata
    #[arg(long)]
    check: bool,

    /// Treat each input as LaTeX source and take the template from its
    /// first array/tabular environment
    #[arg(long)]
    env: bool,

    /// Only accept the core grammar (no `*`, `P`, `M`, `B`)
    #[arg(long)]
    strict: bool,

    /// Maximum number of specifiers dispatched per template
    #[arg(long, default_value_t = ColumnParserOptions::default().max_columns)]
    max_columns: usize,

    /// Disable colored output (for check mode)
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the recognised column specifiers
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable field listing
    Text,
    /// One JSON document per template
    Json,
}

/// JSON report for one template
#[derive(Serialize)]
struct Report<'a> {
    template: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a ArrayMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Serialize)]
struct ErrorReport {
    kind: &'static str,
    message: String,
    offset: usize,
}

impl From<&ColumnError> for ErrorReport {
    fn from(err: &ColumnError) -> Self {
        Self {
            kind: err.kind().id(),
            message: err.to_string(),
            offset: err.offset(),
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Commands::Info) = cli.command {
        print_info();
        return Ok(());
    }

    let options = if cli.strict {
        ColumnParserOptions {
            max_columns: cli.max_columns,
            ..ColumnParserOptions::strict()
        }
    } else {
        ColumnParserOptions {
            max_columns: cli.max_columns,
            ..ColumnParserOptions::default()
        }
    };

    let inputs = read_inputs(&cli)?;
    let mut failed = false;

    for input in &inputs {
        let template = if cli.env {
            match extract_template(input) {
                Some(env) => {
                    debug!(environment = %env.name, "template extracted");
                    env.template
                }
                None => {
                    eprintln!("error: no array or tabular environment found");
                    failed = true;
                    continue;
                }
            }
        } else {
            input.clone()
        };

        if cli.check {
            let result = check_template(&template, &options);
            println!("{}", format_diagnostics(&result, !cli.no_color));
            failed |= result.has_errors();
            continue;
        }

        let mut array = ArrayMetadata::new();
        let outcome = ColumnParser::with_options(options.clone()).process(&template, &mut array);
        failed |= outcome.is_err();
        match cli.format {
            OutputFormat::Text => print_text(&template, &array, outcome.as_ref().err()),
            OutputFormat::Json => print_json(&template, &array, outcome.as_ref().err())?,
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_inputs(cli: &Cli) -> io::Result<Vec<String>> {
    if !cli.templates.is_empty() {
        return Ok(cli.templates.clone());
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    if cli.env {
        return Ok(vec![buffer]);
    }
    Ok(buffer
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

fn print_text(template: &str, array: &ArrayMetadata, error: Option<&ColumnError>) {
    println!("template: {}", template);
    if let Some(err) = error {
        println!("  error: {} ({} at {})", err, err.kind(), err.offset());
        return;
    }
    println!("  columnalign: {}", array.columnalign().unwrap_or(""));
    if let Some(width) = array.columnwidth() {
        println!("  columnwidth: {}", width);
    }
    if let Some(lines) = array.columnlines() {
        println!("  columnlines: {}", lines);
    }
    if !array.frame.is_empty() {
        let frame: Vec<String> = array.frame.iter().map(|s| s.to_string()).collect();
        println!("  frame: {}", frame.join(" "));
    }
    println!("  dashed: {}", array.dashed);
}

fn print_json(
    template: &str,
    array: &ArrayMetadata,
    error: Option<&ColumnError>,
) -> io::Result<()> {
    let report = Report {
        template,
        metadata: if error.is_none() { Some(array) } else { None },
        error: error.map(ErrorReport::from),
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}

fn print_info() {
    println!("colspec {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Column specifiers:");
    for (c, description) in SPECIFIER_HELP {
        let shown = if *c == ' ' {
            "' '".to_string()
        } else {
            c.to_string()
        };
        println!("  {:<4} {}", shown, description);
    }
}
