//! Command-line interface for lolmark
//! This binary parses a lolmark file and prints it in one of the inspection formats.
//!
//! Usage:
//!   lolmark `<path>` [--format `<format>`] [--config `<file>`]   - Parse, resolve and print
//!   lolmark `<path>` --unresolved                              - Skip variable resolution
//!   lolmark --list-formats                                     - List the available formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use lolmark_config::{ConfigError, Loader, LolmarkConfig};
use lolmark_parser::lolmark::formats::FormatRegistry;
use lolmark_parser::lolmark::pipeline::{ExecutionError, PipelineExecutor, TOKENS_FORMAT};
use std::fs;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("lolmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting lolmark documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the lolmark file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: treeviz, json, lolmark or tokens (default from config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .help("Report only the first unresolved variable")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("unresolved")
                .long("unresolved")
                .help("Skip variable resolution")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("line-numbers")
                .long("line-numbers")
                .help("Prefix treeviz nodes with their line number")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline stages to stderr (repeat for more detail)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(2);
    });
    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("A path is required unless listing formats");
        process::exit(2);
    };
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.inspect.format.clone());

    handle_execute_command(&config, path, &format, !matches.get_flag("unresolved"));
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lolmark_parser={}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer the `--config` file and flag overrides over the defaults
fn load_config(matches: &ArgMatches) -> Result<LolmarkConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("fail-fast") {
        loader = loader.set_override("resolution.fail_fast", true)?;
    }
    if matches.get_flag("line-numbers") {
        loader = loader.set_override("inspect.show_line_numbers", true)?;
    }
    loader.build()
}

/// Handle the execute command
fn handle_execute_command(config: &LolmarkConfig, path: &str, format: &str, resolve: bool) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        process::exit(2);
    });

    let mut options = config.pipeline_options();
    options.resolve = resolve;
    debug!(path, format, ?options, "inspecting document");
    let executor = PipelineExecutor::with_options(options);

    match executor.execute_and_serialize_with_params(&source, format, &config.format_params()) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(ExecutionError::Pipeline(error)) => {
            eprintln!("{}", error.render(&source));
            process::exit(1);
        }
        Err(error @ ExecutionError::Format(_)) => {
            eprintln!("{}", error);
            eprintln!("Available formats: {}", executor.available_formats().join(", "));
            process::exit(2);
        }
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for (name, description) in FormatRegistry::with_defaults().describe() {
        println!("  {}", name);
        println!("    {}", description);
    }
    println!("  {}", TOKENS_FORMAT);
    println!("    Raw token stream as JSON, whitespace included");
}
