//! Command-line interface for cfront
//! This binary tokenizes, parses and inspects source files of the cfront language.
//!
//! Usage:
//!   cfront tokens `<path>` [--format `<format>`]   - List the tokens of a file
//!   cfront parse `<path>` [--format `<format>`]    - Show the concrete parse tree
//!   cfront ast `<path>` [--format `<format>`]      - Show the AST
//!   cfront list-formats                          - List available formats
//!
//! Every command accepts `--config <file>`, layered over `./cfront.toml` and the built-in
//! defaults.

use cfront::cfront::config::{Loader, Settings};
use cfront::cfront::diagnostics::{format_source_context, SourceLocation};
use cfront::cfront::formats::TOKEN_FORMATS;
use cfront::cfront::pipeline::{PipelineExecutor, ProcessingSpec, Stage};
use clap::{Arg, ArgMatches, Command};
use std::fs;
use std::process;

const LOCAL_CONFIG: &str = "cfront.toml";

fn path_and_format(name: &'static str, about: &'static str, format_help: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("path")
                .help("Path to the source file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help(format_help),
        )
}

fn cli() -> Command {
    Command::new("cfront")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize, parse and inspect C-like source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over ./cfront.toml and the defaults"),
        )
        .subcommand(path_and_format(
            "tokens",
            "List the tokens of a file",
            "Token format: simple or json (default from config: tokens.format)",
        ))
        .subcommand(path_and_format(
            "parse",
            "Show the concrete parse tree of a file",
            "Tree format, see list-formats (default from config: inspect.format)",
        ))
        .subcommand(path_and_format(
            "ast",
            "Show the abstract syntax tree of a file",
            "Tree format, see list-formats (default from config: inspect.format)",
        ))
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn main() {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("tokens", sub)) => handle_run_command(Stage::Tokens, sub),
        Some(("parse", sub)) => handle_run_command(Stage::Parse, sub),
        Some(("ast", sub)) => handle_run_command(Stage::Ast, sub),
        Some(("list-formats", sub)) => handle_list_formats_command(&load_settings(sub, None)),
        _ => {
            eprintln!("Error: unknown command");
            process::exit(1);
        }
    }
}

/// Layer defaults, `./cfront.toml`, `--config` and a `--format` override
fn load_settings(matches: &ArgMatches, format_key: Option<&str>) -> Settings {
    let build = || -> Result<Settings, config::ConfigError> {
        let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
        if let Some(path) = matches.get_one::<String>("config") {
            loader = loader.with_file(path);
        }
        if let (Some(key), Some(format)) = (format_key, matches.get_one::<String>("format")) {
            loader = loader.set_override(key, format.as_str())?;
        }
        loader.build()
    };
    build().unwrap_or_else(|e| {
        eprintln!("Error: failed to load configuration: {}", e);
        process::exit(1);
    })
}

/// Handle the tokens, parse and ast commands
fn handle_run_command(stage: Stage, matches: &ArgMatches) {
    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("Error: missing path");
        process::exit(1);
    };
    let format_key = match stage {
        Stage::Tokens => "tokens.format",
        Stage::Parse | Stage::Ast => "inspect.format",
    };
    let settings = load_settings(matches, Some(format_key));
    let format = match stage {
        Stage::Tokens => settings.tokens.format.clone(),
        Stage::Parse | Stage::Ast => settings.inspect.format.clone(),
    };

    let spec = ProcessingSpec::new(stage, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error: cannot read {}: {}", path, e);
        process::exit(1);
    });

    let executor = PipelineExecutor::with_settings(&settings.inspect);
    match executor.execute_and_serialize(&spec, &source) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            match e.offset() {
                Some(offset) => {
                    let position = SourceLocation::new(&source).byte_to_position(offset);
                    eprintln!("Error: {}:{}: {}", path, position, e);
                    eprint!("{}", format_source_context(&source, offset));
                }
                None => eprintln!("Error: {}", e),
            }
            process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(settings: &Settings) {
    let executor = PipelineExecutor::with_settings(&settings.inspect);

    println!("Tree formats (parse, ast):\n");
    for (name, description) in executor.registry().describe_formats() {
        println!("  {:10} {}", name, description);
    }

    println!("\nToken formats (tokens):\n");
    for name in TOKEN_FORMATS {
        println!("  {}", name);
    }
}
