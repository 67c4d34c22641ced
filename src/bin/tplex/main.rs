//! Command-line interface for tplex
//! This binary tokenizes TP programs and dumps the token stream in one of several formats.
//!
//! Usage:
//!   tplex `<path>` [--lexer `<alias>`] [--format `<format>`] [--config `<file>`]  - Tokenize a file ('-' for stdin)
//!   tplex --list-lexers                                                    - List the built-in lexers
//!   tplex --list-formats                                                   - List the output formats
mod logging;

use clap::{Arg, ArgAction, Command};
use std::io::Read;
use tplex::config::{Loader, TplexConfig};
use tplex::highlight::formats::FormatRegistry;
use tplex::highlight::lexers::{all_lexers, get_lexer_by_name};
use tracing::{debug, info};

const LOG_TARGET: &str = "tplex::cli";

fn main() {
    let matches = Command::new("tplex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize FANUC TP programs for syntax highlighting")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the file to tokenize, or '-' for stdin")
                .required_unless_present_any(["list-lexers", "list-formats"])
                .index(1),
        )
        .arg(
            Arg::new("lexer")
                .long("lexer")
                .short('l')
                .help("Lexer alias (e.g., 'tp', 'text'); defaults to the configured lexer"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (raw, json, yaml, text); defaults to the configured format"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for trace output)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("list-lexers")
                .long("list-lexers")
                .help("List the built-in lexers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List the available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    logging::init(matches.get_count("verbose"));

    if matches.get_flag("list-lexers") {
        handle_list_lexers_command();
        return;
    }
    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("lexer"),
        matches.get_one::<String>("format"),
    );
    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing");
    handle_tokenize_command(path, &config);
}

/// Build the effective configuration: defaults, then the user file, then command line flags.
fn load_config(
    file: Option<&String>,
    lexer: Option<&String>,
    format: Option<&String>,
) -> TplexConfig {
    let mut loader = Loader::new();
    if let Some(file) = file {
        loader = loader.with_file(file);
    }

    let overrides = [("output.lexer", lexer), ("output.format", format)];
    for (key, value) in overrides {
        if let Some(value) = value {
            loader = loader
                .set_override(key, value.as_str())
                .unwrap_or_else(|e| {
                    eprintln!("Invalid option {}: {}", key, e);
                    std::process::exit(1);
                });
        }
    }

    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    debug!(target: LOG_TARGET, ?config, "configuration loaded");
    config
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Handle the tokenize command
fn handle_tokenize_command(path: &str, config: &TplexConfig) {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let lexer = get_lexer_by_name(&config.output.lexer).unwrap_or_else(|| {
        eprintln!("Unknown lexer '{}'", config.output.lexer);
        eprintln!("\nAvailable lexers:");
        for lexer in all_lexers() {
            eprintln!("  {}", lexer.info().aliases.join(", "));
        }
        std::process::exit(1);
    });

    let text = config.lexer.preprocess(&source);
    let tokens = lexer.tokenize(&text);
    info!(
        target: LOG_TARGET,
        lexer = lexer.identifier(),
        tokens = tokens.len(),
        errors = tokens.iter().filter(|t| t.is_error()).count(),
        "tokenized {}",
        path
    );

    let registry = FormatRegistry::with_defaults();
    let output = registry
        .format(&tokens, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            eprintln!("Available formats: {}", registry.list_formats().join(", "));
            std::process::exit(1);
        });

    print!("{}", output);
}

/// Handle the list-lexers command
fn handle_list_lexers_command() {
    println!("Available lexers:\n");
    for lexer in all_lexers() {
        let info = lexer.info();
        println!("  {} ({})", info.name, lexer.identifier());
        println!("    aliases:   {}", info.aliases.join(", "));
        if !info.filenames.is_empty() {
            println!("    filenames: {}", info.filenames.join(", "));
        }
        if !info.mimetypes.is_empty() {
            println!("    mimetypes: {}", info.mimetypes.join(", "));
        }
        println!();
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
