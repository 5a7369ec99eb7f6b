// Command-line interface for leafmark
//
// This binary converts markdown files in the leafmark dialect to HTML fragments, and exposes the
// intermediate stages of the pipeline for debugging.
//
// The core capabilities live in the leafmark crate; this is only a shell around it. Site
// generation is out of scope here.
//
// Usage:
//  leafmark <input> [--output <file>]              - Convert to an HTML fragment (default)
//  leafmark convert <input> [--output <file>]      - Same as above (explicit)
//  leafmark inspect <input> [<transform>]          - Dump a pipeline stage (defaults to "tree-json")
//  leafmark title <input>                          - Print the document title
//  leafmark --list-transforms                      - List available transforms
//
// Configuration is read from ./leafmark.toml when present, then from --config <path>.

use leafmark_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use leafmark::ConvertOptions;
use leafmark_config::{LeafmarkConfig, Loader};
use std::collections::HashMap;
use std::fs;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "title", "help"];

fn build_cli() -> Command {
    Command::new("leafmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown to HTML fragments")
        .long_about(
            "leafmark converts a small markdown dialect into HTML.\n\n\
            Commands:\n  \
            - convert: Markdown to an HTML fragment (default)\n  \
            - inspect: View intermediate representations (blocks, tokens, tree)\n  \
            - title:   Print the first top-level heading\n\n\
            Examples:\n  \
            leafmark page.md                        # HTML to stdout\n  \
            leafmark page.md -o page.html           # HTML to a file\n  \
            leafmark inspect page.md tokens-json    # Inline tokens per block",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a leafmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a markdown file to an HTML fragment (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect intermediate representations of a markdown file")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'tree-json'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("title")
                .about("Print the document title (first '# ' heading)")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // A bare path as first argument means "convert"
    let args = if args.len() > 1
        && !args[1].starts_with('-')
        && !SUBCOMMANDS.contains(&args[1].as_str())
    {
        let mut injected = vec![args[0].clone(), "convert".to_string()];
        injected.extend_from_slice(&args[1..]);
        injected
    } else {
        args
    };

    let matches = build_cli().get_matches_from(&args);

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &config);
        }
        Some(("title", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_title_command(path);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn read_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: Option<&str>, config: &LeafmarkConfig) {
    let source = read_source(input);
    let options = ConvertOptions::from(&config.convert);

    let root = leafmark::convert_document_with_options(&source, &options).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    log::debug!("converted '{input}' with {} top-level node(s)", root.children().len());

    let html = leafmark::render(&root).unwrap_or_else(|e| {
        eprintln!("Render error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{html}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, config: &LeafmarkConfig) {
    let source = read_source(path);
    let options = ConvertOptions::from(&config.convert);

    let mut params = HashMap::new();
    params.insert("pretty".to_string(), config.inspect.pretty.to_string());

    let output = transforms::execute_transform(&source, transform, &options, &params)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    println!("{output}");
}

/// Handle the title command
fn handle_title_command(path: &str) {
    let source = read_source(path);
    match leafmark::extract_title(&source) {
        Ok(title) => println!("{title}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> LeafmarkConfig {
    let loader = Loader::new().with_optional_file("leafmark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
