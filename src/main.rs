//! Archer Arrows CLI
//!
//! Usage:
//!   archer-arrows [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>      Write SVG to a file instead of stdout
//!   -d, --debug              Outline elements and print their ids
//!   -f, --fragment           Single-line <svg> without XML declaration
//!   --log-level <LEVEL>      Log level (off, error, warn, info, debug, trace)
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{error, info, LevelFilter};

use archer_arrows::{render_with_config, SvgConfig};

#[derive(Parser, Debug)]
#[command(name = "archer-arrows")]
#[command(about = "Draw SVG arrows between rectangular elements")]
struct Cli {
    /// Scene file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug mode: outline elements and show their ids
    #[arg(short, long)]
    debug: bool,

    /// Emit an inline fragment for embedding into another document
    #[arg(short, long)]
    fragment: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    let config = if cli.fragment {
        SvgConfig::fragment()
    } else {
        SvgConfig::new()
    }
    .with_debug(cli.debug);
    let svg = match render_with_config(&source, &config) {
        Ok(svg) => svg,
        Err(err) => {
            error!(err:err; "Render failed");
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                process::exit(1);
            }
            info!(path:? = path; "SVG written");
        }
        None => println!("{}", svg),
    }
}

fn print_intro() {
    println!(
        r#"Archer Arrows - SVG arrows between rectangular elements

USAGE:
    archer-arrows [OPTIONS] [FILE]
    cat scene.toml | archer-arrows > output.svg

OPTIONS:
    -o, --output       Write SVG to a file
    -d, --debug        Outline elements and show their ids
    -f, --fragment     Inline <svg> without XML declaration
    --log-level        off, error, warn, info, debug, trace
    -h, --help         Print help

SCENE FORMAT:
    [container]
    line_style = "curve"

    [[elements]]
    id = "a"
    bounds = {{ x = 0, y = 0, width = 100, height = 40 }}

    [[elements.relations]]
    target_id = "b"
    source_anchor = "right"
    target_anchor = "left"

    [[elements]]
    id = "b"
    bounds = {{ x = 200, y = 0, width = 100, height = 40 }}"#
    );
}
