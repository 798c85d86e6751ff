//! flatcalc - evaluate the formulas in a flat CSV record.

mod config;
mod logger;

use anyhow::Context;
use config::{OutputStyle, load_settings};
use flatcalc_core::{BUILTINS, Document};
use log::LevelFilter;
use std::env;
use std::path::PathBuf;

fn print_usage() {
    eprintln!("Usage: flatcalc [OPTIONS] <FILE>");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <FILE>                    Record to evaluate (.csv)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>       Load settings from this TOML file");
    eprintln!("  --no-config               Ignore the user config file");
    eprintln!("  --lines                   Print one value per line");
    eprintln!("  --list                    Print values as a bracketed list (default)");
    eprintln!("  --any-extension           Accept files without a .csv extension");
    eprintln!("  -v, --verbose             Log each cell as it is evaluated");
    eprintln!("  -q, --quiet               Only log errors");
    eprintln!("  -h, --help                Print help");
    eprintln!();
    eprintln!("Functions:");
    for builtin in BUILTINS {
        eprintln!("  {:<26}{}", builtin.sheet_name, builtin.description);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut no_config = false;
    let mut output: Option<OutputStyle> = None;
    let mut any_extension = false;
    let mut level = LevelFilter::Warn;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            "--no-config" => no_config = true,
            "--lines" => output = Some(OutputStyle::Lines),
            "--list" => output = Some(OutputStyle::List),
            "--any-extension" => any_extension = true,
            "-v" | "--verbose" => level = LevelFilter::Debug,
            "-q" | "--quiet" => level = LevelFilter::Error,
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    logger::init(level);

    let Some(file_path) = file_path else {
        eprintln!("Error: missing FILE argument");
        print_usage();
        std::process::exit(1);
    };

    let settings = if no_config {
        Ok(config::Settings::default())
    } else {
        let (settings, warnings) = load_settings(config_file.as_deref());
        for warning in warnings {
            eprintln!("Warning: {}", warning);
        }
        settings
    };

    let result = settings.and_then(|mut settings| {
        if let Some(style) = output {
            settings.output = style;
        }
        if any_extension {
            settings.require_csv_extension = false;
        }
        run(&file_path, &settings)
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(path: &std::path::Path, settings: &config::Settings) -> anyhow::Result<()> {
    eprintln!("File: {}", path.display());
    let doc = Document::open(path, settings.require_csv_extension)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let results = doc.compile().context("Failed to evaluate record")?;

    match settings.output {
        OutputStyle::List => println!("{}", results),
        OutputStyle::Lines => {
            for value in results.formatted() {
                println!("{}", value);
            }
        }
    }
    Ok(())
}
