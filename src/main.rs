// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Context, Result};
use theory::config::{TheoryConfig, CONFIG_ENV};
use theory::music::{scale_notes, Note, ScaleDefinitions, TheoryError, SCALE_DEFS};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("scales - notes of a scale for a given tonic");
    println!();
    println!("Usage: scales [--config <PATH>] <TONIC> [SCALE NAME...]");
    println!();
    println!("Examples:");
    println!("  scales c                 C Major");
    println!("  scales b min             B Natural Minor");
    println!("  scales f# harmonic minor");
    println!();
    println!("Options:");
    println!("  --config <PATH>   YAML or TOML settings (default: ${})", CONFIG_ENV);
    println!("  --help            Show this help message");
}

fn load_config(path: Option<PathBuf>) -> Result<TheoryConfig> {
    match path.or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from)) {
        Some(path) => TheoryConfig::load(&path),
        None => Ok(TheoryConfig::default()),
    }
}

fn init_logging(config: &TheoryConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    // a subscriber may already be installed when run more than once in-process
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn format_list<T: ToString>(items: &[T]) -> String {
    let items: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(" "))
}

fn run(args: &[String]) -> Result<i32> {
    let mut config_path = None;
    let mut positional = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(0);
            }
            _ => positional.push(arg.as_str()),
        }
    }

    let config = load_config(config_path).context("Failed to load configuration")?;
    init_logging(&config);
    debug!(?config, "configuration loaded");

    let Some((tonic, scale_words)) = positional.split_first() else {
        println!("You need to pass the tonic/root key to get the notes for.");
        print_usage();
        return Ok(1);
    };
    let tonic = tonic.to_uppercase();
    let note = Note::from_str(&tonic).ok_or_else(|| TheoryError::InvalidNote(tonic.clone()))?;

    let scale = match config.resolve_scale_name(scale_words) {
        Ok(scale) => scale,
        Err(err) => {
            println!("{}, pick one of the following:", err);
            let names: Vec<_> = if config.popular_only {
                SCALE_DEFS.popular().iter().map(|def| def.name).collect()
            } else {
                SCALE_DEFS.iter().map(|def| def.name).collect()
            };
            for name in names {
                println!("\t{}", name);
            }
            return Ok(1);
        }
    };

    let (keys, names) = scale_notes(note, scale);
    println!("Notes in {} {}: {}", tonic, scale, format_list(&names));
    println!("Key indexes in {} {}: {}", tonic, scale, format_list(&keys));
    println!();
    Ok(0)
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_run_scale_lookup() {
        let file = config_file("");
        let path = file.path().to_str().unwrap();
        assert_eq!(run(&args(&["--config", path, "b", "min"])).unwrap(), 0);
        assert_eq!(run(&args(&["--config", path, "c"])).unwrap(), 0);
        assert_eq!(run(&args(&["--help"])).unwrap(), 0);
    }

    #[test]
    fn test_run_missing_tonic() {
        let file = config_file("");
        let path = file.path().to_str().unwrap();
        assert_eq!(run(&args(&["--config", path])).unwrap(), 1);
    }

    #[test]
    fn test_run_invalid_tonic() {
        let file = config_file("");
        let path = file.path().to_str().unwrap();
        let err = run(&args(&["--config", path, "H", "major"])).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid note name 'H'"));
    }

    #[test]
    fn test_run_unknown_scale() {
        let file = config_file("popular_only = true");
        let path = file.path().to_str().unwrap();
        assert_eq!(run(&args(&["--config", path, "c", "bogus"])).unwrap(), 1);
    }

    #[test]
    fn test_run_bad_config() {
        assert!(run(&args(&["--config"])).is_err());
        assert!(run(&args(&["--config", "/nonexistent/theory.yaml", "c"])).is_err());
    }
}
