use anyhow::{Context, Result};
use qamark_config::Config;
use qamark_engine::{OutputKind, io, render_html, render_output, render_page};
use std::path::PathBuf;
use std::{env, process};

const DEFAULT_TITLE: &str = "QA Report";

#[derive(Debug, PartialEq)]
struct Options {
    input: PathBuf,
    output: Option<PathBuf>,
    kind: OutputKind,
    fragment: bool,
    title: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut kind = OutputKind::Prose;
    let mut fragment = false;
    let mut title = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--code" => kind = OutputKind::Code,
            "--fragment" => fragment = true,
            "--title" => {
                title = Some(
                    iter.next()
                        .ok_or_else(|| "--title requires a value".to_string())?
                        .clone(),
                );
            }
            other if other.starts_with("--") => {
                return Err(format!("Unknown option: {other}"));
            }
            _ => positional.push(arg.clone()),
        }
    }

    match positional.len() {
        0 => Err("No input file provided".to_string()),
        1 | 2 => Ok(Options {
            input: PathBuf::from(&positional[0]),
            output: positional.get(1).map(PathBuf::from),
            kind,
            fragment,
            title,
        }),
        _ => Err("Too many arguments".to_string()),
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [options] <report-file> [output.html]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --code           treat the input as code/pipeline output (verbatim)");
    eprintln!("  --fragment       emit the HTML fragment only, without the page wrapper");
    eprintln!("  --title <text>   page title (default from config, then \"{DEFAULT_TITLE}\")");
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    // Config supplies presentation defaults; a missing file is fine, a
    // broken one is not.
    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    let text = io::read_report(&options.input)
        .with_context(|| format!("Failed to read {}", options.input.display()))?;
    let blocks = render_output(&text, options.kind);

    let html = if options.fragment {
        render_html(&blocks)
    } else {
        let stylesheet = match &config.stylesheet_path {
            Some(path) => Some(std::fs::read_to_string(path).with_context(|| {
                format!("Failed to read stylesheet {}", path.display())
            })?),
            None => None,
        };
        let title = options
            .title
            .or(config.page_title)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        render_page(&blocks, &title, stylesheet.as_deref())
    };

    match &options.output {
        Some(path) => io::write_html(path, &html)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{html}"),
    }

    Ok(())
}
