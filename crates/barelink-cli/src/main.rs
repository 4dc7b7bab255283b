use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use barelink_core::{
    HtmlEmitOptions, emit_html_sanitized_with_options, emit_html_with_options, find_links,
};
use clap::Parser;
use log::LevelFilter;
use serde::Serialize;

/// Turn bare URLs in text into HTML links.
#[derive(Debug, Parser)]
#[command(name = "barelink-cli", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Run the output through the HTML sanitizer.
    #[arg(long)]
    sanitized: bool,

    /// Wrap the output in a `<p>` element.
    #[arg(long)]
    paragraph: bool,

    /// `rel` attribute to put on every link.
    #[arg(long, value_name = "VALUE")]
    rel: Option<String>,

    /// Print the links found as JSON instead of HTML.
    #[arg(long)]
    list: bool,

    /// Raise log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct JsonLink {
    href: String,
    text: String,
    start: usize,
    end: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = read_source(cli.input.as_ref())?;

    if cli.list {
        let links: Vec<JsonLink> = find_links(&source)
            .into_iter()
            .map(|link| JsonLink {
                href: link.href,
                text: link.text,
                start: link.span.start,
                end: link.span.end,
            })
            .collect();
        log::debug!("found {} links", links.len());
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    let options = HtmlEmitOptions {
        wrap_paragraph: cli.paragraph,
        link_rel: cli.rel,
    };
    let html = if cli.sanitized {
        emit_html_sanitized_with_options(&source, &options)
    } else {
        emit_html_with_options(&source, &options)
    };
    print!("{}", html);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_source(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
