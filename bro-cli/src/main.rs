//! bro — a command-line front end for the bro rendering pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;

/// Render an HTML (+ optional CSS) document to a PNG screenshot.
#[derive(Parser, Debug)]
#[command(name = "bro", author, version, about)]
struct Cli {
    /// Path to the HTML input file.
    #[arg(long, default_value = "input.html")]
    html: PathBuf,

    /// Path to a CSS stylesheet. If omitted, no styles are applied.
    #[arg(long)]
    css: Option<PathBuf>,

    /// Path to write the rendered PNG to.
    #[arg(short = 'o', long = "output", default_value = "out.png")]
    output: PathBuf,

    /// Print accumulated HTML/CSS parse errors before exiting.
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("bro: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let html = std::fs::read_to_string(&cli.html)
        .with_context(|| format!("reading HTML file {}", cli.html.display()))?;
    let css = cli
        .css
        .as_ref()
        .map(|path| std::fs::read_to_string(path).with_context(|| format!("reading CSS file {}", path.display())))
        .transpose()?;

    let result = bro_browser::render_to_png(&html, css.as_deref(), &cli.output)?;

    if cli.verbose {
        for error in &result.html_errors {
            eprintln!("{}", error.to_string().yellow());
        }
        for error in &result.css_errors {
            eprintln!("{}", error.to_string().yellow());
        }
    }

    println!("wrote {}", cli.output.display());
    Ok(())
}
