use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mdhtml::{Config, Error, Result};

#[derive(Parser)]
#[command(name = "mdhtml", version)]
#[command(about = "Convert Markdown files to HTML")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to input name with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, default_value = "mdhtml.toml")]
    config: PathBuf,

    /// Write only the rendered fragment, without the page template
    #[arg(long)]
    fragment: bool,

    /// Log progress at info level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose forces INFO, otherwise RUST_LOG decides
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => println!("Created {}", output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let markdown = read(&cli.input)?;
    info!(input = %cli.input.display(), "rendering");

    let html = if cli.fragment {
        mdhtml::markdown_to_html(&markdown)?
    } else {
        let config = Config::load(&cli.config);
        mdhtml::generate_page(&markdown, &config.page)?.html
    };

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("html"));
    fs::write(&output, html).map_err(|source| Error::Io {
        path: output.clone(),
        source,
    })?;

    Ok(output)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
