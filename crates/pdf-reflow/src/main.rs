//! pdf-reflow — reformat the pdftotext output of a paginated PDF novel into
//! continuous, paragraph-structured prose.
//!
//! Tuned to the known layout of the San Ti (Three-Body) series, not to
//! arbitrary PDFs. `--book` selects which book description to apply;
//! additional descriptions can be defined in TOML config files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use reflow_core::book::{BookDescription, BookRegistry};
use reflow_core::classify::reflow;
use reflow_core::error::ReflowError;

#[derive(Parser)]
#[command(
    name = "pdf-reflow",
    version,
    about = "Reformat a paginated PDF novel into continuous prose"
)]
struct Cli {
    /// Input file: a PDF, or already-extracted text with --from-text
    #[arg(required_unless_present = "list_books")]
    input: Option<PathBuf>,

    /// Write output to FILE instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Book description to apply
    #[arg(long, default_value = "book1")]
    book: String,

    /// Treat the input as pdftotext output and skip the converter
    #[arg(long)]
    from_text: bool,

    /// List known book descriptions and exit
    #[arg(long)]
    list_books: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// `[books.NAME]` tables from a config file.
#[derive(Debug, Default, Deserialize)]
struct BooksFile {
    #[serde(default)]
    books: BTreeMap<String, BookDescription>,
}

/// Merge book descriptions from global and project-local TOML files over the
/// built-ins. Later files override earlier ones. Missing files are silently
/// ignored.
fn load_book_files(registry: &mut BookRegistry) {
    // 1. Global config: ~/.config/pdf-reflow/books.toml
    if let Some(config_dir) = dirs::config_dir() {
        let global_path = config_dir.join("pdf-reflow").join("books.toml");
        merge_books_file(registry, &global_path);
    }

    // 2. Project-local config: ./.pdf-reflow.toml
    merge_books_file(registry, Path::new(".pdf-reflow.toml"));
}

fn merge_books_file(registry: &mut BookRegistry, path: &Path) {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return;
    };
    match toml::from_str::<BooksFile>(&contents) {
        Ok(parsed) => {
            for (name, desc) in parsed.books {
                log::debug!("Loaded book description '{}' from {}", name, path.display());
                registry.insert(name, desc);
            }
        }
        Err(e) => {
            log::warn!("Failed to parse {}: {}", path.display(), e);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose > 0 { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut registry = BookRegistry::with_builtins();
    load_book_files(&mut registry);

    if cli.list_books {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let book = registry
        .get(&cli.book)
        .ok_or_else(|| ReflowError::UnknownBook(cli.book.clone()))
        .with_context(|| format!("known books: {}", registry.names().join(", ")))?;

    // clap guarantees input is present unless --list-books was given.
    let input = cli.input.as_ref().context("no input file given")?;

    let text = if cli.from_text {
        std::fs::read_to_string(input)
            .with_context(|| format!("Cannot read {}", input.display()))?
    } else {
        reflow_input_pdf::extract_text(input)?
    };

    let reflowed = reflow(text.lines(), book)?;

    log::info!(
        "Reflowed {} input lines into {} bytes",
        text.lines().count(),
        reflowed.len()
    );

    match &cli.output {
        Some(path) => {
            std::fs::write(path, reflowed.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Output written to {}", path.display());
        }
        None => {
            // Fragments embed their own separators; print them verbatim.
            print!("{}", reflowed);
        }
    }

    Ok(())
}
