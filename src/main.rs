// Only compile the interactive shell when the TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_QUOTES_FILE: &str = "data/quotes.json";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Optional positional argument overrides the bundled quotes file
    let quotes_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_QUOTES_FILE));

    run_ui_mode(&quotes_path)
}

#[cfg(feature = "tui")]
fn run_ui_mode(quotes_path: &Path) -> Result<()> {
    use anyhow::Context;
    use quote_generator::Catalog;

    let catalog = Catalog::load(quotes_path)
        .with_context(|| format!("failed to load quotes from {}", quotes_path.display()))?;

    ui::clear_screen()?;
    println!("Welcome to Quote Generator!");
    if catalog.is_empty() {
        println!("Warning: no quotes found in the file.\n");
    } else {
        println!("Loaded {} quotes.\n", catalog.len());
    }

    let mut app = ui::App::new(catalog);
    ui::run_ui(&mut app)?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_quotes_path: &Path) -> Result<()> {
    eprintln!("Interactive mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
