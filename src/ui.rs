use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use quote_generator::{capitalize, Catalog, CategorySelector};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RandomQuote,
    QuoteByCategory,
    ListCategories,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::RandomQuote),
            "2" => Some(MenuChoice::QuoteByCategory),
            "3" => Some(MenuChoice::ListCategories),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct App {
    pub catalog: Catalog,
    rng: ThreadRng,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            rng: rand::thread_rng(),
        }
    }
}

/// Run the interactive menu loop until the user exits or stdin closes.
///
/// Query errors (empty catalog, unknown category) are reported and the
/// loop continues; they are never fatal.
pub fn run_ui(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        display_menu();
        print!("\nEnter your choice (1-4): ");
        io::stdout().flush()?;

        let Some(choice) = read_line(&mut lines)? else {
            break;
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::RandomQuote) => {
                clear_screen()?;
                show_random_quote(app);
            }
            Some(MenuChoice::QuoteByCategory) => {
                clear_screen()?;
                if !show_quote_by_category(app, &mut lines)? {
                    break;
                }
            }
            Some(MenuChoice::ListCategories) => {
                clear_screen()?;
                show_categories(&app.catalog);
            }
            Some(MenuChoice::Exit) => {
                clear_screen()?;
                println!("Thanks for using Quote Generator! Stay inspired!\n");
                return Ok(());
            }
            None => {
                clear_screen()?;
                println!("Invalid choice. Please enter a number between 1 and 4.");
            }
        }

        if !pause(&mut lines)? {
            break;
        }
        clear_screen()?;
    }

    // stdin closed mid-interaction
    println!("\nGoodbye!");
    Ok(())
}

fn display_menu() {
    println!("{}", "=".repeat(50));
    println!("  QUOTE GENERATOR");
    println!("{}", "=".repeat(50));
    println!("1. Get a random quote");
    println!("2. Get a quote by category");
    println!("3. View all categories");
    println!("4. Exit");
    println!("{}", "=".repeat(50));
}

fn show_random_quote(app: &mut App) {
    match app.catalog.random_quote(&mut app.rng) {
        Ok(quote) => println!("\n{}\n", quote),
        Err(err) => println!("{}", err),
    }
}

/// Returns false when stdin closed and the loop should stop.
fn show_quote_by_category<I>(app: &mut App, lines: &mut I) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    let listing = app.catalog.list_categories();
    if listing.is_empty() {
        println!("No categories available.");
        return Ok(true);
    }

    println!("Available categories:");
    for (ordinal, (label, _count)) in listing.iter().enumerate() {
        println!("  {}. {}", ordinal + 1, capitalize(label));
    }

    print!("Enter category number or name: ");
    io::stdout().flush()?;

    let Some(input) = read_line(lines)? else {
        return Ok(false);
    };

    clear_screen()?;
    match app.catalog.quotes_by_category(&CategorySelector::parse(&input)) {
        Ok(quotes) => {
            // a resolved category always has at least one quote
            let pick = app.rng.gen_range(0..quotes.len());
            println!("\n{}\n", quotes[pick]);
        }
        Err(err) => println!("{}", err),
    }

    Ok(true)
}

fn show_categories(catalog: &Catalog) {
    let listing = catalog.list_categories();
    if listing.is_empty() {
        println!("No categories available.");
        return;
    }

    println!("Available categories:");
    for (label, count) in listing {
        println!("  • {} ({} quotes)", capitalize(label), count);
    }
}

fn read_line<I>(lines: &mut I) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Returns false when stdin closed and the loop should stop.
fn pause<I>(lines: &mut I) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("\nPress Enter to continue...");
    io::stdout().flush()?;
    Ok(read_line(lines)?.is_some())
}

pub fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
