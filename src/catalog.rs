// 📚 Quote Catalog - Loading, validation and queries
// Owns the ordered quote sequence plus the derived category index

use crate::error::{CategoryNotFoundError, EmptyCatalogError, FieldFault, LoadError};
use crate::quote::Quote;
use rand::Rng;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// CATEGORY SELECTOR
// ============================================================================

/// User-supplied category selector.
///
/// Either a 1-based ordinal into the [`Catalog::list_categories`] order,
/// or a category name matched case-insensitively. The two forms are
/// mutually exclusive and tried in a fixed order: input that parses as a
/// non-negative integer is an ordinal, anything else is a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    Ordinal(usize),
    Name(String),
}

impl CategorySelector {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<usize>() {
            Ok(n) => CategorySelector::Ordinal(n),
            Err(_) => CategorySelector::Name(trimmed.to_string()),
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::Ordinal(n) => write!(f, "{}", n),
            CategorySelector::Name(name) => f.write_str(name),
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// One distinct category: original-cased label plus the positions of its
/// quotes in the loaded sequence. Every entry has at least one member.
#[derive(Debug, Clone)]
struct CategoryEntry {
    label: String,
    members: Vec<usize>,
}

/// The in-memory, read-only collection of all loaded quotes plus the
/// derived category index.
///
/// Built once at load time, never mutated afterwards. Categories are kept
/// in first-appearance order of the loaded sequence; that order is the
/// single authority for ordinal selectors. The normalized-key lookup makes
/// name resolution O(1) after the O(n) build.
#[derive(Debug, Clone)]
pub struct Catalog {
    quotes: Vec<Quote>,
    categories: Vec<CategoryEntry>,
    /// normalized label → position in `categories`
    lookup: HashMap<String, usize>,
}

impl Catalog {
    /// Load and validate a quotes file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&text)
    }

    /// Parse and validate a quotes document.
    ///
    /// Expected shape: a top-level object with a `quotes` array of
    /// `{"text", "author", "category"}` entries. Any structural problem or
    /// invalid entry fails the whole load; no partial catalog is produced.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let document: Value = serde_json::from_str(text)?;

        let root = document
            .as_object()
            .ok_or_else(|| LoadError::Structure("top level is not an object".to_string()))?;

        let entries = root
            .get("quotes")
            .ok_or_else(|| LoadError::Structure("missing `quotes` array".to_string()))?
            .as_array()
            .ok_or_else(|| LoadError::Structure("`quotes` is not an array".to_string()))?;

        let mut quotes = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            quotes.push(record_from_value(index, entry)?);
        }

        Self::from_records(quotes)
    }

    /// Build a catalog from already-constructed records, applying the same
    /// non-empty field validation as a file load.
    pub fn from_records(quotes: Vec<Quote>) -> Result<Self, LoadError> {
        for (index, quote) in quotes.iter().enumerate() {
            for (field, value) in [
                ("text", &quote.text),
                ("author", &quote.author),
                ("category", &quote.category),
            ] {
                if value.trim().is_empty() {
                    return Err(LoadError::Record {
                        index,
                        field,
                        fault: FieldFault::Empty,
                    });
                }
            }
        }

        let mut categories: Vec<CategoryEntry> = Vec::new();
        let mut lookup = HashMap::new();

        for (position, quote) in quotes.iter().enumerate() {
            let slot = *lookup.entry(normalize(&quote.category)).or_insert_with(|| {
                categories.push(CategoryEntry {
                    label: quote.category.clone(),
                    members: Vec::new(),
                });
                categories.len() - 1
            });
            categories[slot].members.push(position);
        }

        Ok(Catalog {
            quotes,
            categories,
            lookup,
        })
    }

    /// Number of loaded quotes
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// All quotes in source order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// One quote drawn uniformly at random from the full sequence.
    ///
    /// Draws are independent (with replacement). Randomness is injected so
    /// callers can pass `rand::thread_rng()` for normal operation and a
    /// seeded generator in tests.
    pub fn random_quote<R: Rng>(&self, rng: &mut R) -> Result<&Quote, EmptyCatalogError> {
        if self.quotes.is_empty() {
            return Err(EmptyCatalogError);
        }

        Ok(&self.quotes[rng.gen_range(0..self.quotes.len())])
    }

    /// Each distinct category label exactly once, paired with its quote
    /// count, in first-appearance order of the loaded sequence.
    ///
    /// This listing is the authority for ordinal selectors:
    /// [`Catalog::quotes_by_category`] resolves ordinals against the same
    /// underlying order, so the two cannot disagree.
    pub fn list_categories(&self) -> Vec<(&str, usize)> {
        self.categories
            .iter()
            .map(|entry| (entry.label.as_str(), entry.members.len()))
            .collect()
    }

    /// All quotes of the selected category, in original sequence order.
    pub fn quotes_by_category(
        &self,
        selector: &CategorySelector,
    ) -> Result<Vec<&Quote>, CategoryNotFoundError> {
        let entry = self
            .resolve(selector)
            .ok_or_else(|| CategoryNotFoundError {
                selector: selector.to_string(),
            })?;

        Ok(entry
            .members
            .iter()
            .map(|&position| &self.quotes[position])
            .collect())
    }

    fn resolve(&self, selector: &CategorySelector) -> Option<&CategoryEntry> {
        match selector {
            // ordinals are 1-based; 0 never resolves
            CategorySelector::Ordinal(n) => {
                n.checked_sub(1).and_then(|slot| self.categories.get(slot))
            }
            CategorySelector::Name(name) => self
                .lookup
                .get(&normalize(name))
                .map(|&slot| &self.categories[slot]),
        }
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

fn record_from_value(index: usize, value: &Value) -> Result<Quote, LoadError> {
    let entry = value
        .as_object()
        .ok_or_else(|| LoadError::Structure(format!("entry {} is not an object", index)))?;

    Ok(Quote {
        text: required_field(entry, "text", index)?,
        author: required_field(entry, "author", index)?,
        category: required_field(entry, "category", index)?,
    })
}

fn required_field(
    entry: &Map<String, Value>,
    field: &'static str,
    index: usize,
) -> Result<String, LoadError> {
    let value = entry.get(field).ok_or(LoadError::Record {
        index,
        field,
        fault: FieldFault::Missing,
    })?;

    match value.as_str() {
        Some(s) => Ok(s.to_string()),
        None => Err(LoadError::Record {
            index,
            field,
            fault: FieldFault::NotAString,
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
