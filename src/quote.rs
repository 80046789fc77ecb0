// Quote Record - one quote's text, author and category

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single quote.
///
/// Records are immutable after load. `category` is an open set of
/// labels, not a fixed enum; new categories may appear in data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub category: String,
}

impl Quote {
    pub fn new(text: &str, author: &str, category: &str) -> Self {
        Quote {
            text: text.to_string(),
            author: author.to_string(),
            category: category.to_string(),
        }
    }

    /// Category label with the first character uppercased, for display.
    /// Stored labels keep their source casing.
    pub fn display_category(&self) -> String {
        capitalize(&self.category)
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\"\n\n— {}\n[{}]",
            self.text,
            self.author,
            self.display_category()
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
