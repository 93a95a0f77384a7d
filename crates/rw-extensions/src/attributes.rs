//! Attribute list parsing.
//!
//! Parses the body of an attribute list: the `bar,500,700` in `chart::sales.csv[bar,500,700]`
//! or the `chart,width=500` in `[chart,width=500]`.

use std::collections::HashMap;

/// Parsed attribute list with positional and named entries.
///
/// Entries are separated by commas. An entry of the form `key=value` is named,
/// anything else is positional. Values may be wrapped in single or double quotes,
/// in which case they may contain commas.
///
/// # Example
///
/// ```
/// use rw_extensions::AttributeList;
///
/// let mut attrs = AttributeList::parse(r#"bar,500,title="Sales, 2024""#);
/// assert_eq!(attrs.positional(0), Some("bar"));
/// assert_eq!(attrs.get("title"), Some("Sales, 2024"));
///
/// attrs.apply_positional(&["type", "width", "height"]);
/// assert_eq!(attrs.get("type"), Some("bar"));
/// assert_eq!(attrs.get("width"), Some("500"));
/// assert_eq!(attrs.get("height"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeList {
    /// Positional entries in order. Empty entries (`[,500]`) keep their slot as `None`.
    positional: Vec<Option<String>>,
    /// Named entries: `key=value`.
    named: HashMap<String, String>,
}

impl AttributeList {
    /// Create an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an attribute list body (without the surrounding brackets).
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut list = Self::default();

        if input.trim().is_empty() {
            return list;
        }

        for entry in split_entries(input) {
            let entry = entry.trim();
            if let Some((key, value)) = parse_named(entry) {
                list.named.insert(key.to_owned(), value.to_owned());
            } else if entry.is_empty() {
                list.positional.push(None);
            } else {
                list.positional.push(Some(unquote(entry).to_owned()));
            }
        }

        list
    }

    /// Get a positional entry by zero-based index.
    #[must_use]
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index)?.as_deref()
    }

    /// Get a named entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.named.get(key).map(String::as_str)
    }

    /// Set a named entry, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.named.insert(key.into(), value.into());
    }

    /// Whether the list has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Remove and return the first positional entry.
    ///
    /// Delimited blocks carry their own name as the first positional entry
    /// (`[chart,bar]`); it is shifted off before positional names are applied.
    pub fn shift_positional(&mut self) -> Option<String> {
        if self.positional.is_empty() {
            return None;
        }
        self.positional.remove(0)
    }

    /// Map positional entries onto names, in order.
    ///
    /// An entry that was also given by name keeps its named value.
    pub fn apply_positional(&mut self, names: &[&str]) {
        for (name, value) in names.iter().zip(&self.positional) {
            let Some(value) = value else { continue };
            if !self.named.contains_key(*name) {
                self.named.insert((*name).to_owned(), value.clone());
            }
        }
    }
}

/// Split on commas that are not inside a quoted value.
///
/// A quote only opens a value when it is the first non-blank character of an
/// entry or follows `=`, so apostrophes inside bare words stay literal.
fn split_entries(input: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut quote: Option<char> = None;
    let mut value_start = true;
    let mut start = 0;

    for (idx, c) in input.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            ',' => {
                entries.push(&input[start..idx]);
                start = idx + 1;
                value_start = true;
            }
            '=' => value_start = true,
            '"' | '\'' if value_start => quote = Some(c),
            c if c.is_whitespace() => {}
            _ => value_start = false,
        }
    }

    entries.push(&input[start..]);
    entries
}

/// Parse a `key=value` entry. Returns `None` for positional entries.
fn parse_named(entry: &str) -> Option<(&str, &str)> {
    let (key, value) = entry.split_once('=')?;
    let key = key.trim();

    let valid = key
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    if key.is_empty() || !valid {
        return None;
    }

    Some((key, unquote(value.trim())))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
