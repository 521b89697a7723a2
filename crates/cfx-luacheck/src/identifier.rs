//! Catalog name normalization.
//!
//! Native names in the catalog are `SCREAMING_SNAKE_CASE` (`GET_PLAYER_PED`),
//! while the Lua runtime exposes them in PascalCase (`GetPlayerPed`). Two
//! conversions are provided:
//!
//! - [`to_pascal_case`]: strict. Rejects anything that would not produce a valid,
//!   non-reserved Lua identifier.
//! - [`macro_case`]: lenient. Keeps digit-led segments apart with an underscore
//!   (`FOR_3D` → `For_3d`) and applies a table of [`NameOverrides`].

use crate::error::{LintError, Result};
use std::collections::HashSet;
use std::hash::Hash;

/// Lua 5.x reserved words. Compared against the lower-cased raw name.
pub const RESERVED_WORDS: [&str; 21] = [
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Convert a `SNAKE_CASE` catalog name into a PascalCase Lua identifier.
///
/// ```
/// use cfx_luacheck::to_pascal_case;
/// assert_eq!(to_pascal_case("GET_PLAYER_PED").unwrap(), "GetPlayerPed");
/// assert!(to_pascal_case("end").is_err());
/// ```
///
/// # Errors
///
/// [`LintError::InvalidIdentifier`] when the name is empty, contains anything
/// outside `[A-Za-z0-9_]`, is a reserved word, has no non-empty segment, or
/// converts to something that does not start with a letter.
pub fn to_pascal_case(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(LintError::invalid_identifier(raw, "name must be a non-empty string"));
    }

    if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(LintError::invalid_identifier(
            raw,
            "only alphanumeric characters and underscores are allowed",
        ));
    }

    if is_reserved(raw) {
        return Err(LintError::invalid_identifier(raw, "name is a reserved Lua keyword"));
    }

    let mut segments = raw.split('_').filter(|s| !s.is_empty()).peekable();
    if segments.peek().is_none() {
        return Err(LintError::invalid_identifier(
            raw,
            "no valid words found after splitting",
        ));
    }

    let mut pascal = String::with_capacity(raw.len());
    for segment in segments {
        push_capitalized(segment, &mut pascal);
    }

    if !is_alnum_identifier(&pascal) {
        return Err(LintError::invalid_identifier(
            raw,
            format!("generated name '{}' is not a valid Lua identifier", pascal),
        ));
    }

    Ok(pascal)
}

/// Whether `raw` is a Lua reserved word, ignoring case.
pub fn is_reserved(raw: &str) -> bool {
    let lower = raw.to_ascii_lowercase();
    RESERVED_WORDS.contains(&lower.as_str())
}

/// Convert a `MACRO_CASE` name, separating digit-led segments with `_`, then
/// apply the built-in [`NameOverrides`].
///
/// ```
/// use cfx_luacheck::macro_case;
/// assert_eq!(macro_case("DRAW_3D_TEXT"), "Draw_3dText");
/// ```
pub fn macro_case(raw: &str) -> String {
    NameOverrides::builtin().apply(macro_case_raw(raw))
}

/// [`macro_case`] without any override applied.
pub fn macro_case_raw(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    for segment in raw.split('_').filter(|s| !s.is_empty()) {
        if segment.starts_with(|c: char| c.is_ascii_digit()) {
            out.push('_');
            out.push_str(&segment.to_ascii_lowercase());
        } else {
            push_capitalized(segment, &mut out);
        }
    }
    out
}

/// Exact-match corrections for names the mechanical conversion gets wrong.
///
/// Lookups compare the whole converted name; the first matching entry wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameOverrides {
    entries: Vec<(String, String)>,
}

impl NameOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// The corrections shipped with the tool.
    pub fn builtin() -> Self {
        let mut overrides = Self::new();
        // Alias spelled FOR3D in the catalog, exported as For_3d by the runtime.
        overrides.insert("GetGroundZFor3dCoord", "GetGroundZFor_3dCoord");
        overrides
    }

    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.entries.push((from.into(), to.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(from, _)| from == name)
            .map(|(_, to)| to.as_str())
    }

    /// Return the replacement for `name`, or `name` itself when none is listed.
    pub fn apply(&self, name: String) -> String {
        match self.get(&name) {
            Some(replacement) => replacement.to_string(),
            None => name,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stable de-duplication: keeps the first occurrence of each item, in order.
pub fn unique<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Normalize every name with [`to_pascal_case`] and drop repeated results.
///
/// Fails on the first invalid name; nothing is returned partially.
pub fn normalize_unique<I, S>(raw_names: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names = raw_names
        .into_iter()
        .map(|raw| to_pascal_case(raw.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(unique(names))
}

fn push_capitalized(segment: &str, out: &mut String) {
    let mut chars = segment.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        for c in chars {
            out.push(c.to_ascii_lowercase());
        }
    }
}

/// `^[A-Za-z][A-Za-z0-9]*$`
fn is_alnum_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}
