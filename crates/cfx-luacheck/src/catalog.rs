//! Natives catalog model, merging and partitioning by apiset.
//!
//! A catalog document maps namespace → hash → entry:
//!
//! ```json
//! {"PLAYER": {"0xD80958FC74E988A6": {"name": "PLAYER_PED_ID", "apiset": "client"}}}
//! ```
//!
//! Namespace and entry order is kept as it appears in the document (serde_json is
//! built with `preserve_order`), which keeps the generated config stable between
//! runs against the same catalog.

use crate::error::Result;
use crate::identifier::{macro_case, to_pascal_case, unique};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// Where a native can be called from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiSet {
    /// Absent in the catalog means client.
    #[default]
    Client,
    Server,
    Shared,
}

/// One catalog entry. Fields the generator does not use (`params`, `results`,
/// `description`, `examples`, `ns`, `game`) are ignored on parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Native {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub apiset: Option<ApiSet>,
    #[serde(default)]
    pub aliases: Option<Vec<String>>,
    #[serde(default)]
    pub hash: String,
}

impl Native {
    pub fn api_set(&self) -> ApiSet {
        self.apiset.unwrap_or_default()
    }

    /// The catalog name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn aliases(&self) -> &[String] {
        self.aliases.as_deref().unwrap_or_default()
    }
}

/// A parsed catalog: namespaces in document order, each with its entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    namespaces: Vec<(String, Vec<Native>)>,
}

impl Catalog {
    /// Parse a catalog JSON document. `null` entries are skipped.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// Parse a catalog streamed from `reader`, such as an HTTP body.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_document(serde_json::from_reader(reader)?)
    }

    fn from_document(root: Map<String, Value>) -> Result<Self> {
        let mut namespaces = Vec::with_capacity(root.len());
        for (namespace, entries) in root {
            let entries: Map<String, Value> = serde_json::from_value(entries)?;
            let mut natives = Vec::with_capacity(entries.len());
            for (_hash, entry) in entries {
                if entry.is_null() {
                    continue;
                }
                natives.push(serde_json::from_value::<Native>(entry)?);
            }
            namespaces.push((namespace, natives));
        }
        Ok(Self { namespaces })
    }

    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &[Native])> {
        self.namespaces
            .iter()
            .map(|(ns, natives)| (ns.as_str(), natives.as_slice()))
    }

    pub fn natives(&self) -> impl Iterator<Item = &Native> {
        self.namespaces.iter().flat_map(|(_, natives)| natives.iter())
    }

    pub fn len(&self) -> usize {
        self.namespaces.iter().map(|(_, natives)| natives.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overlay `other` onto `self` per namespace.
    ///
    /// A namespace present in both keeps its position in `self` but takes the
    /// entries from `other`; namespaces only in `other` are appended.
    pub fn merge(mut self, other: Catalog) -> Catalog {
        for (namespace, natives) in other.namespaces {
            match self.namespaces.iter_mut().find(|(ns, _)| *ns == namespace) {
                Some((_, slot)) => *slot = natives,
                None => self.namespaces.push((namespace, natives)),
            }
        }
        self
    }

    /// Split the natives by [`ApiSet`], keeping catalog order within each set.
    pub fn partition(&self) -> ApiSets<&Native> {
        let mut sets = ApiSets::default();
        for native in self.natives() {
            sets.get_mut(native.api_set()).push(native);
        }
        sets
    }
}

/// One list per apiset.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSets<T> {
    pub client: Vec<T>,
    pub server: Vec<T>,
    pub shared: Vec<T>,
}

impl<T> Default for ApiSets<T> {
    fn default() -> Self {
        Self {
            client: Vec::new(),
            server: Vec::new(),
            shared: Vec::new(),
        }
    }
}

impl<T> ApiSets<T> {
    pub fn get(&self, set: ApiSet) -> &[T] {
        match set {
            ApiSet::Client => &self.client,
            ApiSet::Server => &self.server,
            ApiSet::Shared => &self.shared,
        }
    }

    pub fn get_mut(&mut self, set: ApiSet) -> &mut Vec<T> {
        match set {
            ApiSet::Client => &mut self.client,
            ApiSet::Server => &mut self.server,
            ApiSet::Shared => &mut self.shared,
        }
    }

    /// Apply a fallible conversion to each list, stopping at the first error.
    pub fn try_map<U, F>(self, mut f: F) -> Result<ApiSets<U>>
    where
        F: FnMut(Vec<T>) -> Result<Vec<U>>,
    {
        Ok(ApiSets {
            client: f(self.client)?,
            server: f(self.server)?,
            shared: f(self.shared)?,
        })
    }
}

/// How catalog names become Lua globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingMode {
    /// Strict PascalCase of the entry name; invalid names abort the run.
    #[default]
    Pascal,
    /// Macro-case conversion of the name (or `N_<hash>`), plus `_`-prefixed aliases.
    Macro,
}

impl FromStr for NamingMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pascal" => Ok(NamingMode::Pascal),
            "macro" => Ok(NamingMode::Macro),
            other => Err(format!(
                "unknown naming mode '{}', expected 'pascal' or 'macro'",
                other
            )),
        }
    }
}

impl fmt::Display for NamingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingMode::Pascal => f.write_str("pascal"),
            NamingMode::Macro => f.write_str("macro"),
        }
    }
}

/// Partition the catalog and turn every entry into de-duplicated Lua global names.
///
/// # Errors
///
/// In [`NamingMode::Pascal`], the first name [`to_pascal_case`] rejects.
pub fn global_names(catalog: &Catalog, mode: NamingMode) -> Result<ApiSets<String>> {
    catalog.partition().try_map(|natives| match mode {
        NamingMode::Pascal => pascal_names(&natives),
        NamingMode::Macro => Ok(macro_names(&natives)),
    })
}

fn pascal_names(natives: &[&Native]) -> Result<Vec<String>> {
    let names = natives
        .iter()
        .filter_map(|native| native.name())
        .map(to_pascal_case)
        .collect::<Result<Vec<_>>>()?;
    Ok(unique(names))
}

fn macro_names(natives: &[&Native]) -> Vec<String> {
    let mut names = Vec::with_capacity(natives.len());
    for native in natives {
        let name = match native.name() {
            Some(name) => macro_case(name),
            None => macro_case(&format!("N_{}", native.hash)),
        };
        names.push(name);
        for alias in native.aliases() {
            if let Some(stripped) = alias.strip_prefix('_') {
                names.push(macro_case(stripped));
            }
        }
    }
    unique(names)
}
