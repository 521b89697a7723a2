//! Value types that can be written into a Lua configuration file.

/// A Lua value as it appears on the right-hand side of an assignment.
///
/// Mirrors the shapes a `.luacheckrc` needs: scalars, array-style tables
/// (`Sequence`) and keyed tables (`Table`). Integers and floats are kept apart so
/// that whole numbers never pick up a fractional part.
#[derive(Debug, Clone, PartialEq)]
pub enum LuaValue {
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<LuaValue>),
    Table(LuaTable),
}

/// An insertion-ordered table with unique string keys.
///
/// Stored as `Vec<(String, LuaValue)>` to keep insertion order without pulling in
/// `IndexMap`. Tables in a luacheck config hold a handful of keys, so the linear
/// key lookup on insert never shows up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LuaTable {
    entries: Vec<(String, LuaValue)>,
}

impl LuaTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<LuaValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<LuaValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&LuaValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LuaValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<LuaValue>> FromIterator<(K, V)> for LuaTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = LuaTable::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

impl From<bool> for LuaValue {
    fn from(b: bool) -> Self {
        LuaValue::Bool(b)
    }
}

impl From<i64> for LuaValue {
    fn from(n: i64) -> Self {
        LuaValue::Integer(n)
    }
}

impl From<i32> for LuaValue {
    fn from(n: i32) -> Self {
        LuaValue::Integer(n.into())
    }
}

impl From<f64> for LuaValue {
    fn from(f: f64) -> Self {
        LuaValue::Float(f)
    }
}

impl From<&str> for LuaValue {
    fn from(s: &str) -> Self {
        LuaValue::String(s.to_string())
    }
}

impl From<String> for LuaValue {
    fn from(s: String) -> Self {
        LuaValue::String(s)
    }
}

impl From<LuaTable> for LuaValue {
    fn from(t: LuaTable) -> Self {
        LuaValue::Table(t)
    }
}

impl<T: Into<LuaValue>> From<Vec<T>> for LuaValue {
    fn from(items: Vec<T>) -> Self {
        LuaValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<LuaValue>> From<Option<T>> for LuaValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(LuaValue::Nil, Into::into)
    }
}
