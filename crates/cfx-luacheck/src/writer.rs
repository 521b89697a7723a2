//! Lua document builder: an ordered list of top-level assignments.

use crate::encoder::format_assignment;
use crate::error::{LintError, Result};
use crate::types::LuaValue;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Accumulates `name = value` assignments and writes them to a Lua file.
///
/// Names are emitted verbatim and are not de-duplicated: adding the same name
/// twice writes two assignments, and Lua keeps the last one.
#[derive(Debug, Clone)]
pub struct LuaWriter {
    path: PathBuf,
    variables: Vec<(String, LuaValue)>,
}

impl LuaWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            variables: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add_variable(&mut self, name: impl Into<String>, value: impl Into<LuaValue>) -> &mut Self {
        self.variables.push((name.into(), value.into()));
        self
    }

    pub fn add_variables<I, N, V>(&mut self, variables: I) -> &mut Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<LuaValue>,
    {
        self.variables
            .extend(variables.into_iter().map(|(n, v)| (n.into(), v.into())));
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.variables.clear();
        self
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Assignments separated by a blank line, no trailing newline.
    pub fn serialize(&self) -> String {
        self.variables
            .iter()
            .map(|(name, value)| format_assignment(name, value))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Write [`serialize`](Self::serialize) to the writer's path.
    ///
    /// # Errors
    ///
    /// [`LintError::Io`] if the file cannot be written (missing parent
    /// directory, permissions, full disk).
    pub fn write_to_file(&self) -> Result<()> {
        let content = self.serialize();
        std::fs::write(&self.path, &content).map_err(|e| LintError::io(&self.path, e))?;
        debug!(
            path = %self.path.display(),
            bytes = content.len(),
            assignments = self.variables.len(),
            "wrote Lua file"
        );
        Ok(())
    }
}
