//! Resource folder scan for scripts that luacheck should skip.
//!
//! A FiveM resources folder holds one directory per script, optionally grouped
//! into category folders named in brackets:
//!
//! ```text
//! resources/
//!   chat/
//!   [esx]/
//!     es_extended/
//!     esx_menu_default/
//! ```
//!
//! Script folders are found at the top level or directly inside a category
//! (categories may nest). Script folders themselves are never descended into.

use crate::error::{LintError, Result};
use std::path::{Component, Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// `[name]` folders group scripts and are scanned recursively.
pub fn is_category_folder(name: &str) -> bool {
    name.starts_with('[') && name.ends_with(']')
}

/// Find the ignored script folders under `resources` and map each folder name to a
/// `<relative path>/**/*.lua` glob, relative to `cwd`.
///
/// Matching against `ignored` is exact. Results follow directory order sorted by
/// file name; a folder name found twice keeps its first position and the later path.
///
/// # Errors
///
/// [`LintError::InvalidPath`] if `resources` is missing or not a directory,
/// [`LintError::Io`] if a directory cannot be read.
pub fn excluded_files(
    resources: &Path,
    ignored: &[String],
    cwd: &Path,
) -> Result<Vec<(String, String)>> {
    let root = std::path::absolute(resources).map_err(|e| LintError::io(resources, e))?;
    let root = normalize(&root);
    ensure_directory(&root)?;
    let cwd = normalize(cwd);

    let mut excluded: Vec<(String, String)> = Vec::new();
    let mut walker = WalkDir::new(&root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
            LintError::io(path, e.into())
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if is_category_folder(&name) {
            continue;
        }
        walker.skip_current_dir();

        if !ignored.iter().any(|script| *script == name) {
            continue;
        }

        let glob = lua_glob(entry.path(), &cwd);
        info!("Ignore '{}' script: {}", name, glob);
        match excluded.iter_mut().find(|(folder, _)| *folder == name) {
            Some((_, slot)) => *slot = glob,
            None => excluded.push((name, glob)),
        }
    }

    Ok(excluded)
}

fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LintError::InvalidPath {
            path: path.to_path_buf(),
            reason: "path does not exist".to_string(),
        });
    }
    if !path.is_dir() {
        return Err(LintError::InvalidPath {
            path: path.to_path_buf(),
            reason: "path is not a directory".to_string(),
        });
    }
    Ok(())
}

/// `<script path relative to cwd, '/'-separated>/**/*.lua`
fn lua_glob(script: &Path, cwd: &Path) -> String {
    let relative = relative_path(script, cwd);
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("{}/**/*.lua", parts.join("/"))
}

/// Resolve `.` and `..` components lexically. A `..` above the root is dropped.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                let at_name = matches!(last, Some(Component::Normal(_)));
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                if at_name {
                    out.pop();
                } else if !at_root {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Lexical relative path from `base` to `target`; both must be absolute.
pub(crate) fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component<'_>> = target.components().collect();
    let base: Vec<Component<'_>> = base.components().collect();
    let common = target
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base.len() {
        out.push("..");
    }
    for component in &target[common..] {
        out.push(component.as_os_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_inside_base() {
        let rel = relative_path(Path::new("/srv/fx/resources/chat"), Path::new("/srv/fx"));
        assert_eq!(rel, PathBuf::from("resources/chat"));
    }

    #[test]
    fn relative_path_outside_base() {
        let rel = relative_path(Path::new("/srv/resources/chat"), Path::new("/home/dev"));
        assert_eq!(rel, PathBuf::from("../../srv/resources/chat"));
    }

    #[test]
    fn normalize_resolves_dot_segments() {
        assert_eq!(
            normalize(Path::new("/srv/fx/../fx/./resources")),
            PathBuf::from("/srv/fx/resources")
        );
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("../../a")), PathBuf::from("../../a"));
    }

    #[test]
    fn category_folder_detection() {
        assert!(is_category_folder("[esx]"));
        assert!(!is_category_folder("esx"));
        assert!(!is_category_folder("[esx"));
    }
}
