//! # cfx-luacheck
//!
//! Generates a [luacheck](https://github.com/lunarmodules/luacheck) configuration
//! for CitizenFX (FiveM) resources from the public natives catalog.
//!
//! The pipeline is fetch → normalize → serialize → lint: both catalogs are
//! downloaded, merged and split by apiset; native names are converted to the Lua
//! globals the runtime exposes (`GET_PLAYER_PED` → `GetPlayerPed`); the result is
//! written as Lua table constructors into `.luacheckrc`.
//!
//! ## Quick start
//!
//! ```rust
//! use cfx_luacheck::{to_pascal_case, LuaTable, LuaWriter};
//!
//! let globals = vec![to_pascal_case("PLAYER_PED_ID").unwrap()];
//! let mut writer = LuaWriter::new(".luacheckrc");
//! writer.add_variable("stds.cfx", LuaTable::new().with("read_globals", globals));
//! assert_eq!(
//!     writer.serialize(),
//!     "stds.cfx = {\n  read_globals = {\n    \"PlayerPedId\"\n  }\n}"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`identifier`]: catalog name → Lua identifier (PascalCase and macro-case modes)
//! - [`encoder`]: [`LuaValue`] → Lua source text
//! - [`writer`]: ordered top-level assignments, written to a file
//! - [`catalog`]: catalog parsing, merging and apiset partitioning
//! - [`client`]: catalog retrieval over HTTP or from files
//! - [`exclude`]: resources folder scan for ignored scripts
//! - [`globals`]: runtime globals that are not in the catalog
//! - [`rc`]: the `.luacheckrc` document layout
//! - [`config`]: environment configuration
//! - [`runner`]: external linter invocation
//! - [`error`]: error types

pub mod catalog;
pub mod client;
pub mod config;
pub mod encoder;
pub mod error;
pub mod exclude;
pub mod globals;
pub mod identifier;
pub mod rc;
pub mod runner;
pub mod types;
pub mod writer;

pub use catalog::{global_names, ApiSet, ApiSets, Catalog, Native, NamingMode};
pub use client::{CatalogSource, NativesClient, DEFAULT_BASE_URL};
pub use config::Config;
pub use encoder::{format_assignment, render};
pub use error::{LintError, Result};
pub use exclude::excluded_files;
pub use identifier::{macro_case, normalize_unique, to_pascal_case, unique, NameOverrides};
pub use rc::{LuacheckRc, DEFAULT_OUTPUT};
pub use runner::run_command;
pub use types::{LuaTable, LuaValue};
pub use writer::LuaWriter;
