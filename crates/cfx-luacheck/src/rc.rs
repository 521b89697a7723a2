//! Assembly of the `.luacheckrc` document.
//!
//! Three custom stds are declared (`cfx_cl`, `cfx_sv`, `cfx`) plus one for
//! resource manifests, and file globs pick the std by naming convention:
//! `client.lua`, `cl_*.lua` and `client/` get the client std, likewise for server.

use crate::catalog::ApiSets;
use crate::globals::{additional_client_functions, additional_server_functions, MANIFEST_VARIABLES};
use crate::types::{LuaTable, LuaValue};
use crate::writer::LuaWriter;
use std::path::PathBuf;

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = ".luacheckrc";

const CLIENT_FILES: [&str; 3] = ["**/client.lua", "**/cl_*.lua", "**/client/**/*.lua"];
const SERVER_FILES: [&str; 3] = ["**/server.lua", "**/sv_*.lua", "**/server/**/*.lua"];
const MANIFEST_FILES: [&str; 2] = ["**/fxmanifest.lua", "**/__resource.lua"];

/// Everything that goes into one `.luacheckrc`.
#[derive(Debug, Clone)]
pub struct LuacheckRc {
    pub output: PathBuf,
    /// Normalized catalog globals per apiset.
    pub natives: ApiSets<String>,
    /// Ignored script folder → `<path>/**/*.lua`.
    pub excluded: Vec<(String, String)>,
    /// Extra luacheck stds appended to the client and server file stds.
    pub extra_std: Vec<String>,
}

impl LuacheckRc {
    pub fn new(output: impl Into<PathBuf>, natives: ApiSets<String>) -> Self {
        Self {
            output: output.into(),
            natives,
            excluded: Vec::new(),
            extra_std: Vec::new(),
        }
    }

    pub fn with_excluded(mut self, excluded: Vec<(String, String)>) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn with_extra_std(mut self, extra_std: Vec<String>) -> Self {
        self.extra_std = extra_std;
        self
    }

    /// Build the writer holding every assignment, in file order.
    pub fn to_writer(&self) -> LuaWriter {
        let mut writer = LuaWriter::new(&self.output);

        let client_globals: Vec<LuaValue> = self
            .natives
            .client
            .iter()
            .map(|name| LuaValue::from(name.as_str()))
            .chain(additional_client_functions().map(LuaValue::from))
            .collect();
        let server_globals: Vec<LuaValue> = self
            .natives
            .server
            .iter()
            .map(|name| LuaValue::from(name.as_str()))
            .chain(additional_server_functions().map(LuaValue::from))
            .collect();

        writer
            .add_variable(
                "stds.cfx_cl",
                LuaTable::new().with("read_globals", client_globals),
            )
            .add_variable(
                "stds.cfx_sv",
                LuaTable::new()
                    .with("globals", vec!["GlobalState"])
                    .with("read_globals", server_globals),
            )
            .add_variable(
                "stds.cfx",
                LuaTable::new().with("read_globals", self.natives.shared.clone()),
            )
            .add_variable(
                "stds.cfx_manifest",
                LuaTable::new().with("read_globals", MANIFEST_VARIABLES.to_vec()),
            );

        let client_std = self.std_with_extras("max+cfx+cfx_cl");
        let server_std = self.std_with_extras("max+cfx+cfx_sv");
        writer
            .add_variables(CLIENT_FILES.iter().map(|glob| (file_std(glob), client_std.as_str())))
            .add_variables(SERVER_FILES.iter().map(|glob| (file_std(glob), server_std.as_str())))
            .add_variables(MANIFEST_FILES.iter().map(|glob| (file_std(glob), "max+cfx_manifest")));

        let excluded: Vec<&str> = self.excluded.iter().map(|(_, glob)| glob.as_str()).collect();
        writer.add_variable("exclude_files", excluded);

        writer
    }

    fn std_with_extras(&self, base: &str) -> String {
        let mut std = base.to_string();
        for extra in &self.extra_std {
            std.push('+');
            std.push_str(extra);
        }
        std
    }
}

/// `files["<glob>"].std`
fn file_std(glob: &str) -> String {
    format!("files[\"{}\"].std", glob)
}
