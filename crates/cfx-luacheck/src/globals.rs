//! Globals the runtime provides that are not in the natives catalog.
//!
//! Extend these lists when a resource framework adds globals of its own.

pub const ESX_SERVER_FUNCTIONS: &[&str] = &["ESX.GetPlayers"];

pub const CFX_SERVER_FUNCTIONS: &[&str] = &[
    "source",
    "TriggerClientEvent",
    "TriggerLatentClientEvent",
    "RegisterServerEvent",
    "GetPlayerIdentifiers",
    "GetPlayers",
    "PerformHttpRequest",
];

pub const CFX_CLIENT_FUNCTIONS: &[&str] = &[
    "TriggerServerEvent",
    "RegisterNUICallback",
    "SendNUIMessage",
    "GlobalState",
];

/// Scheduler, event and math helpers available on both sides.
pub const SHARED_FUNCTIONS: &[&str] = &[
    "CreateThread",
    "Citizen",
    "SetTimeout",
    "Await",
    "Wait",
    "Trace",
    "AddEventHandler",
    "RegisterNetEvent",
    "TriggerEvent",
    "RemoveEventHandler",
    "exports",
    "json",
    "quat",
    "vec",
    "vector2",
    "vec2",
    "vector3",
    "vec3",
    "vector4",
    "vec4",
];

/// Directives valid in `fxmanifest.lua` / `__resource.lua`.
pub const MANIFEST_VARIABLES: &[&str] = &[
    "fx_version",
    "games",
    "game",
    "author",
    "description",
    "version",
    "client_scripts",
    "client_script",
    "server_scripts",
    "server_script",
    "shared_scripts",
    "shared_script",
    "export",
    "exports",
    "replace_level_meta",
    "data_file",
    "this_is_a_map",
    "server_only",
    "loadscreen",
    "ui_page",
    "file",
    "files",
    "my_data",
    "dependency",
    "dependencies",
    "provide",
    "lua54",
    "disable_lazy_natives",
    "clr_disable_task_scheduler",
];

/// Server-side globals on top of the catalog natives.
pub fn additional_server_functions() -> impl Iterator<Item = &'static str> {
    ESX_SERVER_FUNCTIONS
        .iter()
        .chain(CFX_SERVER_FUNCTIONS)
        .chain(SHARED_FUNCTIONS)
        .copied()
}

/// Client-side globals on top of the catalog natives.
pub fn additional_client_functions() -> impl Iterator<Item = &'static str> {
    CFX_CLIENT_FUNCTIONS.iter().chain(SHARED_FUNCTIONS).copied()
}
