//! `cfx-luacheck` CLI: generate `.luacheckrc` from the natives catalog and lint.
//!
//! ## Usage
//!
//! ```sh
//! # Configuration comes from the environment (or a .env file)
//! export RESOURCES_FOLDER_PATH=./resources
//! export IGNORED_SCRIPT_LIST=es_extended,oxmysql
//!
//! # Fetch the catalogs, write .luacheckrc, run luacheck on the resources
//! cfx-luacheck
//!
//! # Only write the config
//! cfx-luacheck --skip-lint
//!
//! # Offline, from downloaded catalogs, with the legacy naming
//! cfx-luacheck --natives natives.json --natives-cfx natives_cfx.json --naming macro
//!
//! # Add an extra std to client and server files
//! cfx-luacheck --extra-std love
//! ```

use anyhow::{Context, Result};
use cfx_luacheck::{
    excluded_files, global_names, run_command, CatalogSource, Config, LuacheckRc, NamingMode,
    NativesClient, DEFAULT_BASE_URL, DEFAULT_OUTPUT,
};
use clap::Parser;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "cfx-luacheck",
    version,
    about = "Generate a luacheck config for CitizenFX resources and run luacheck"
)]
struct Cli {
    /// Path of the generated config
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Base URL of the natives documentation
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Read the natives catalog from a file instead of fetching it
    #[arg(long)]
    natives: Option<PathBuf>,

    /// Read the CFX natives catalog from a file instead of fetching it
    #[arg(long)]
    natives_cfx: Option<PathBuf>,

    /// How catalog names become Lua globals: pascal or macro
    #[arg(long, default_value_t = NamingMode::Pascal)]
    naming: NamingMode,

    /// Extra luacheck std to add to client and server files (repeatable)
    #[arg(long = "extra-std")]
    extra_std: Vec<String>,

    /// Write the config without running the linter
    #[arg(long)]
    skip_lint: bool,

    /// Linter executable
    #[arg(long, default_value = "luacheck")]
    linter: String,

    /// Do not load a .env file from the working directory
    #[arg(long)]
    no_dotenv: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Generate the config, then lint. Returns the process exit code.
fn run(cli: Cli) -> Result<i32> {
    if !cli.no_dotenv {
        // A missing .env is fine; variables may come from the environment.
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err).context("Failed to load .env"),
        }
    }
    let config = Config::from_env().context("Invalid configuration")?;

    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    let excluded = excluded_files(&config.resources_path, &config.ignored_scripts, &cwd)
        .context("Failed to scan the resources folder")?;

    let natives_source = cli
        .natives
        .clone()
        .map(CatalogSource::File)
        .unwrap_or_else(|| CatalogSource::natives(&cli.base_url));
    let cfx_source = cli
        .natives_cfx
        .clone()
        .map(CatalogSource::File)
        .unwrap_or_else(|| CatalogSource::natives_cfx(&cli.base_url));

    let client = NativesClient::new();
    let (natives, natives_cfx) = client.fetch_both(&natives_source, &cfx_source)?;
    let catalog = natives.merge(natives_cfx);

    let names = global_names(&catalog, cli.naming).context("Failed to normalize native names")?;
    info!("Found {} client natives", names.client.len());
    info!("Found {} server natives", names.server.len());
    info!("Found {} shared natives", names.shared.len());

    let rc = LuacheckRc::new(&cli.output, names)
        .with_excluded(excluded)
        .with_extra_std(cli.extra_std);
    rc.to_writer()
        .write_to_file()
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    info!("Wrote {}", cli.output.display());

    if cli.skip_lint {
        return Ok(0);
    }

    let code = run_command(
        &cli.linter,
        [
            OsStr::new("--config"),
            cli.output.as_os_str(),
            config.resources_path.as_os_str(),
        ],
    )?;
    Ok(code)
}
