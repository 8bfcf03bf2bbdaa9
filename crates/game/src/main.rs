use std::path::{Path, PathBuf};

use sim::{AssetManifest, Tunables};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod scenario;

const CONFIG_PATH_ENV_VAR: &str = "ARENA_CONFIG";
const ASSET_DIR_ENV_VAR: &str = "ARENA_ASSETS";

fn main() {
    init_tracing();
    info!("=== Arena Demo Startup ===");

    if let Err(err) = run() {
        error!(error = %err, "startup_failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let tunables = load_tunables()?;

    match std::env::var(ASSET_DIR_ENV_VAR) {
        Ok(dir) => {
            AssetManifest::standard()
                .validate(Path::new(&dir))
                .map_err(|error| format!("asset validation: {error}"))?;
            info!(asset_dir = %dir, "assets_validated");
        }
        Err(_) => warn!("no asset directory configured, running headless"),
    }

    let summary = scenario::run_demo(tunables);
    info!(
        ticks = summary.ticks,
        player_health = summary.player_health,
        player_hits_taken = summary.player_hits_taken,
        enemies_defeated = summary.enemies_defeated,
        combat_events = summary.total_combat_events,
        "demo_complete"
    );
    Ok(())
}

fn load_tunables() -> Result<Tunables, String> {
    let Some(path) = std::env::var_os(CONFIG_PATH_ENV_VAR) else {
        warn!("no config path set, using built-in tunables");
        return Ok(Tunables::default());
    };
    let path = PathBuf::from(path);
    let raw = std::fs::read_to_string(&path)
        .map_err(|error| format!("read config '{}': {error}", path.display()))?;
    let tunables = parse_tunables_json(&raw)?;
    info!(path = %path.display(), "config_loaded");
    Ok(tunables)
}

fn parse_tunables_json(raw: &str) -> Result<Tunables, String> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    match serde_path_to_error::deserialize::<_, Tunables>(&mut deserializer) {
        Ok(tunables) => Ok(tunables),
        Err(error) => {
            let path = error.path().to_string();
            let source = error.into_inner();
            if path.is_empty() || path == "." {
                Err(format!("parse config json: {source}"))
            } else {
                Err(format!("parse config json at {path}: {source}"))
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
