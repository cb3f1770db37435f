use crate::config::DioriteConfig;
use anyhow::Context;
use bevy_app::{App, AppExit, Startup};
use bevy_ecs::prelude::*;
use bevy_log::LogPlugin;
use diorite_material::{Block, MaterialPlugin, catalog};
use diorite_registry::Registry;
use std::path::PathBuf;
use tracing::{error, info, warn};

mod config;

fn main() -> anyhow::Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DioriteConfig::load(path.as_deref())?;

    let exit = App::new()
        .add_plugins(LogPlugin::default())
        .add_plugins(MaterialPlugin)
        .insert_resource(config)
        .add_systems(Startup, (resolve_lookups, write_dump.pipe(report_failure)).chain())
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("diorite exited with code {code}"),
    }
}

fn resolve_lookups(config: Res<DioriteConfig>, registry: Res<Registry<&'static Block>>) {
    info!(
        blocks = registry.len(),
        lookups = config.lookups.len(),
        "resolving material lookups"
    );
    for query in &config.lookups {
        match catalog::parse(query) {
            Ok(material) => info!(
                query = query.as_str(),
                material = %material,
                id = %material.id(),
                data = material.data(),
                legacy_state = material.legacy_state().0,
                "resolved"
            ),
            Err(err) => warn!(query = query.as_str(), %err, "lookup failed"),
        }
    }
}

fn write_dump(config: Res<DioriteConfig>) -> anyhow::Result<()> {
    let Some(path) = &config.dump else {
        return Ok(());
    };
    let records = catalog::dump();
    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), blocks = records.len(), "wrote block dump");
    Ok(())
}

fn report_failure(In(result): In<anyhow::Result<()>>, mut exit: MessageWriter<AppExit>) {
    if let Err(err) = result {
        error!("{err:#}");
        exit.write(AppExit::from_code(1));
    }
}
