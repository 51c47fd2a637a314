use std::path::Path;

use lg_core::World;
use serde::Serialize;

use crate::Source;

pub fn run(source: &Source, collection: &str, output: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(source)?;

    let content = export_json(&world, collection)?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}

fn export_json(world: &World, collection: &str) -> Result<String, String> {
    match collection {
        "world" => to_json(world.document()),
        "regions" => to_json(world.regions()),
        "underground_regions" => to_json(world.underground_regions()),
        "sites" => to_json(world.sites()),
        "artifacts" => to_json(world.artifacts()),
        "figures" | "historical_figures" => to_json(world.figures()),
        "entities" => to_json(world.entities()),
        "entity_populations" => to_json(world.entity_populations()),
        "events" | "historical_events" => to_json(world.events()),
        _ => Err(format!(
            "unsupported collection: \"{collection}\". Use: world, regions, \
             underground_regions, sites, artifacts, figures, entities, \
             entity_populations, events"
        )),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization error: {e}"))
}
