use comfy_table::{ContentArrangement, Table};

use crate::Source;

pub fn run(source: &Source) -> Result<(), String> {
    let world = super::load_world(source)?;
    let stats = world.stats();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Collection", "Records"]);

    let rows = [
        ("regions", stats.regions),
        ("underground regions", stats.underground_regions),
        ("sites", stats.sites),
        ("artifacts", stats.artifacts),
        ("historical figures", stats.figures),
        ("entities", stats.entities),
        ("entity populations", stats.entity_populations),
        ("historical events", stats.events),
    ];
    for (name, count) in rows {
        table.add_row(vec![name.to_string(), count.to_string()]);
    }

    println!("{table}");
    Ok(())
}
