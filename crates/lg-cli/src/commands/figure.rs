use colored::Colorize;
use lg_core::{EntityId, Figure, FigureId, World};

use crate::Source;

pub fn run(source: &Source, id: i32) -> Result<(), String> {
    let world = super::load_world(source)?;

    let figure = world
        .figure(FigureId(id))
        .ok_or_else(|| format!("not found: figure {id}"))?;

    print_header(&world, figure);

    println!();
    println!("  {}", "Events:".dimmed());
    let mut count = 0usize;
    for event in world.events_of(figure.id) {
        println!("  {:>6}  {}", event.year, world.narrate(event));
        count += 1;
    }
    if count == 0 {
        println!("    (none)");
    }

    Ok(())
}

fn print_header(world: &World, figure: &Figure) {
    let kind = [figure.race.as_str(), figure.caste.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join(", ");
    println!("  {} [{}]", figure.name.bold(), kind.dimmed());
    println!();

    println!("  id:         {}", figure.id);
    println!("  appeared:   {}", figure.appeared);
    println!("  born:       {}", figure.birth_year);
    if figure.is_alive() {
        println!("  died:       (alive)");
    } else {
        println!("  died:       {}", figure.death_year);
    }
    if !figure.associated_types.is_empty() {
        println!("  types:      {}", figure.associated_types);
    }
    if !figure.spheres.is_empty() {
        println!("  spheres:    {}", figure.spheres.join(", "));
    }

    if !figure.entity_links.is_empty() {
        println!();
        println!("  {}", "Entities:".dimmed());
        for link in &figure.entity_links {
            println!("    {} {}", link.link_type, entity_name(world, link.entity_id));
        }
    }

    if !figure.site_links.is_empty() {
        println!();
        println!("  {}", "Sites:".dimmed());
        for link in &figure.site_links {
            let name = world
                .site(link.site_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| format!("site {}", link.site_id));
            println!("    {} {}", link.link_type, name);
        }
    }
}

// Entities are not indexed; a figure has few links.
fn entity_name(world: &World, id: EntityId) -> String {
    world
        .entities()
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.name.clone())
        .unwrap_or_else(|| format!("entity {id}"))
}
