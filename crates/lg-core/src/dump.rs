use std::fmt;

use crate::world::World;

impl fmt::Display for World {
    /// Fixed-width listing of every collection, then the event count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Regions")?;
        for r in self.regions() {
            writeln!(f, "{:<3} {:<30} {}", r.id, r.name, r.kind)?;
        }

        writeln!(f, "Underground regions")?;
        for r in self.underground_regions() {
            writeln!(f, "{:<3} {:<10} {}", r.id, r.kind, r.depth)?;
        }

        writeln!(f, "Sites")?;
        for s in self.sites() {
            writeln!(f, "{:<5} {:<14} {:<40} {}", s.id, s.kind, s.name, s.coords)?;
        }

        writeln!(f, "Artifacts")?;
        for a in self.artifacts() {
            writeln!(f, "{:<5} {:<40} {}", a.id, a.name, a.item)?;
        }

        writeln!(f, "Figures")?;
        for h in self.figures() {
            writeln!(
                f,
                "{:<5} {:<40} entities:{} sites:{} spheres:{}",
                h.id,
                h.name,
                h.entity_links.len(),
                h.site_links.len(),
                h.spheres.join(",")
            )?;
        }

        writeln!(f, "Events: {}", self.events().len())
    }
}
