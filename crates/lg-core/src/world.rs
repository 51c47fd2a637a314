use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::decode::{JsonDecoder, Syntax, WorldDecoder, XmlDecoder};
use crate::entity::{
    Artifact, Entity, EntityPopulation, Figure, FigureId, Region, Site, SiteId, UndergroundRegion,
};
use crate::error::DecodeResult;
use crate::event::Event;
use crate::index::WorldIndex;
use crate::narrative::Narrative;
use crate::timeline::FigureEvents;

/// Every collection of a legends document, in document order.
///
/// This is what a [`WorldDecoder`] produces. Field names double as the
/// key names of the JSON syntax.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldDocument {
    /// Surface regions.
    pub regions: Vec<Region>,
    /// Cavern and magma layers.
    pub underground_regions: Vec<UndergroundRegion>,
    /// Sites, looked up by id through the index.
    pub sites: Vec<Site>,
    /// Named artifacts.
    pub artifacts: Vec<Artifact>,
    /// Figures, looked up by id through the index.
    pub historical_figures: Vec<Figure>,
    /// Entity population records.
    pub entity_populations: Vec<EntityPopulation>,
    /// Civilizations, guilds and other organizations.
    pub entities: Vec<Entity>,
    /// Every event, in the order the document lists them.
    pub historical_events: Vec<Event>,
}

/// Collection sizes of a loaded world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorldStats {
    /// Surface regions.
    pub regions: usize,
    /// Underground regions.
    pub underground_regions: usize,
    /// Sites, duplicates included.
    pub sites: usize,
    /// Artifacts.
    pub artifacts: usize,
    /// Historical figures, duplicates included.
    pub figures: usize,
    /// Entity populations.
    pub entity_populations: usize,
    /// Entities.
    pub entities: usize,
    /// Historical events.
    pub events: usize,
}

/// A loaded, indexed world. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct World {
    doc: WorldDocument,
    index: WorldIndex,
}

impl World {
    /// Decode a whole document and index it.
    ///
    /// On error nothing is returned; there is no partially built world.
    pub fn load<D: WorldDecoder>(decoder: D) -> DecodeResult<Self> {
        let doc = decoder.decode()?;
        Ok(Self::from_document(doc))
    }

    /// Decode `reader` in the given syntax and index it.
    pub fn load_syntax<R: BufRead>(syntax: Syntax, reader: R) -> DecodeResult<Self> {
        debug!(%syntax, "decoding world");
        match syntax {
            Syntax::Xml => Self::load(XmlDecoder::new(reader)),
            Syntax::Json => Self::load(JsonDecoder::new(reader)),
        }
    }

    /// Index an already decoded document.
    pub fn from_document(doc: WorldDocument) -> Self {
        let index = WorldIndex::build(&doc);
        let world = Self { doc, index };
        let stats = world.stats();
        info!(
            regions = stats.regions,
            sites = stats.sites,
            figures = stats.figures,
            entities = stats.entities,
            events = stats.events,
            distinct_figures = world.index.figure_count(),
            distinct_sites = world.index.site_count(),
            "world loaded"
        );
        world
    }

    // -----------------------------------------------------------------------
    // Collections
    // -----------------------------------------------------------------------

    /// Surface regions, in document order.
    pub fn regions(&self) -> &[Region] {
        &self.doc.regions
    }

    /// Underground regions, in document order.
    pub fn underground_regions(&self) -> &[UndergroundRegion] {
        &self.doc.underground_regions
    }

    /// Sites, in document order. Duplicated ids are all kept here.
    pub fn sites(&self) -> &[Site] {
        &self.doc.sites
    }

    /// Artifacts, in document order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.doc.artifacts
    }

    /// Historical figures, in document order.
    pub fn figures(&self) -> &[Figure] {
        &self.doc.historical_figures
    }

    /// Entity populations, in document order.
    pub fn entity_populations(&self) -> &[EntityPopulation] {
        &self.doc.entity_populations
    }

    /// Entities, in document order.
    pub fn entities(&self) -> &[Entity] {
        &self.doc.entities
    }

    /// Historical events, in document order.
    pub fn events(&self) -> &[Event] {
        &self.doc.historical_events
    }

    /// The decoded document, e.g. for bulk serialization.
    pub fn document(&self) -> &WorldDocument {
        &self.doc
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Get a figure by id.
    ///
    /// The index behind this lookup is private to the crate:
    ///
    /// ```compile_fail
    /// use lg_core::index::WorldIndex;
    /// ```
    pub fn figure(&self, id: FigureId) -> Option<&Figure> {
        self.index.figure(&self.doc, id)
    }

    /// Get a site by id.
    pub fn site(&self, id: SiteId) -> Option<&Site> {
        self.index.site(&self.doc, id)
    }

    /// Events where `figure` is the subject or the slayer, in document order.
    pub fn events_of(&self, figure: FigureId) -> FigureEvents<'_> {
        FigureEvents::new(self.events(), figure)
    }

    /// Narrative text for an event, resolved against this world.
    pub fn narrate<'w>(&'w self, event: &'w Event) -> Narrative<'w> {
        Narrative::new(self, event)
    }

    /// Record count of every collection.
    pub fn stats(&self) -> WorldStats {
        WorldStats {
            regions: self.doc.regions.len(),
            underground_regions: self.doc.underground_regions.len(),
            sites: self.doc.sites.len(),
            artifacts: self.doc.artifacts.len(),
            figures: self.doc.historical_figures.len(),
            entity_populations: self.doc.entity_populations.len(),
            entities: self.doc.entities.len(),
            events: self.doc.historical_events.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn test_world() -> World {
        World::from_document(WorldDocument {
            sites: vec![Site {
                id: SiteId(4),
                kind: "fortress".to_string(),
                name: "Mountainhome".to_string(),
                coords: "3,9".to_string(),
            }],
            historical_figures: vec![
                Figure {
                    id: FigureId(1),
                    name: "Urist".to_string(),
                    ..Figure::default()
                },
                Figure {
                    id: FigureId(2),
                    name: "Doren".to_string(),
                    ..Figure::default()
                },
            ],
            historical_events: vec![Event {
                id: 0,
                year: 12,
                event_type: EventType::HfDied,
                figure_id: FigureId(1),
                slayer_id: FigureId(2),
                ..Event::default()
            }],
            ..WorldDocument::default()
        })
    }

    #[test]
    fn lookups_go_through_the_index() {
        let world = test_world();
        assert_eq!(world.figure(FigureId(1)).unwrap().name, "Urist");
        assert_eq!(world.site(SiteId(4)).unwrap().name, "Mountainhome");
        assert!(world.figure(FigureId(3)).is_none());
        assert!(world.site(SiteId::NONE).is_none());
    }

    #[test]
    fn stats_count_every_collection() {
        let stats = test_world().stats();
        assert_eq!(stats.figures, 2);
        assert_eq!(stats.sites, 1);
        assert_eq!(stats.events, 1);
        assert_eq!(stats.regions, 0);
        assert_eq!(stats.entity_populations, 0);
    }

    #[test]
    fn narrate_resolves_through_world() {
        let world = test_world();
        let event = &world.events()[0];
        assert_eq!(world.narrate(event).to_string(), "Urist slayed by Doren");
    }

    #[test]
    fn world_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<World>();
    }

    #[test]
    fn missing_hfid_is_figure_zero() {
        let json = r#"{"historical_events": [
            {"id": 0, "year": 1, "type": "hf died", "hfid": 0, "slayer_hfid": -1},
            {"id": 1, "year": 2, "type": "destroyed site", "site_id": 3},
            {"id": 2, "year": 3, "type": "hf died", "hfid": 5, "slayer_hfid": -1}
        ]}"#;
        let world = World::load_syntax(Syntax::Json, json.as_bytes()).unwrap();

        let ids: Vec<i32> = world.events_of(FigureId(0)).map(|e| e.id).collect();
        assert_eq!(ids, [0, 1]);
    }

    #[test]
    fn load_syntax_decodes_json() {
        let json = r#"{"historical_figures": [{"id": 7, "name": "Kib"}]}"#;
        let world = World::load_syntax(Syntax::Json, json.as_bytes()).unwrap();
        assert_eq!(world.figure(FigureId(7)).unwrap().name, "Kib");
    }
}
