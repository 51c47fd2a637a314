use std::fmt;

use serde::{Deserialize, Serialize};

use crate::relationship::{EntityLink, SiteLink};

/// Identifier of a historical figure (`hfid` in the document).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FigureId(pub i32);

/// Identifier of a site.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SiteId(pub i32);

impl SiteId {
    /// "No site involved". Distinct from site 0.
    pub const NONE: SiteId = SiteId(-1);
}

/// Identifier of an entity (civilization, group, religion...).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(pub i32);

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A surface region of the world map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    /// Region id, unique among regions.
    pub id: i32,
    /// Display name of the region.
    pub name: String,
    /// Biome-like classification, e.g. "Mountains" or "Wetland".
    #[serde(rename = "type")]
    pub kind: String,
}

/// A cavern layer or magma sea below the surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UndergroundRegion {
    /// Underground region id, unique among underground regions.
    pub id: i32,
    /// Layer kind, e.g. "cavern" or "magma".
    #[serde(rename = "type")]
    pub kind: String,
    /// Depth of the layer; deeper layers have larger values.
    pub depth: i32,
}

/// A place: fortress, town, lair, camp...
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    /// Site id, referenced from figures and events.
    pub id: SiteId,
    /// Site kind, e.g. "fortress", "cave" or "dark fortress".
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name of the site.
    pub name: String,
    /// Map coordinate pair as written in the document, e.g. `"12,40"`.
    pub coords: String,
}

/// A named item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artifact {
    /// Artifact id, unique among artifacts.
    pub id: i32,
    /// Display name of the artifact.
    pub name: String,
    /// Name of the underlying item the artifact is made from.
    pub item: String,
}

/// A civilization or other organized group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Entity id, referenced from entity links and events.
    pub id: EntityId,
    /// Display name of the entity.
    pub name: String,
}

/// A population record of an entity.
///
/// Exports carry these with nothing but an id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityPopulation {
    /// Population id.
    pub id: i32,
}

/// A historical figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Figure {
    /// Figure id, referenced from events as `hfid`.
    pub id: FigureId,
    /// Display name of the figure.
    pub name: String,
    /// Creature race token, e.g. "DWARF".
    pub race: String,
    /// Caste token, e.g. "FEMALE".
    pub caste: String,
    /// Year the figure first appeared in the world.
    pub appeared: i32,
    /// Year of birth; negative for figures older than the world.
    pub birth_year: i32,
    /// `-1` while the figure is alive.
    pub death_year: i32,
    /// Profession or role tokens, e.g. "MINER".
    pub associated_types: String,
    /// Links to entities, in document order.
    #[serde(rename = "entity_link")]
    pub entity_links: Vec<EntityLink>,
    /// Links to sites, in document order.
    #[serde(rename = "site_link")]
    pub site_links: Vec<SiteLink>,
    /// Spheres of influence (deities and megabeasts mostly).
    #[serde(rename = "sphere")]
    pub spheres: Vec<String>,
}

impl Figure {
    /// True if the document records no death year.
    pub fn is_alive(&self) -> bool {
        self.death_year == -1
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
