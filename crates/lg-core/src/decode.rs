//! Document syntaxes a world can be decoded from.
//!
//! Both syntaxes describe the same [`WorldDocument`]. The tag-based one nests
//! each collection in a section element (`<sites><site>...</site></sites>`);
//! the key-based one maps each collection name to an array. Record fields
//! use the same names in both.
//!
//! Input must already be decompressed and UTF-8.

use std::fmt;
use std::io::{BufRead, Read};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::entity::{Artifact, Entity, EntityPopulation, Figure, Region, Site, UndergroundRegion};
use crate::error::DecodeResult;
use crate::event::Event;
use crate::world::WorldDocument;

/// Anything that can decode a whole document in one call.
pub trait WorldDecoder {
    /// Decode the complete document, or fail without producing anything.
    fn decode(self) -> DecodeResult<WorldDocument>;
}

/// Concrete document syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// Tag-based, rooted at `<df_world>`.
    Xml,
    /// Key-based, one object with an array per collection.
    Json,
}

impl Syntax {
    /// Pick a syntax from a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for Syntax {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown document syntax: \"{other}\"")),
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml => write!(f, "xml"),
            Self::Json => write!(f, "json"),
        }
    }
}

// ---------------------------------------------------------------------------
// XML
// ---------------------------------------------------------------------------

/// Decodes the tag-based syntax.
#[derive(Debug)]
pub struct XmlDecoder<R> {
    reader: R,
}

impl<R: BufRead> XmlDecoder<R> {
    /// Decode from a buffered reader positioned at the start of the document.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> WorldDecoder for XmlDecoder<R> {
    fn decode(self) -> DecodeResult<WorldDocument> {
        let world: XmlWorld = quick_xml::de::from_reader(self.reader)?;
        Ok(world.into())
    }
}

// The root element's name is not checked: any root whose children are the
// known sections decodes, and unknown children are skipped.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlWorld {
    regions: XmlRegions,
    underground_regions: XmlUndergroundRegions,
    sites: XmlSites,
    artifacts: XmlArtifacts,
    historical_figures: XmlFigures,
    entity_populations: XmlEntityPopulations,
    entities: XmlEntities,
    historical_events: XmlEvents,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlRegions {
    region: Vec<Region>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlUndergroundRegions {
    underground_region: Vec<UndergroundRegion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlSites {
    site: Vec<Site>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlArtifacts {
    artifact: Vec<Artifact>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlFigures {
    historical_figure: Vec<Figure>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlEntityPopulations {
    entity_population: Vec<EntityPopulation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlEntities {
    entity: Vec<Entity>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlEvents {
    historical_event: Vec<Event>,
}

impl From<XmlWorld> for WorldDocument {
    fn from(xml: XmlWorld) -> Self {
        Self {
            regions: xml.regions.region,
            underground_regions: xml.underground_regions.underground_region,
            sites: xml.sites.site,
            artifacts: xml.artifacts.artifact,
            historical_figures: xml.historical_figures.historical_figure,
            entity_populations: xml.entity_populations.entity_population,
            entities: xml.entities.entity,
            historical_events: xml.historical_events.historical_event,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Decodes the key-based syntax.
#[derive(Debug)]
pub struct JsonDecoder<R> {
    reader: R,
}

impl<R: Read> JsonDecoder<R> {
    /// Decode from any reader; serde_json buffers internally.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> WorldDecoder for JsonDecoder<R> {
    fn decode(self) -> DecodeResult<WorldDocument> {
        Ok(serde_json::from_reader(self.reader)?)
    }
}
