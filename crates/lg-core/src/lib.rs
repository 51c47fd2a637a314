//! World model for legends exports.
//!
//! A legends document lists a generated world's regions, sites, artifacts,
//! historical figures, entities and events. This crate decodes one in a
//! single pass into a [`World`], indexes figures and sites by id, streams the
//! events of a given figure, and narrates events as plain sentences.
//!
//! ```
//! use lg_core::{FigureId, Syntax, World};
//!
//! let doc = r#"{
//!     "historical_figures": [{"id": 1, "name": "Urist"}],
//!     "historical_events": [{"id": 0, "year": 3, "type": "hf died", "hfid": 1, "slayer_hfid": -1}]
//! }"#;
//! let world = World::load_syntax(Syntax::Json, doc.as_bytes()).unwrap();
//! let texts: Vec<String> = world
//!     .events_of(FigureId(1))
//!     .map(|event| world.narrate(event).to_string())
//!     .collect();
//! assert_eq!(texts, ["Urist died"]);
//! ```

/// Document syntaxes and the decoder boundary.
pub mod decode;
/// Fixed-width text listing of a world.
pub mod dump;
/// Identifiers and record types.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Historical events and their kinds.
pub mod event;
/// Id lookups built after decoding.
pub(crate) mod index;
/// Event narration.
pub mod narrative;
/// Links from figures to entities and sites.
pub mod relationship;
/// Per-figure event streams.
pub mod timeline;
/// The loaded world.
pub mod world;

pub use decode::{JsonDecoder, Syntax, WorldDecoder, XmlDecoder};
pub use entity::{
    Artifact, Entity, EntityId, EntityPopulation, Figure, FigureId, Region, Site, SiteId,
    UndergroundRegion,
};
pub use error::{DecodeError, DecodeResult};
pub use event::{Event, EventType};
pub use narrative::{Narrative, render_event};
pub use relationship::{EntityLink, SiteLink};
pub use timeline::FigureEvents;
pub use world::{World, WorldDocument, WorldStats};
