use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, FigureId, SiteId};

/// What an event describes. Decoded from the document's `type` string.
///
/// Kinds without a narration rule are kept verbatim in
/// [`EventType::Unrecognized`] so they stay visible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    /// A civilization razed another civilization's site.
    DestroyedSite,
    /// A figure settled, started wandering, took refuge...
    ChangeHfState,
    /// A figure died, possibly at another figure's hands.
    HfDied,
    /// Any discriminant without a narration rule.
    Unrecognized(String),
}

impl EventType {
    /// The discriminant exactly as it appears in documents.
    pub fn as_str(&self) -> &str {
        match self {
            Self::DestroyedSite => "destroyed site",
            Self::ChangeHfState => "change hf state",
            Self::HfDied => "hf died",
            Self::Unrecognized(s) => s.as_str(),
        }
    }
}

impl Default for EventType {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "destroyed site" => Self::DestroyedSite,
            "change hf state" => Self::ChangeHfState,
            "hf died" => Self::HfDied,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<EventType> for String {
    fn from(kind: EventType) -> Self {
        match kind {
            EventType::Unrecognized(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One historical event.
///
/// A single wide record: which fields are meaningful depends on
/// [`Event::event_type`]. Fields a kind does not use hold their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Event id, unique among events.
    pub id: i32,
    /// Year the event happened in.
    pub year: i32,
    /// Time within the year, when the document records one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds72: Option<i32>,
    /// Discriminant selecting how the other fields are read.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Civilization that attacked, for conflict events.
    pub attacker_civ_id: EntityId,
    /// Civilization that was attacked, for conflict events.
    pub defender_civ_id: EntityId,
    /// Subject of the event. Zero when the document has no `hfid`.
    #[serde(rename = "hfid")]
    pub figure_id: FigureId,
    /// Killer of the subject, for deaths. `-1` when there was none.
    #[serde(rename = "slayer_hfid")]
    pub slayer_id: FigureId,
    /// Item the slayer used, for deaths.
    pub slayer_item_id: i32,
    /// New state for "change hf state", e.g. "settled" or "wandering".
    pub state: String,
    /// Civilization owning the site at the time.
    pub site_civ_id: EntityId,
    /// [`SiteId::NONE`] when no site is involved.
    pub site_id: SiteId,
    /// Region the event happened in, if outside a site.
    pub subregion_id: i32,
    /// Underground layer the event happened in.
    pub feature_layer_id: i32,
    /// Map coordinate pair as written in the document.
    pub coords: String,
    /// Cause of death, for deaths.
    pub cause: String,
}

impl Event {
    /// The site this event happened at, unless it carries the no-site sentinel.
    pub fn site(&self) -> Option<SiteId> {
        if self.site_id == SiteId::NONE {
            None
        } else {
            Some(self.site_id)
        }
    }

    /// True if the figure is the event's subject or its slayer.
    pub fn involves(&self, figure: FigureId) -> bool {
        self.figure_id == figure || self.slayer_id == figure
    }
}
