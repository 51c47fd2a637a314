use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, SiteId};

/// A figure's tie to an entity. Resolved by id only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityLink {
    /// Kind of tie, e.g. "member", "enemy", "former member".
    pub link_type: String,
    /// The linked entity.
    pub entity_id: EntityId,
}

/// A figure's tie to a site. Resolved by id only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteLink {
    /// Kind of tie, e.g. "lair", "home site building", "seat of power".
    pub link_type: String,
    /// The linked site.
    pub site_id: SiteId,
}

impl EntityLink {
    /// Create a link of the given kind to an entity.
    pub fn new(link_type: impl Into<String>, entity_id: EntityId) -> Self {
        Self {
            link_type: link_type.into(),
            entity_id,
        }
    }
}

impl SiteLink {
    /// Create a link of the given kind to a site.
    pub fn new(link_type: impl Into<String>, site_id: SiteId) -> Self {
        Self {
            link_type: link_type.into(),
            site_id,
        }
    }
}
