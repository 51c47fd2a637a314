//! Turning events into readable sentences.
//!
//! Figure and site ids are resolved through the world's indices. An id that
//! resolves to nothing is written as a placeholder (`figure 12`, `site 3`)
//! so one dangling reference never breaks a whole listing.

use std::fmt;

use crate::entity::{FigureId, SiteId};
use crate::event::{Event, EventType};
use crate::world::World;

/// Render an event to a display string.
pub fn render_event(world: &World, event: &Event) -> String {
    Narrative::new(world, event).to_string()
}

/// Display adapter narrating one event against a world.
#[derive(Debug, Clone, Copy)]
pub struct Narrative<'w> {
    world: &'w World,
    event: &'w Event,
}

impl<'w> Narrative<'w> {
    /// Narrate `event`, resolving its ids in `world`.
    pub fn new(world: &'w World, event: &'w Event) -> Self {
        Self { world, event }
    }

    fn figure(&self, id: FigureId) -> FigureName<'w> {
        FigureName {
            world: self.world,
            id,
        }
    }

    fn site(&self, id: SiteId) -> SiteName<'w> {
        SiteName {
            world: self.world,
            id,
        }
    }
}

impl fmt::Display for Narrative<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = self.event;
        match &event.event_type {
            EventType::DestroyedSite => write!(
                f,
                "Site {} for Civ {} destroyed by Civ {}",
                event.site_id, event.defender_civ_id, event.attacker_civ_id
            ),
            EventType::ChangeHfState => {
                let figure = self.figure(event.figure_id);
                match event.site() {
                    Some(site) => write!(f, "{} {} {}", figure, event.state, self.site(site)),
                    None => write!(f, "{} {}", figure, event.state),
                }
            }
            EventType::HfDied => {
                let victim = self.figure(event.figure_id);
                match self.world.figure(event.slayer_id) {
                    Some(slayer) => write!(f, "{victim} slayed by {}", slayer.name),
                    None => write!(f, "{victim} died"),
                }
            }
            EventType::Unrecognized(kind) => write!(
                f,
                "Event {} in year {}: unrecognized event type \"{}\"",
                event.id, event.year, kind
            ),
        }
    }
}

struct FigureName<'w> {
    world: &'w World,
    id: FigureId,
}

impl fmt::Display for FigureName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.world.figure(self.id) {
            Some(figure) => f.write_str(&figure.name),
            None => write!(f, "figure {}", self.id),
        }
    }
}

struct SiteName<'w> {
    world: &'w World,
    id: SiteId,
}

impl fmt::Display for SiteName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.world.site(self.id) {
            Some(site) => f.write_str(&site.name),
            None => write!(f, "site {}", self.id),
        }
    }
}
