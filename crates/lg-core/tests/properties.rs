//! Property-based tests for lg-core.

use std::collections::BTreeSet;

use lg_core::{
    Event, EventType, Figure, FigureId, Site, SiteId, World, WorldDocument, render_event,
};
use proptest::prelude::*;

fn figures(ids: &BTreeSet<i32>) -> Vec<Figure> {
    ids.iter()
        .map(|&id| Figure {
            id: FigureId(id),
            name: format!("figure-{id}"),
            ..Figure::default()
        })
        .collect()
}

fn sites(ids: &BTreeSet<i32>) -> Vec<Site> {
    ids.iter()
        .map(|&id| Site {
            id: SiteId(id),
            name: format!("site-{id}"),
            ..Site::default()
        })
        .collect()
}

fn event_kind() -> impl Strategy<Value = EventType> {
    prop_oneof![
        Just(EventType::DestroyedSite),
        Just(EventType::ChangeHfState),
        Just(EventType::HfDied),
        "[a-z ]{0,12}".prop_map(EventType::from),
    ]
}

fn events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(
        (event_kind(), -2i32..8, -2i32..8, -1i32..8),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (event_type, figure, slayer, site))| Event {
                id: i as i32,
                year: i as i32 / 3,
                event_type,
                figure_id: FigureId(figure),
                slayer_id: FigureId(slayer),
                site_id: SiteId(site),
                state: "settled".to_string(),
                ..Event::default()
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn every_figure_and_site_looks_up_to_itself(
        figure_ids in prop::collection::btree_set(-5i32..200, 0..30),
        site_ids in prop::collection::btree_set(-1i32..200, 0..30),
    ) {
        let world = World::from_document(WorldDocument {
            historical_figures: figures(&figure_ids),
            sites: sites(&site_ids),
            ..WorldDocument::default()
        });

        for figure in world.figures() {
            prop_assert_eq!(world.figure(figure.id), Some(figure));
        }
        for site in world.sites() {
            prop_assert_eq!(world.site(site.id), Some(site));
        }
    }

    #[test]
    fn absent_ids_are_none(
        figure_ids in prop::collection::btree_set(0i32..100, 0..20),
        probe in 0i32..200,
    ) {
        let world = World::from_document(WorldDocument {
            historical_figures: figures(&figure_ids),
            sites: sites(&figure_ids),
            ..WorldDocument::default()
        });

        if figure_ids.contains(&probe) {
            prop_assert_eq!(world.figure(FigureId(probe)).map(|f| f.id), Some(FigureId(probe)));
            prop_assert_eq!(world.site(SiteId(probe)).map(|s| s.id), Some(SiteId(probe)));
        } else {
            prop_assert!(world.figure(FigureId(probe)).is_none());
            prop_assert!(world.site(SiteId(probe)).is_none());
        }
    }

    #[test]
    fn figure_stream_is_the_ordered_matching_subset(
        events in events(),
        probe in -2i32..8,
    ) {
        let world = World::from_document(WorldDocument {
            historical_events: events,
            ..WorldDocument::default()
        });
        let figure = FigureId(probe);

        let streamed: Vec<i32> = world.events_of(figure).map(|e| e.id).collect();
        let expected: Vec<i32> = world
            .events()
            .iter()
            .filter(|e| e.figure_id == figure || e.slayer_id == figure)
            .map(|e| e.id)
            .collect();

        prop_assert_eq!(streamed, expected);
    }

    #[test]
    fn rendering_never_fails_and_names_unknown_kinds(
        events in events(),
        figure_ids in prop::collection::btree_set(-2i32..8, 0..6),
        site_ids in prop::collection::btree_set(-1i32..8, 0..6),
    ) {
        let world = World::from_document(WorldDocument {
            historical_figures: figures(&figure_ids),
            sites: sites(&site_ids),
            historical_events: events,
            ..WorldDocument::default()
        });

        for event in world.events() {
            let text = render_event(&world, event);
            prop_assert!(!text.is_empty());
            if let EventType::Unrecognized(kind) = &event.event_type {
                let event_label = format!("Event {}", event.id);
                let year_label = format!("year {}", event.year);
                prop_assert!(text.contains(&event_label));
                prop_assert!(text.contains(&year_label));
                prop_assert!(text.contains(kind.as_str()));
            }
        }
    }
}
