use std::iter::FusedIterator;
use std::slice;

use crate::entity::FigureId;
use crate::event::Event;

/// Events involving one figure, produced on demand.
///
/// Each call to `next` scans forward to the next event whose subject or
/// slayer is the figure. Nothing is buffered and dropping the iterator early
/// leaves nothing behind.
#[derive(Debug, Clone)]
pub struct FigureEvents<'w> {
    figure: FigureId,
    events: slice::Iter<'w, Event>,
}

impl<'w> FigureEvents<'w> {
    /// Stream the events of `figure` out of `events`.
    pub fn new(events: &'w [Event], figure: FigureId) -> Self {
        Self {
            figure,
            events: events.iter(),
        }
    }

    /// The figure this stream is filtered on.
    pub fn figure(&self) -> FigureId {
        self.figure
    }
}

impl<'w> Iterator for FigureEvents<'w> {
    type Item = &'w Event;

    fn next(&mut self) -> Option<Self::Item> {
        let figure = self.figure;
        self.events.find(|event| event.involves(figure))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.events.size_hint().1)
    }
}

impl FusedIterator for FigureEvents<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn event(id: i32, figure: i32, slayer: i32) -> Event {
        Event {
            id,
            year: id * 10,
            event_type: EventType::HfDied,
            figure_id: FigureId(figure),
            slayer_id: FigureId(slayer),
            ..Event::default()
        }
    }

    fn ids<'a>(events: impl Iterator<Item = &'a Event>) -> Vec<i32> {
        events.map(|e| e.id).collect()
    }

    #[test]
    fn yields_subject_and_slayer_events_in_order() {
        let events = vec![
            event(0, 1, -1),
            event(1, 2, 1),
            event(2, 3, -1),
            event(3, 1, -1),
        ];
        assert_eq!(ids(FigureEvents::new(&events, FigureId(1))), vec![0, 1, 3]);
        assert_eq!(ids(FigureEvents::new(&events, FigureId(3))), vec![2]);
    }

    #[test]
    fn self_slain_event_yielded_once() {
        let events = vec![event(0, 5, 5)];
        assert_eq!(ids(FigureEvents::new(&events, FigureId(5))), vec![0]);
    }

    #[test]
    fn unknown_figure_yields_nothing() {
        let events = vec![event(0, 1, 2)];
        assert_eq!(FigureEvents::new(&events, FigureId(9)).count(), 0);
        assert_eq!(FigureEvents::new(&[], FigureId(1)).count(), 0);
    }

    #[test]
    fn can_stop_early_and_stays_exhausted() {
        let events = vec![event(0, 1, -1), event(1, 1, -1), event(2, 1, -1)];
        let mut stream = FigureEvents::new(&events, FigureId(1));
        assert_eq!(stream.next().map(|e| e.id), Some(0));
        assert_eq!(stream.figure(), FigureId(1));

        let mut rest = stream.clone();
        assert_eq!(ids(&mut rest), vec![1, 2]);
        assert!(rest.next().is_none());
        assert!(rest.next().is_none());
    }

    #[test]
    fn size_hint_bounded_by_remaining_events() {
        let events = vec![event(0, 1, -1), event(1, 2, -1)];
        let mut stream = FigureEvents::new(&events, FigureId(1));
        assert_eq!(stream.size_hint(), (0, Some(2)));
        stream.next();
        assert_eq!(stream.size_hint(), (0, Some(1)));
    }
}
