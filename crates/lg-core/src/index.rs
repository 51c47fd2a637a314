use std::collections::HashMap;

use tracing::{debug, warn};

use crate::entity::{Figure, FigureId, Site, SiteId};
use crate::world::WorldDocument;

/// Id lookups over a decoded document.
///
/// Stores positions into the document's sequences; the figures and sites
/// themselves stay owned by the document.
#[derive(Debug, Clone, Default)]
pub struct WorldIndex {
    figures: HashMap<FigureId, usize>,
    sites: HashMap<SiteId, usize>,
}

impl WorldIndex {
    /// Index every figure and site of `doc` in one pass each.
    ///
    /// A duplicated id keeps the last record carrying it.
    pub fn build(doc: &WorldDocument) -> Self {
        let mut figures = HashMap::with_capacity(doc.historical_figures.len());
        for (pos, figure) in doc.historical_figures.iter().enumerate() {
            if let Some(prev) = figures.insert(figure.id, pos) {
                warn!(id = %figure.id, previous = prev, position = pos, "duplicate figure id");
            }
        }

        let mut sites = HashMap::with_capacity(doc.sites.len());
        for (pos, site) in doc.sites.iter().enumerate() {
            if let Some(prev) = sites.insert(site.id, pos) {
                warn!(id = %site.id, previous = prev, position = pos, "duplicate site id");
            }
        }

        debug!(figures = figures.len(), sites = sites.len(), "indexed world");
        Self { figures, sites }
    }

    /// Look up a figure in the document this index was built from.
    pub fn figure<'d>(&self, doc: &'d WorldDocument, id: FigureId) -> Option<&'d Figure> {
        self.figures
            .get(&id)
            .and_then(|&pos| doc.historical_figures.get(pos))
    }

    /// Look up a site in the document this index was built from.
    pub fn site<'d>(&self, doc: &'d WorldDocument, id: SiteId) -> Option<&'d Site> {
        self.sites.get(&id).and_then(|&pos| doc.sites.get(pos))
    }

    /// Number of distinct figure ids.
    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    /// Number of distinct site ids.
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure(id: i32, name: &str) -> Figure {
        Figure {
            id: FigureId(id),
            name: name.to_string(),
            ..Figure::default()
        }
    }

    fn site(id: i32, name: &str) -> Site {
        Site {
            id: SiteId(id),
            name: name.to_string(),
            ..Site::default()
        }
    }

    #[test]
    fn finds_figures_and_sites_by_id() {
        let doc = WorldDocument {
            historical_figures: vec![figure(1, "Urist"), figure(2, "Doren")],
            sites: vec![site(10, "Mountainhome")],
            ..WorldDocument::default()
        };
        let index = WorldIndex::build(&doc);

        assert_eq!(index.figure(&doc, FigureId(2)).unwrap().name, "Doren");
        assert_eq!(index.site(&doc, SiteId(10)).unwrap().name, "Mountainhome");
    }

    #[test]
    fn absent_ids_are_none() {
        let doc = WorldDocument {
            historical_figures: vec![figure(1, "Urist")],
            sites: vec![site(0, "Zero")],
            ..WorldDocument::default()
        };
        let index = WorldIndex::build(&doc);

        assert!(index.figure(&doc, FigureId(99)).is_none());
        assert!(index.site(&doc, SiteId::NONE).is_none());
        assert!(index.site(&doc, SiteId(0)).is_some());
    }

    #[test]
    fn duplicate_id_keeps_last_record() {
        let doc = WorldDocument {
            historical_figures: vec![figure(5, "First"), figure(5, "Second")],
            sites: vec![site(3, "Old"), site(3, "New")],
            ..WorldDocument::default()
        };
        let index = WorldIndex::build(&doc);

        assert_eq!(index.figure_count(), 1);
        assert_eq!(index.figure(&doc, FigureId(5)).unwrap().name, "Second");
        assert_eq!(index.site_count(), 1);
        assert_eq!(index.site(&doc, SiteId(3)).unwrap().name, "New");
    }

    #[test]
    fn empty_document_builds_empty_index() {
        let doc = WorldDocument::default();
        let index = WorldIndex::build(&doc);
        assert_eq!(index.figure_count(), 0);
        assert_eq!(index.site_count(), 0);
        assert!(index.figure(&doc, FigureId(0)).is_none());
    }
}
