use pf_core::filter::{
    FilterCategory, InvalidFilterCategory, InvalidViewMode, ProjectCard, ProjectFilterEngine,
    ViewMode,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info_span};

/// Raw gallery controls as received from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    pub filter: String,
    pub view: String,
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self {
            filter: FilterCategory::All.as_str().to_string(),
            view: ViewMode::Grid.as_str().to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectQueryError {
    #[error(transparent)]
    Filter(#[from] InvalidFilterCategory),
    #[error(transparent)]
    View(#[from] InvalidViewMode),
}

/// What the gallery renders: the cards plus the per-category badge counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListing {
    pub category: FilterCategory,
    pub view_mode: ViewMode,
    pub cards: Vec<ProjectCard>,
    pub counts: Vec<(FilterCategory, usize)>,
}

/// Use case for listing the project gallery.
pub struct ListProjects {
    engine: ProjectFilterEngine,
}

impl ListProjects {
    pub fn new(engine: ProjectFilterEngine) -> Self {
        Self { engine }
    }

    /// Parse the controls, then filter in catalog order.
    ///
    /// An unknown filter or view key is an error; nothing is rendered for it.
    pub fn execute(&self, query: &ProjectQuery) -> Result<ProjectListing, ProjectQueryError> {
        let _span = info_span!("usecase.list_projects.execute", filter = %query.filter, view = %query.view)
            .entered();

        let category: FilterCategory = query.filter.parse()?;
        let view_mode: ViewMode = query.view.parse()?;

        let cards = self.engine.cards(category, view_mode);
        debug!(shown = cards.len(), "Project gallery filtered");

        Ok(ProjectListing {
            category,
            view_mode,
            cards,
            counts: self.engine.counts(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::catalog::ProjectCatalog;
    use pf_core::ProjectId;
    use std::sync::Arc;

    fn usecase() -> ListProjects {
        ListProjects::new(ProjectFilterEngine::new(Arc::new(ProjectCatalog::sample())))
    }

    fn query(filter: &str, view: &str) -> ProjectQuery {
        ProjectQuery {
            filter: filter.into(),
            view: view.into(),
        }
    }

    fn ids(listing: &ProjectListing) -> Vec<u32> {
        listing.cards.iter().map(|c| c.id.value()).collect()
    }

    #[test]
    fn test_default_query_shows_everything_as_grid() {
        let listing = usecase().execute(&ProjectQuery::default()).unwrap();
        assert_eq!(listing.category, FilterCategory::All);
        assert_eq!(listing.view_mode, ViewMode::Grid);
        assert_eq!(ids(&listing), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ai_filter_keeps_catalog_order() {
        let listing = usecase().execute(&query("ai", "grid")).unwrap();
        assert_eq!(ids(&listing), vec![1, 5]);
    }

    #[test]
    fn test_list_view_uses_full_description() {
        let uc = usecase();
        let grid = uc.execute(&query("web", "grid")).unwrap();
        let list = uc.execute(&query("web", "list")).unwrap();

        assert_eq!(ids(&list), vec![5]);
        assert_eq!(list.cards[0].id, ProjectId::new(5));
        assert!(list.cards[0].body.len() > grid.cards[0].body.len());
    }

    #[test]
    fn test_counts_cover_every_category() {
        let listing = usecase().execute(&query("backend", "grid")).unwrap();
        assert_eq!(
            listing.counts,
            vec![
                (FilterCategory::All, 5),
                (FilterCategory::Featured, 4),
                (FilterCategory::Ai, 2),
                (FilterCategory::Web, 1),
                (FilterCategory::Backend, 4),
            ]
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let uc = usecase();
        assert!(matches!(
            uc.execute(&query("mobile", "grid")),
            Err(ProjectQueryError::Filter(_))
        ));
        assert!(matches!(
            uc.execute(&query("all", "carousel")),
            Err(ProjectQueryError::View(_))
        ));
    }
}
