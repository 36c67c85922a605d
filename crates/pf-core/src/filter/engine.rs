use std::collections::BTreeSet;
use std::sync::Arc;

use super::category::{FilterCategory, InvalidFilterCategory};
use super::view::{ProjectCard, ViewMode};
use crate::catalog::{Project, ProjectCatalog};

/// Derives the visible project subset for a filter selection.
///
/// The engine only reads the catalog. Outputs keep catalog order.
#[derive(Debug, Clone)]
pub struct ProjectFilterEngine {
    catalog: Arc<ProjectCatalog>,
}

impl ProjectFilterEngine {
    pub fn new(catalog: Arc<ProjectCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn filter(&self, category: FilterCategory) -> Vec<&Project> {
        self.catalog
            .projects()
            .iter()
            .filter(|project| category.matches(project))
            .collect()
    }

    /// Filter by the raw key coming from the UI.
    pub fn filter_by_key(&self, key: &str) -> Result<Vec<&Project>, InvalidFilterCategory> {
        let category: FilterCategory = key.parse()?;
        Ok(self.filter(category))
    }

    /// Sorted, de-duplicated union of all tags. Tags differing only in case
    /// are distinct.
    pub fn tech_stack(&self) -> Vec<String> {
        self.catalog
            .projects()
            .iter()
            .flat_map(|project| project.tech.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Number of projects under each category, in filter-bar order.
    pub fn counts(&self) -> Vec<(FilterCategory, usize)> {
        FilterCategory::ALL
            .into_iter()
            .map(|category| (category, self.filter(category).len()))
            .collect()
    }

    pub fn cards(&self, category: FilterCategory, view_mode: ViewMode) -> Vec<ProjectCard> {
        self.filter(category)
            .into_iter()
            .map(|project| ProjectCard::render(project, view_mode))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProjectId;

    fn engine() -> ProjectFilterEngine {
        ProjectFilterEngine::new(Arc::new(ProjectCatalog::sample()))
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_all_returns_full_catalog_in_order() {
        let engine = engine();
        let all = engine.filter(FilterCategory::All);
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_featured_excludes_portfolio_website() {
        let engine = engine();
        let featured = engine.filter(FilterCategory::Featured);
        assert_eq!(ids(&featured), vec![1, 2, 3, 4]);
        assert!(featured.iter().all(|p| p.title != "Portfolio Website"));
    }

    #[test]
    fn test_web_includes_portfolio_website() {
        let engine = engine();
        let web = engine.filter(FilterCategory::Web);
        assert_eq!(ids(&web), vec![5]);
    }

    #[test]
    fn test_ai_matches_substrings_case_insensitively() {
        let engine = engine();
        // "LLMs" on the agent, and "Tailwind CSS" contains "ai".
        assert_eq!(ids(&engine.filter(FilterCategory::Ai)), vec![1, 5]);
    }

    #[test]
    fn test_backend_matches_python_and_docker() {
        let engine = engine();
        assert_eq!(ids(&engine.filter(FilterCategory::Backend)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_categories_overlap() {
        let engine = engine();
        let portfolio = ProjectId::new(5);
        for category in [FilterCategory::All, FilterCategory::Ai, FilterCategory::Web] {
            assert!(engine.filter(category).iter().any(|p| p.id == portfolio));
        }
    }

    #[test]
    fn test_unknown_key_fails() {
        let engine = engine();
        assert_eq!(
            engine.filter_by_key("unknown").unwrap_err(),
            InvalidFilterCategory("unknown".to_string())
        );
        assert_eq!(ids(&engine.filter_by_key("featured").unwrap()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_tech_stack_is_sorted_and_unique() {
        let stack = engine().tech_stack();

        let mut sorted = stack.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(stack, sorted);

        assert_eq!(stack.iter().filter(|t| *t == "Python").count(), 1);
        assert_eq!(stack.len(), 28);
        assert_eq!(stack.first().map(String::as_str), Some("Autoscaling"));
    }

    #[test]
    fn test_tech_stack_does_not_fold_case() {
        let mut projects = ProjectCatalog::sample().projects().to_vec();
        projects[0].tech.push("python".to_string());
        let engine = ProjectFilterEngine::new(Arc::new(ProjectCatalog::new(projects).unwrap()));

        let stack = engine.tech_stack();
        assert!(stack.contains(&"Python".to_string()));
        assert!(stack.contains(&"python".to_string()));
    }

    #[test]
    fn test_counts_follow_filter_bar_order() {
        let counts = engine().counts();
        assert_eq!(
            counts,
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
    fn test_cards_use_view_mode() {
        let cards = engine().cards(FilterCategory::Featured, ViewMode::List);
        assert_eq!(cards.len(), 4);
        assert!(cards[0].body.starts_with("Designed and built an autonomous AI agent"));
    }
}
