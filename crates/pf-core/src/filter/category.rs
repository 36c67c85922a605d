use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Project;

/// Gallery filter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    All,
    Featured,
    Ai,
    Web,
    Backend,
}

/// Unknown filter key. Callers never fall back to `all`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid filter category: {0:?}")]
pub struct InvalidFilterCategory(pub String);

/// How a category selects projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryPredicate {
    Everything,
    Featured,
    /// At least one tag contains one of the keywords, ignoring case.
    /// Keywords are stored lowercase.
    TagKeywords(&'static [&'static str]),
}

/// Category → predicate table.
///
/// Some keywords (`openai`, `redis`, ...) match no tag of the shipped catalog.
/// They are kept so that catalogs loaded from file keep the same categories.
pub const CATEGORY_RULES: [(FilterCategory, CategoryPredicate); 5] = [
    (FilterCategory::All, CategoryPredicate::Everything),
    (FilterCategory::Featured, CategoryPredicate::Featured),
    (
        FilterCategory::Ai,
        CategoryPredicate::TagKeywords(&["ai", "llm", "openai", "langchain"]),
    ),
    (
        FilterCategory::Web,
        CategoryPredicate::TagKeywords(&["react", "next", "typescript", "tailwind"]),
    ),
    (
        FilterCategory::Backend,
        CategoryPredicate::TagKeywords(&["python", "fastapi", "aws", "docker", "redis"]),
    ),
];

impl FilterCategory {
    /// All categories in filter-bar order.
    pub const ALL: [FilterCategory; 5] = [
        FilterCategory::All,
        FilterCategory::Featured,
        FilterCategory::Ai,
        FilterCategory::Web,
        FilterCategory::Backend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCategory::All => "all",
            FilterCategory::Featured => "featured",
            FilterCategory::Ai => "ai",
            FilterCategory::Web => "web",
            FilterCategory::Backend => "backend",
        }
    }

    pub fn predicate(&self) -> CategoryPredicate {
        CATEGORY_RULES
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, predicate)| *predicate)
            .unwrap_or(CategoryPredicate::Everything)
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.predicate().matches(project)
    }
}

impl CategoryPredicate {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryPredicate::Everything => true,
            CategoryPredicate::Featured => project.is_featured,
            CategoryPredicate::TagKeywords(keywords) => project.tech.iter().any(|tag| {
                let tag = tag.to_lowercase();
                keywords.iter().any(|keyword| tag.contains(keyword))
            }),
        }
    }
}

impl FromStr for FilterCategory {
    type Err = InvalidFilterCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| InvalidFilterCategory(s.to_string()))
    }
}

impl Display for FilterCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_exactly_one_rule() {
        for category in FilterCategory::ALL {
            let count = CATEGORY_RULES.iter().filter(|(c, _)| *c == category).count();
            assert_eq!(count, 1, "{category}");
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for (_, predicate) in CATEGORY_RULES {
            if let CategoryPredicate::TagKeywords(keywords) = predicate {
                assert!(keywords.iter().all(|k| k.to_lowercase() == *k));
            }
        }
    }

    #[test]
    fn test_declared_keyword_sets_are_preserved() {
        assert_eq!(
            FilterCategory::Backend.predicate(),
            CategoryPredicate::TagKeywords(&["python", "fastapi", "aws", "docker", "redis"])
        );
        assert_eq!(
            FilterCategory::Ai.predicate(),
            CategoryPredicate::TagKeywords(&["ai", "llm", "openai", "langchain"])
        );
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("web".parse::<FilterCategory>(), Ok(FilterCategory::Web));
        assert_eq!(
            "Web".parse::<FilterCategory>(),
            Err(InvalidFilterCategory("Web".to_string()))
        );
        assert_eq!(
            "unknown".parse::<FilterCategory>(),
            Err(InvalidFilterCategory("unknown".to_string()))
        );
    }
}
