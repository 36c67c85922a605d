use std::fmt::Write;

use pf_app::usecases::{ProjectListing, ProjectQuery};
use pf_app::App;
use pf_core::filter::ProjectCard;

use super::to_json;

pub fn list(app: &App, filter: &str, view: &str, json: bool) -> anyhow::Result<String> {
    let listing = app.list_projects().execute(&ProjectQuery {
        filter: filter.to_string(),
        view: view.to_string(),
    })?;

    if json {
        to_json(&listing)
    } else {
        Ok(render_listing(&listing))
    }
}

pub fn tech_stack(app: &App, json: bool) -> anyhow::Result<String> {
    let stack = app.get_tech_stack().execute();
    if json {
        to_json(&stack)
    } else {
        Ok(stack.join("\n"))
    }
}

fn render_listing(listing: &ProjectListing) -> String {
    let mut out = String::new();

    let tabs: Vec<String> = listing
        .counts
        .iter()
        .map(|(category, count)| {
            if *category == listing.category {
                format!("[{} ({count})]", category.as_str())
            } else {
                format!("{} ({count})", category.as_str())
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join("  "));
    let _ = writeln!(out, "view: {}", listing.view_mode.as_str());

    if listing.cards.is_empty() {
        out.push_str("\nNo projects in this category.");
        return out;
    }

    for card in &listing.cards {
        out.push('\n');
        render_card(&mut out, card);
    }
    out.truncate(out.trim_end().len());
    out
}

fn render_card(out: &mut String, card: &ProjectCard) {
    let star = if card.featured { " *" } else { "" };
    let _ = writeln!(out, "#{} {}{star}  ({}, {})", card.id, card.title, card.year, card.role);
    let _ = writeln!(out, "  {}", card.body);
    let _ = writeln!(out, "  tech: {}", card.tech.join(", "));
    let _ = writeln!(out, "  code: {}", card.code_link);
    if let Some(demo) = &card.demo_link {
        let _ = writeln!(out, "  demo: {demo}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::catalog::ProjectCatalog;
    use pf_core::filter::{FilterCategory, ProjectFilterEngine, ViewMode};
    use std::sync::Arc;

    fn listing(category: FilterCategory) -> ProjectListing {
        let engine = ProjectFilterEngine::new(Arc::new(ProjectCatalog::sample()));
        ProjectListing {
            category,
            view_mode: ViewMode::Grid,
            cards: engine.cards(category, ViewMode::Grid),
            counts: engine.counts(),
        }
    }

    #[test]
    fn test_selected_tab_is_bracketed() {
        let text = render_listing(&listing(FilterCategory::Web));
        let first_line = text.lines().next().unwrap();
        assert!(first_line.contains("[web (1)]"));
        assert!(first_line.contains("all (5)"));
        assert_eq!(text.matches("\n#").count(), 1);
    }

    #[test]
    fn test_every_card_is_rendered() {
        let text = render_listing(&listing(FilterCategory::All));
        for id in 1..=5 {
            assert!(text.contains(&format!("\n#{id} ")), "card {id} missing");
        }
    }
}
