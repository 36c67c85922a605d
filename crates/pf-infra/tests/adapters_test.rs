use std::io::Write;

use pf_core::filter::{FilterCategory, ProjectFilterEngine};
use pf_core::ports::{ProjectCatalogPort, ViewportPort};
use pf_core::scroll::{ScrollTracker, ScrollTrackerConfig};
use pf_core::section::site_sections;
use pf_core::SectionId;
use pf_infra::{BuiltinCatalog, PageLayout, SimulatedViewport, TomlCatalogSource};
use std::sync::Arc;

#[test]
fn toml_catalog_file_feeds_the_filter_engine() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"
[[projects]]
id = 1
title = "Inference Gateway"
description = "Routes prompts to LLMs."
full_description = "Routes prompts to LLMs with quotas."
tech = ["Go", "LLMs"]
link = "https://example.com/gateway"
year = 2024
role = "Lead"
is_featured = true

[[projects]]
id = 2
title = "Storefront"
description = "Shop frontend."
full_description = "Shop frontend with SSR."
tech = ["React", "Next.js"]
link = "https://example.com/shop"
year = 2022
role = "Developer"
"#
    )?;

    let catalog = TomlCatalogSource::new(file.path()).load()?;
    let engine = ProjectFilterEngine::new(Arc::new(catalog));

    let ai: Vec<u32> = engine
        .filter(FilterCategory::Ai)
        .iter()
        .map(|p| p.id.value())
        .collect();
    let web: Vec<u32> = engine
        .filter(FilterCategory::Web)
        .iter()
        .map(|p| p.id.value())
        .collect();
    assert_eq!(ai, vec![1]);
    assert_eq!(web, vec![2]);
    Ok(())
}

#[test]
fn missing_catalog_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let err = TomlCatalogSource::new(&path).load().unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"));
}

#[test]
fn builtin_catalog_has_five_projects() {
    assert_eq!(BuiltinCatalog.load().unwrap().len(), 5);
}

#[test]
fn simulated_viewport_drives_scroll_tracker() {
    let sections = site_sections();
    let ids: Vec<SectionId> = sections.iter().map(|s| s.id.clone()).collect();
    let viewport = SimulatedViewport::new(PageLayout::stacked(&ids, 1000));
    let mut tracker = ScrollTracker::new(sections, ScrollTrackerConfig::default());

    let at = |y: u32, tracker: &mut ScrollTracker| {
        viewport.scroll_to(y);
        tracker.on_scroll_or_resize(&viewport.measure())
    };

    assert_eq!(at(0, &mut tracker).active_section, Some(SectionId::from("home")));
    assert_eq!(at(950, &mut tracker).active_section, Some(SectionId::from("experience")));
    let bottom = at(3000, &mut tracker);
    assert_eq!(bottom.active_section, Some(SectionId::from("contact")));
    assert_eq!(bottom.progress_percent, 100.0);
}
