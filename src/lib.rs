//! Portfolio site engine.
//!
//! Library half of the `portfolio` binary: bootstrap, CLI definition and the
//! command handlers that render use-case results as text or JSON.

pub mod bootstrap;
pub mod cli;
pub mod commands;

use std::sync::Arc;

use anyhow::Context;
use pf_app::App;
use pf_core::section::site_sections;
use pf_core::contact::ContactFormPayload;
use pf_core::SectionId;
use pf_infra::{PageLayout, SimulatedViewport};
use tracing::info_span;

use crate::bootstrap::{resolve_config, settings_from_env, wire_dependencies};
use crate::cli::{Cli, Commands};

const DEFAULT_VIEWPORT_HEIGHT: u32 = 900;

fn stacked_site_layout(viewport_height: u32) -> PageLayout {
    let ids: Vec<SectionId> = site_sections().into_iter().map(|s| s.id).collect();
    PageLayout::stacked(&ids, viewport_height)
}

fn read_layout(path: &std::path::Path) -> anyhow::Result<PageLayout> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
    PageLayout::from_toml_str(&content)
        .with_context(|| format!("Invalid layout file: {}", path.display()))
}

struct Runtime {
    app: App,
    viewport: SimulatedViewport,
    layout: PageLayout,
}

fn build_runtime(cli: &Cli) -> anyhow::Result<Runtime> {
    let _span = info_span!("cli.bootstrap").entered();

    let config = resolve_config(cli.config.as_deref())?;
    let settings = settings_from_env(&config);

    let layout = match &cli.command {
        Commands::Scroll {
            layout: Some(path), ..
        } => read_layout(path)?,
        Commands::Scroll {
            viewport_height, ..
        } => stacked_site_layout(*viewport_height),
        _ => stacked_site_layout(DEFAULT_VIEWPORT_HEIGHT),
    };
    let viewport = SimulatedViewport::new(layout.clone());

    let deps = wire_dependencies(&config, &settings, Arc::new(viewport.clone()))?;
    Ok(Runtime {
        app: App::new(deps, settings)?,
        viewport,
        layout,
    })
}

/// Run one CLI command and return what should be printed.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let Runtime {
        app,
        viewport,
        layout,
    } = build_runtime(&cli)?;

    match cli.command {
        Commands::Projects { filter, view, json } => commands::projects::list(&app, &filter, &view, json),
        Commands::TechStack { json } => commands::projects::tech_stack(&app, json),
        Commands::Experience { json } => commands::experience::show(json),
        Commands::Scroll { at, goto, json, .. } => {
            commands::scroll::replay(&app, &viewport, &layout, &at, goto.as_deref(), json).await
        }
        Commands::Contact {
            name,
            email,
            subject,
            message,
            json,
        } => {
            let payload = ContactFormPayload::new(name, email, subject, message);
            commands::contact::submit(&app, payload, json).await
        }
    }
}
