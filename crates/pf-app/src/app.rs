//! The application runtime: resolved settings plus use-case factories.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use pf_core::contact::MailIdentity;
use pf_core::filter::ProjectFilterEngine;
use pf_core::scroll::ScrollTrackerConfig;
use pf_core::section::{site_sections, Section};
use tracing::info;

use crate::deps::AppDeps;
use crate::usecases::{
    ContactFormSession, GetTechStack, ListProjects, SubmitContactForm, TrackScroll,
};

/// Settings after policy (defaults, env overrides) has been applied.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub mail_identity: MailIdentity,
    pub mail_timeout: Duration,
    pub scroll: ScrollTrackerConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            mail_identity: MailIdentity::default(),
            mail_timeout: SubmitContactForm::DEFAULT_TIMEOUT,
            scroll: ScrollTrackerConfig::default(),
        }
    }
}

pub struct App {
    deps: AppDeps,
    settings: AppSettings,
    sections: Vec<Section>,
    engine: ProjectFilterEngine,
}

impl App {
    /// Assemble the runtime. Loads the project catalog once.
    pub fn new(deps: AppDeps, settings: AppSettings) -> anyhow::Result<Self> {
        let catalog = deps.catalog.load().context("Failed to load project catalog")?;
        info!(projects = catalog.len(), "Project catalog loaded");

        Ok(Self {
            engine: ProjectFilterEngine::new(Arc::new(catalog)),
            sections: site_sections(),
            deps,
            settings,
        })
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn list_projects(&self) -> ListProjects {
        ListProjects::new(self.engine.clone())
    }

    pub fn get_tech_stack(&self) -> GetTechStack {
        GetTechStack::new(self.engine.clone())
    }

    pub fn track_scroll(&self) -> TrackScroll {
        TrackScroll::new(
            self.deps.viewport.clone(),
            self.sections.clone(),
            self.settings.scroll,
        )
    }

    pub fn submit_contact_form(&self) -> SubmitContactForm {
        SubmitContactForm::new(
            self.deps.mail.clone(),
            self.deps.clock.clone(),
            self.settings.mail_identity.clone(),
            self.settings.mail_timeout,
        )
    }

    /// One session per rendered form.
    pub fn contact_form_session(&self) -> ContactFormSession {
        ContactFormSession::new(Arc::new(self.submit_contact_form()))
    }
}
