use pf_core::filter::ProjectFilterEngine;

/// Use case for the deduplicated, sorted technology list.
pub struct GetTechStack {
    engine: ProjectFilterEngine,
}

impl GetTechStack {
    pub fn new(engine: ProjectFilterEngine) -> Self {
        Self { engine }
    }

    pub fn execute(&self) -> Vec<String> {
        self.engine.tech_stack()
    }
}
