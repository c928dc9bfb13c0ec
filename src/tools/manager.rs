use super::{
    DocumentAnalyzer, ProblemCatalogTool, ProblemRecommender, ResourceCatalogTool, ResourceRecommender,
    ResumeAnalyzerTool, SchedulePlanner, StudyPlannerTool,
};
use crate::config::Catalog;
use std::sync::Arc;
use tracing::info;

/// The four responders the coordinator dispatches to.
pub struct ResponderSet {
    pub problems: Arc<dyn ProblemRecommender>,
    pub resume: Arc<dyn DocumentAnalyzer>,
    pub resources: Arc<dyn ResourceRecommender>,
    pub planner: Arc<dyn SchedulePlanner>,
}

impl ResponderSet {
    /// Catalog-backed default responders.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let set = Self {
            problems: Arc::new(ProblemCatalogTool::new(catalog.problems.clone())),
            resume: Arc::new(ResumeAnalyzerTool::new(catalog.ats_keywords.clone())),
            resources: Arc::new(ResourceCatalogTool::new(catalog.resources.clone())),
            planner: Arc::new(StudyPlannerTool::new()),
        };
        info!("🔧 Responders ready: {}", set.names().join(", "));
        set
    }

    pub fn with_problems(mut self, responder: impl ProblemRecommender + 'static) -> Self {
        self.problems = Arc::new(responder);
        self
    }

    pub fn with_resume(mut self, responder: impl DocumentAnalyzer + 'static) -> Self {
        self.resume = Arc::new(responder);
        self
    }

    pub fn with_resources(mut self, responder: impl ResourceRecommender + 'static) -> Self {
        self.resources = Arc::new(responder);
        self
    }

    pub fn with_planner(mut self, responder: impl SchedulePlanner + 'static) -> Self {
        self.planner = Arc::new(responder);
        self
    }

    pub fn names(&self) -> Vec<&str> {
        vec![
            self.problems.name(),
            self.resume.name(),
            self.resources.name(),
            self.planner.name(),
        ]
    }
}

impl Default for ResponderSet {
    fn default() -> Self {
        Self::from_catalog(&Catalog::default())
    }
}

impl std::fmt::Debug for ResponderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponderSet")
            .field("responders", &self.names())
            .finish()
    }
}
