pub mod problems;
pub mod resume;
pub mod resources;
pub mod planner;
pub mod manager;

use anyhow::Result;

use crate::models::Difficulty;

pub use problems::{Problem, ProblemCatalogTool};
pub use resume::{AtsKeywords, DocumentAnalysis, KeywordAnalysis, ResumeAnalyzerTool};
pub use resources::{Resource, ResourceCatalogTool};
pub use planner::{StudyPlan, StudyPlannerTool, WeekPlan};
pub use manager::ResponderSet;

/// Recommends practice problems for a difficulty level.
pub trait ProblemRecommender {
    fn name(&self) -> &str;
    fn recommend(&self, level: Difficulty, topic: Option<&str>) -> Result<Vec<Problem>>;
}

/// Scores a resume-like document against a skill vocabulary.
pub trait DocumentAnalyzer {
    fn name(&self) -> &str;
    fn analyze(&self, text: &str, target_role: Option<&str>) -> Result<DocumentAnalysis>;
}

/// Looks up learning resources for a topic.
pub trait ResourceRecommender {
    fn name(&self) -> &str;
    fn recommend(&self, topic: &str, level: Option<&str>) -> Result<Vec<Resource>>;
}

/// Builds a week-by-week study schedule.
pub trait SchedulePlanner {
    fn name(&self) -> &str;
    fn create_plan(&self, weeks: u32, focus_areas: &[String], hours_per_day: Option<u32>) -> Result<StudyPlan>;
}
