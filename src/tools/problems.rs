use super::ProblemRecommender;
use crate::config::ProblemCatalog;
use crate::models::Difficulty;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub topic: String,
    pub difficulty: String,
}

impl Problem {
    pub fn new(name: &str, topic: &str, difficulty: &str) -> Self {
        Self {
            name: name.to_string(),
            topic: topic.to_string(),
            difficulty: difficulty.to_string(),
        }
    }
}

pub struct ProblemCatalogTool {
    catalog: ProblemCatalog,
}

impl ProblemCatalogTool {
    pub fn new(catalog: ProblemCatalog) -> Self {
        info!("DSA problem recommender initialized");
        Self { catalog }
    }
}

impl ProblemRecommender for ProblemCatalogTool {
    fn name(&self) -> &str {
        "problems"
    }

    fn recommend(&self, level: Difficulty, topic: Option<&str>) -> Result<Vec<Problem>> {
        let problems: Vec<Problem> = self.catalog.for_level(level)
            .iter()
            .filter(|problem| match topic {
                Some(topic) => problem.topic.to_lowercase() == topic.to_lowercase(),
                None => true,
            })
            .cloned()
            .collect();

        info!("📚 Recommended {} problems for level: {}", problems.len(), level);
        Ok(problems)
    }
}
