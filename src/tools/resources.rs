use super::ResourceRecommender;
use crate::config::ResourceCatalog;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Difficulty label that matches every requested level.
pub const ALL_LEVELS: &str = "All levels";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
}

impl Resource {
    pub fn new(title: &str, kind: &str, difficulty: &str) -> Self {
        Self {
            title: title.to_string(),
            kind: kind.to_string(),
            difficulty: difficulty.to_string(),
        }
    }
}

pub struct ResourceCatalogTool {
    catalog: ResourceCatalog,
}

impl ResourceCatalogTool {
    pub fn new(catalog: ResourceCatalog) -> Self {
        info!("Learning resource recommender initialized");
        Self { catalog }
    }

    /// "System Design" -> "system_design"
    pub fn normalize_topic(topic: &str) -> String {
        topic.to_lowercase().replace(' ', "_")
    }
}

impl ResourceRecommender for ResourceCatalogTool {
    fn name(&self) -> &str {
        "resources"
    }

    fn recommend(&self, topic: &str, level: Option<&str>) -> Result<Vec<Resource>> {
        let key = Self::normalize_topic(topic);
        let resources: Vec<Resource> = self.catalog.get(&key)
            .map(|entries| {
                entries.iter()
                    .filter(|resource| match level {
                        Some(level) if !level.eq_ignore_ascii_case(ALL_LEVELS) => {
                            resource.difficulty.eq_ignore_ascii_case(level)
                                || resource.difficulty.eq_ignore_ascii_case(ALL_LEVELS)
                        }
                        _ => true,
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        info!("🎓 Recommended {} resources for {}", resources.len(), topic);
        Ok(resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_topic() {
        assert_eq!(ResourceCatalogTool::normalize_topic("System Design"), "system_design");
        assert_eq!(ResourceCatalogTool::normalize_topic("DSA"), "dsa");
    }
}
