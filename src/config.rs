use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::models::Difficulty;
use crate::tools::{AtsKeywords, Problem, Resource};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub router: RouterConfig,
    pub catalog: Catalog,
    pub logging: LoggingConfig,
}

/// Fixed inputs the coordinator hands to responders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub summary: String,
    pub default_difficulty: Difficulty,
    pub resource_topic: String,
    pub plan_weeks: u32,
    pub plan_focus_areas: Vec<String>,
    pub hours_per_day: Option<u32>,
    /// Demo-only stand-in used when a request carries no document.
    pub placeholder_document: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            summary: "Here are your personalized recommendations.".to_string(),
            default_difficulty: Difficulty::Medium,
            resource_topic: "dsa".to_string(),
            plan_weeks: 4,
            plan_focus_areas: vec!["DSA".to_string(), "System Design".to_string()],
            hours_per_day: None,
            placeholder_document: "Sample resume text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemCatalog {
    pub easy: Vec<Problem>,
    pub medium: Vec<Problem>,
    pub hard: Vec<Problem>,
}

impl ProblemCatalog {
    pub fn for_level(&self, level: Difficulty) -> &[Problem] {
        match level {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

impl Default for ProblemCatalog {
    fn default() -> Self {
        Self {
            easy: vec![
                Problem::new("Two Sum", "Array", "Easy"),
                Problem::new("Valid Parentheses", "Stack", "Easy"),
                Problem::new("Merge Two Sorted Lists", "Linked List", "Easy"),
            ],
            medium: vec![
                Problem::new("LRU Cache", "Design", "Medium"),
                Problem::new("Binary Tree Level Order", "Tree", "Medium"),
                Problem::new("Longest Substring", "String", "Medium"),
            ],
            hard: vec![
                Problem::new("Median of Two Sorted Arrays", "Binary Search", "Hard"),
                Problem::new("Word Ladder II", "Graph", "Hard"),
            ],
        }
    }
}

/// Resources keyed by normalized topic (`system_design`).
pub type ResourceCatalog = IndexMap<String, Vec<Resource>>;

fn default_resources() -> ResourceCatalog {
    let mut resources = IndexMap::new();
    resources.insert("dsa".to_string(), vec![
        Resource::new("LeetCode Patterns", "Practice", "Medium"),
        Resource::new("Neetcode.io", "Video + Practice", "All levels"),
    ]);
    resources.insert("system_design".to_string(), vec![
        Resource::new("System Design Primer (GitHub)", "Article", "Beginner"),
        Resource::new("ByteByteGo", "Video", "All levels"),
    ]);
    resources
}

/// Static reference data injected into the responders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub problems: ProblemCatalog,
    pub resources: ResourceCatalog,
    pub ats_keywords: AtsKeywords,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            problems: ProblemCatalog::default(),
            resources: default_resources(),
            ats_keywords: AtsKeywords::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Unknown level names fall back to INFO.
    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl Config {
    /// Loads `./config.toml`, then the per-user config file, otherwise defaults.
    pub fn load() -> Result<Self> {
        let local = std::env::current_dir()?.join(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::from_path(&local);
        }

        if let Some(user_config) = crate::utils::paths::user_config_file() {
            if user_config.exists() {
                return Self::from_path(&user_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
