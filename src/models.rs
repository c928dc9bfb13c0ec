use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use crate::tools::{DocumentAnalysis, Problem, Resource, StudyPlan};

/// Ordered string -> scalar mapping used for profiles, preferences and
/// activity details.
pub type Profile = IndexMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Query classification. Serializes as the key used in `QueryResult::results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "dsa_recommendations")]
    Problem,
    #[serde(rename = "resume_analysis")]
    Document,
    #[serde(rename = "learning_resources")]
    Resource,
    #[serde(rename = "study_plan")]
    Plan,
}

impl Category {
    pub fn key(&self) -> &'static str {
        match self {
            Category::Problem => "dsa_recommendations",
            Category::Document => "resume_analysis",
            Category::Resource => "learning_resources",
            Category::Plan => "study_plan",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub kind: String,
    pub details: Profile,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub id: String,
    pub profile: Profile,
    pub activity_log: Vec<ActivityRecord>,
    pub preferences: Profile,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub user_id: String,
    pub query: String,
    /// Document text for the resume analyzer. Falls back to the configured
    /// placeholder when absent.
    pub document: Option<String>,
}

impl QueryRequest {
    pub fn new(user_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            query: query.into(),
            document: None,
        }
    }

    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }
}

/// Output of one responder, keyed by `Category` in the aggregate result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponderOutput {
    Problems(Vec<Problem>),
    Document(DocumentAnalysis),
    Resources(Vec<Resource>),
    Plan(StudyPlan),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub user_id: String,
    pub query: String,
    pub results: IndexMap<Category, ResponderOutput>,
    pub summary: String,
    /// Whether the activity record landed in an existing session.
    pub recorded: bool,
}

impl QueryResult {
    pub fn problems(&self) -> Option<&[Problem]> {
        match self.results.get(&Category::Problem) {
            Some(ResponderOutput::Problems(problems)) => Some(problems.as_slice()),
            _ => None,
        }
    }

    pub fn document_analysis(&self) -> Option<&DocumentAnalysis> {
        match self.results.get(&Category::Document) {
            Some(ResponderOutput::Document(analysis)) => Some(analysis),
            _ => None,
        }
    }

    pub fn resources(&self) -> Option<&[Resource]> {
        match self.results.get(&Category::Resource) {
            Some(ResponderOutput::Resources(resources)) => Some(resources.as_slice()),
            _ => None,
        }
    }

    pub fn study_plan(&self) -> Option<&StudyPlan> {
        match self.results.get(&Category::Plan) {
            Some(ResponderOutput::Plan(plan)) => Some(plan),
            _ => None,
        }
    }
}
