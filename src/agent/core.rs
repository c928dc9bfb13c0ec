use crate::agent::memory::SessionStore;
use crate::agent::query::QueryClassifier;
use crate::config::{Config, RouterConfig};
use crate::models::{Category, Profile, QueryRequest, QueryResult, ResponderOutput, UserSession};
use crate::tools::ResponderSet;
use anyhow::Result;
use chrono::Utc;
use indexmap::IndexMap;
use serde_json::json;
use tracing::{debug, info, warn};

pub const QUERY_ACTIVITY: &str = "query";

/// Routes queries to the responders and records each one in the session store.
pub struct Coordinator {
    sessions: SessionStore,
    responders: ResponderSet,
    classifier: QueryClassifier,
    router: RouterConfig,
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("sessions", &self.sessions.len())
            .field("responders", &self.responders)
            .field("router", &self.router)
            .finish()
    }
}

impl Coordinator {
    /// Builds catalog-backed responders from `config`.
    pub fn new(config: Config) -> Self {
        let responders = ResponderSet::from_catalog(&config.catalog);
        Self::with_responders(config.router, responders)
    }

    pub fn with_responders(router: RouterConfig, responders: ResponderSet) -> Self {
        info!("Coordinator initialized with responders: {}", responders.names().join(", "));
        Self {
            sessions: SessionStore::new(),
            responders,
            classifier: QueryClassifier::new(),
            router,
        }
    }

    // Session store delegation
    pub fn register_user(&mut self, user_id: &str, profile: Profile) {
        self.sessions.create_session(user_id, profile);
    }

    pub fn replace_profile(&mut self, user_id: &str, profile: Profile) -> bool {
        self.sessions.replace_profile(user_id, profile)
    }

    pub fn get_context(&self, user_id: &str) -> Option<&UserSession> {
        self.sessions.get_context(user_id)
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn process_query(&mut self, user_id: &str, query: &str) -> QueryResult {
        self.process_request(QueryRequest::new(user_id, query))
    }

    pub fn process_request(&mut self, request: QueryRequest) -> QueryResult {
        info!("Processing query for user {}", request.user_id);

        // Context is fetched for observability only; no responder reads it.
        match self.sessions.get_context(&request.user_id) {
            Some(session) => debug!(
                "Session context: {} profile fields, {} activities",
                session.profile.len(),
                session.activity_log.len()
            ),
            None => debug!("No session context for {}", request.user_id),
        }

        let classified = self.classifier.classify(&request.query);
        let mut results = IndexMap::new();

        for category in &classified.categories {
            debug!("🎯 Routing to {}", category);
            match self.dispatch(*category, &classified.normalized, &request) {
                Ok(output) => {
                    results.insert(*category, output);
                }
                Err(e) => warn!("❌ {} responder failed: {}", category, e),
            }
        }

        let categories: Vec<&str> = results.keys().map(|c| c.key()).collect();
        let mut details = Profile::new();
        details.insert("question".to_string(), json!(request.query));
        details.insert("timestamp".to_string(), json!(Utc::now().to_rfc3339()));
        details.insert("categories".to_string(), json!(categories));

        let recorded = self.sessions.record_activity(&request.user_id, QUERY_ACTIVITY, details);

        QueryResult {
            user_id: request.user_id,
            query: request.query,
            results,
            summary: self.router.summary.clone(),
            recorded,
        }
    }

    fn dispatch(&self, category: Category, query_lower: &str, request: &QueryRequest) -> Result<ResponderOutput> {
        match category {
            Category::Problem => {
                let level = QueryClassifier::resolve_difficulty(query_lower, self.router.default_difficulty);
                let problems = self.responders.problems.recommend(level, None)?;
                Ok(ResponderOutput::Problems(problems))
            }
            Category::Document => {
                let text = match request.document.as_deref() {
                    Some(document) => document,
                    None => {
                        warn!("⚠️  No document supplied, analyzing placeholder text");
                        self.router.placeholder_document.as_str()
                    }
                };
                let analysis = self.responders.resume.analyze(text, None)?;
                Ok(ResponderOutput::Document(analysis))
            }
            Category::Resource => {
                let resources = self.responders.resources.recommend(&self.router.resource_topic, None)?;
                Ok(ResponderOutput::Resources(resources))
            }
            Category::Plan => {
                let plan = self.responders.planner.create_plan(
                    self.router.plan_weeks,
                    &self.router.plan_focus_areas,
                    self.router.hours_per_day,
                )?;
                Ok(ResponderOutput::Plan(plan))
            }
        }
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
