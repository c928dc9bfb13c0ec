use crate::models::{Category, Difficulty};

/// One (category -> keyword set) routing rule. A rule matches when any of
/// its keywords occurs as a substring of the lower-cased query.
#[derive(Debug, Clone, Copy)]
pub struct RoutingRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl RoutingRule {
    /// `query_lower` must already be lower-cased.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.keywords.iter().any(|keyword| query_lower.contains(keyword))
    }
}

/// Evaluation order is significant: problem, document, resource, plan.
pub const ROUTING_RULES: [RoutingRule; 4] = [
    RoutingRule { category: Category::Problem, keywords: &["problem", "dsa", "algorithm"] },
    RoutingRule { category: Category::Document, keywords: &["resume", "cv", "ats"] },
    RoutingRule { category: Category::Resource, keywords: &["learn", "resource", "study material"] },
    RoutingRule { category: Category::Plan, keywords: &["plan", "schedule", "weeks"] },
];

/// Lower-cased view of a query, shared by every rule.
#[derive(Debug, Clone)]
pub struct ClassifiedQuery {
    pub normalized: String,
    pub categories: Vec<Category>,
}

pub struct QueryClassifier {
    rules: Vec<RoutingRule>,
}

impl QueryClassifier {
    pub fn new() -> Self {
        Self { rules: ROUTING_RULES.to_vec() }
    }

    pub fn rules(&self) -> &[RoutingRule] {
        &self.rules
    }

    /// All matching categories, in rule order.
    pub fn classify(&self, query: &str) -> ClassifiedQuery {
        let normalized = query.to_lowercase();
        let categories = self.rules.iter()
            .filter(|rule| rule.matches(&normalized))
            .map(|rule| rule.category)
            .collect();

        ClassifiedQuery { normalized, categories }
    }

    /// "easy" wins over "hard"; neither yields `default`.
    pub fn resolve_difficulty(query_lower: &str, default: Difficulty) -> Difficulty {
        if query_lower.contains("easy") {
            Difficulty::Easy
        } else if query_lower.contains("hard") {
            Difficulty::Hard
        } else {
            default
        }
    }
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::new()
    }
}
