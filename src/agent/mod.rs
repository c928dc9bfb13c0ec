pub mod core;
pub mod memory;
pub mod query;

pub use self::core::{Coordinator, QUERY_ACTIVITY};
pub use memory::SessionStore;
pub use query::{ClassifiedQuery, QueryClassifier, RoutingRule, ROUTING_RULES};
