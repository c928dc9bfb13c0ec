//! # career-assist - student career query router
//!
//! A small orchestration layer that routes a free-text student query to
//! specialist responders and keeps a per-user activity history.
//!
//! ## Features
//!
//! - Keyword routing to four responders (problems, resume, resources, plans)
//! - In-memory session store with an append-only activity log
//! - Catalogs injected from configuration
//!
//! ## Usage
//!
//! ```rust,no_run
//! use career_assist::{agent::Coordinator, config::Config};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let mut coordinator = Coordinator::new(config);
//!
//!     coordinator.register_user("student_001", Default::default());
//!     let result = coordinator.process_query("student_001", "easy dsa problems");
//!     println!("{}", serde_json::to_string_pretty(&result.results)?);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod config;
pub mod models;
pub mod tools;
pub mod utils;

// Re-export commonly used types for convenience
pub use agent::{Coordinator, SessionStore};
pub use config::{Catalog, Config, RouterConfig};
pub use models::{ActivityRecord, Category, Difficulty, QueryRequest, QueryResult, UserSession};
pub use tools::ResponderSet;
