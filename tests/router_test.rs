use anyhow::{Result, anyhow};
use career_assist::agent::{Coordinator, QUERY_ACTIVITY};
use career_assist::config::{Config, RouterConfig};
use career_assist::models::{Category, Profile, QueryRequest};
use career_assist::tools::{ResponderSet, SchedulePlanner, StudyPlan};
use serde_json::json;

const SUMMARY: &str = "Here are your personalized recommendations.";

fn coordinator_with_user(user_id: &str) -> Coordinator {
    let mut coordinator = Coordinator::new(Config::default());
    let mut profile = Profile::new();
    profile.insert("name".to_string(), json!("Sai Ganesh"));
    coordinator.register_user(user_id, profile);
    coordinator
}

fn log_len(coordinator: &Coordinator, user_id: &str) -> usize {
    coordinator.get_context(user_id).map(|s| s.activity_log.len()).unwrap_or(0)
}

#[test]
fn test_easy_dsa_problems_scenario() {
    let mut coordinator = coordinator_with_user("u1");
    let result = coordinator.process_query("u1", "I need easy DSA problems");

    let problems = result.problems().expect("dsa_recommendations present");
    assert!(!problems.is_empty());
    assert!(problems.iter().all(|p| p.difficulty == "Easy"));
    assert_eq!(result.results.len(), 1);
}

#[test]
fn test_no_match_scenario() {
    let mut coordinator = coordinator_with_user("u1");
    let result = coordinator.process_query("u1", "help me study");

    assert!(result.results.is_empty());
    assert_eq!(result.summary, SUMMARY);
    assert!(result.recorded);
    assert_eq!(log_len(&coordinator, "u1"), 1);
}

#[test]
fn test_problem_key_iff_keyword_present() {
    let mut coordinator = coordinator_with_user("u1");
    let cases = [
        ("Show me a PROBLEM", true),
        ("dsa", true),
        ("Algorithm practice", true),
        ("review my resume", false),
        ("", false),
    ];

    for (query, expected) in cases {
        let result = coordinator.process_query("u1", query);
        assert_eq!(
            result.results.contains_key(&Category::Problem),
            expected,
            "unexpected routing for: {}",
            query
        );
    }
}

#[test]
fn test_difficulty_resolution() {
    let mut coordinator = coordinator_with_user("u1");

    let hard = coordinator.process_query("u1", "hard algorithm questions");
    assert!(hard.problems().unwrap().iter().all(|p| p.difficulty == "Hard"));

    let medium = coordinator.process_query("u1", "algorithm questions");
    assert!(medium.problems().unwrap().iter().all(|p| p.difficulty == "Medium"));

    let both = coordinator.process_query("u1", "easy or hard dsa");
    assert!(both.problems().unwrap().iter().all(|p| p.difficulty == "Easy"));
}

#[test]
fn test_exactly_one_record_per_query() {
    let mut coordinator = coordinator_with_user("u1");

    coordinator.process_query("u1", "nothing relevant here");
    assert_eq!(log_len(&coordinator, "u1"), 1);

    coordinator.process_query("u1", "dsa please");
    assert_eq!(log_len(&coordinator, "u1"), 2);

    let all = coordinator.process_query("u1", "dsa, resume, learn and plan");
    assert_eq!(all.results.len(), 4);
    assert_eq!(log_len(&coordinator, "u1"), 3);

    let record = coordinator.get_context("u1").unwrap().activity_log.last().unwrap();
    assert_eq!(record.kind, QUERY_ACTIVITY);
    assert_eq!(record.details["question"], json!("dsa, resume, learn and plan"));
    assert!(record.details.contains_key("timestamp"));
    assert_eq!(
        record.details["categories"],
        json!(["dsa_recommendations", "resume_analysis", "learning_resources", "study_plan"])
    );
}

#[test]
fn test_unknown_user_still_gets_result() {
    let mut coordinator = coordinator_with_user("u1");
    let result = coordinator.process_query("ghost", "easy dsa");

    assert_eq!(result.user_id, "ghost");
    assert!(result.problems().is_some());
    assert_eq!(result.summary, SUMMARY);
    assert!(!result.recorded);
    assert!(coordinator.get_context("ghost").is_none());
    assert_eq!(coordinator.sessions().len(), 1);
}

#[test]
fn test_results_keep_rule_order() {
    let mut coordinator = coordinator_with_user("u1");
    let result = coordinator.process_query("u1", "weekly schedule, cv tips, algorithm, resource list");

    let keys: Vec<Category> = result.results.keys().copied().collect();
    assert_eq!(keys, vec![Category::Problem, Category::Document, Category::Resource, Category::Plan]);

    let json = serde_json::to_value(&result.results).unwrap();
    let names: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert!(names.iter().any(|k| *k == "study_plan"));
}

#[test]
fn test_demo_query_routes_to_plan_only() {
    let mut coordinator = coordinator_with_user("student_001");
    let result = coordinator.process_query(
        "student_001",
        "I have an interview in 3 weeks. Can you help me prepare?",
    );

    assert_eq!(result.results.len(), 1);
    let plan = result.study_plan().expect("study_plan present");
    // "3 weeks" in the text is not parsed
    assert_eq!(plan.duration, "4 weeks");
    assert_eq!(plan.daily_commitment, "4 hours/day");
    let focus: Vec<&str> = plan.weekly_schedule.iter().map(|w| w.focus.as_str()).collect();
    assert_eq!(focus, vec!["DSA", "System Design", "DSA", "System Design"]);
}

#[test]
fn test_resource_route_uses_fixed_topic() {
    let mut coordinator = coordinator_with_user("u1");
    let result = coordinator.process_query("u1", "I want to learn system design");

    let resources = result.resources().unwrap();
    let titles: Vec<&str> = resources.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["LeetCode Patterns", "Neetcode.io"]);
}

#[test]
fn test_document_route_uses_supplied_text() {
    let mut coordinator = coordinator_with_user("u1");

    let placeholder = coordinator.process_query("u1", "check my resume");
    let analysis = placeholder.document_analysis().unwrap();
    assert_eq!(analysis.ats_score, 20);

    let request = QueryRequest::new("u1", "check my resume")
        .with_document("Developed services in Python and SQL on AWS with Docker");
    let supplied = coordinator.process_request(request);
    let analysis = supplied.document_analysis().unwrap();
    assert_eq!(analysis.keyword_analysis.technical_skills, vec!["python", "sql", "aws", "docker"]);
    assert_eq!(analysis.ats_score, 40);
}

struct BrokenPlanner;

impl SchedulePlanner for BrokenPlanner {
    fn name(&self) -> &str {
        "broken"
    }

    fn create_plan(&self, _weeks: u32, _focus_areas: &[String], _hours_per_day: Option<u32>) -> Result<StudyPlan> {
        Err(anyhow!("planner offline"))
    }
}

#[test]
fn test_failing_responder_is_omitted() {
    let responders = ResponderSet::default().with_planner(BrokenPlanner);
    let mut coordinator = Coordinator::with_responders(RouterConfig::default(), responders);
    coordinator.register_user("u1", Profile::new());

    let result = coordinator.process_query("u1", "plan my dsa prep");

    assert!(result.results.contains_key(&Category::Problem));
    assert!(!result.results.contains_key(&Category::Plan));
    assert!(result.recorded);
    let record = coordinator.get_context("u1").unwrap().activity_log.last().unwrap();
    assert_eq!(record.details["categories"], json!(["dsa_recommendations"]));
}

#[test]
fn test_custom_summary_is_constant() {
    let router = RouterConfig {
        summary: "Good luck!".to_string(),
        ..RouterConfig::default()
    };
    let mut coordinator = Coordinator::with_responders(router, ResponderSet::default());

    assert_eq!(coordinator.process_query("u1", "dsa").summary, "Good luck!");
    assert_eq!(coordinator.process_query("u1", "nothing").summary, "Good luck!");
}
