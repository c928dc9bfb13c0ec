use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

use career_assist::agent::Coordinator;
use career_assist::config::Config;
use career_assist::models::{Profile, QueryRequest};

const DEMO_USER: &str = "student_001";
const DEMO_QUERY: &str = "I have an interview in 3 weeks. Can you help me prepare?";

#[derive(Parser)]
#[command(name = "career-assist")]
#[command(about = "Routes student career questions to specialist responders")]
struct Args {
    #[arg(short, long, default_value = DEMO_USER, help = "User id to register and query as")]
    user: String,

    #[arg(short, long, default_value = DEMO_QUERY, help = "Query text")]
    query: String,

    #[arg(short, long, help = "Resume file to analyze instead of the placeholder text")]
    document: Option<PathBuf>,

    #[arg(short, long, help = "Config file (defaults to ./config.toml)")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Verbose output")]
    verbose: bool,
}

fn demo_profile() -> Profile {
    let mut profile = Profile::new();
    profile.insert("name".to_string(), json!("Sai Ganesh"));
    profile.insert("year".to_string(), json!("3rd Year"));
    profile.insert("major".to_string(), json!("CS/AI-ML"));
    profile
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            config.logging.max_level()
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    println!("\n{}", "=".repeat(80));
    println!("🚀 STUDENT CAREER ASSISTANT");
    println!("{}", "=".repeat(80));

    info!("Starting career assistant...");
    let mut coordinator = Coordinator::new(config);
    println!("\n✅ All responders initialized successfully!");

    coordinator.register_user(&args.user, demo_profile());

    let mut request = QueryRequest::new(args.user.as_str(), args.query.as_str());
    if let Some(path) = &args.document {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document {}", path.display()))?;
        request = request.with_document(text);
    }

    let result = coordinator.process_request(request);

    println!("\n\n📋 Query: {}", result.query);
    println!("\n🎯 Results:");
    println!("{}", serde_json::to_string_pretty(&result.results)?);
    println!("\n{}\n", "=".repeat(80));

    Ok(())
}
