use super::SchedulePlanner;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_HOURS_PER_DAY: u32 = 4;

const WEEKLY_ACTIVITIES: [&str; 3] = ["Practice coding problems", "Mock interviews", "Resume review"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week: u32,
    pub focus: String,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub duration: String,
    pub daily_commitment: String,
    pub weekly_schedule: Vec<WeekPlan>,
    pub milestones: Vec<String>,
}

pub struct StudyPlannerTool;

impl StudyPlannerTool {
    pub fn new() -> Self {
        info!("Study planner initialized");
        Self
    }
}

impl Default for StudyPlannerTool {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulePlanner for StudyPlannerTool {
    fn name(&self) -> &str {
        "planner"
    }

    fn create_plan(&self, weeks: u32, focus_areas: &[String], hours_per_day: Option<u32>) -> Result<StudyPlan> {
        if weeks == 0 {
            return Err(anyhow!("A study plan needs at least one week"));
        }
        if focus_areas.is_empty() {
            return Err(anyhow!("A study plan needs at least one focus area"));
        }

        let hours = hours_per_day.unwrap_or(DEFAULT_HOURS_PER_DAY);

        // Focus areas rotate round-robin across weeks.
        let weekly_schedule = (1..=weeks)
            .map(|week| WeekPlan {
                week,
                focus: focus_areas[(week as usize - 1) % focus_areas.len()].clone(),
                activities: WEEKLY_ACTIVITIES.iter().map(|a| a.to_string()).collect(),
            })
            .collect();

        info!("🗓️  Created {}-week study plan", weeks);

        Ok(StudyPlan {
            duration: format!("{} weeks", weeks),
            daily_commitment: format!("{} hours/day", hours),
            weekly_schedule,
            milestones: Vec::new(),
        })
    }
}
