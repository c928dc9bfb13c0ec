use super::DocumentAnalyzer;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

const DEFAULT_TARGET_ROLE: &str = "Software Engineer";
const BASE_SCORE: u32 = 20;
const POINTS_PER_SKILL: u32 = 5;
const MAX_SCORE: u32 = 100;
/// Below this many technical skills the analysis suggests adding more.
const MIN_TECHNICAL_SKILLS: usize = 5;

/// Vocabularies matched (as lower-case substrings) against a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsKeywords {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub action_verbs: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for AtsKeywords {
    fn default() -> Self {
        Self {
            technical_skills: words(&["python", "java", "c++", "javascript", "sql", "react", "aws", "docker", "kubernetes"]),
            soft_skills: words(&["leadership", "communication", "teamwork", "problem-solving", "analytical"]),
            action_verbs: words(&["developed", "implemented", "designed", "optimized", "led", "managed", "created"]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub action_verbs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub ats_score: u32,
    pub keyword_analysis: KeywordAnalysis,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub target_role: String,
}

pub struct ResumeAnalyzerTool {
    keywords: AtsKeywords,
}

impl ResumeAnalyzerTool {
    pub fn new(keywords: AtsKeywords) -> Self {
        info!("Resume analyzer initialized");
        Self { keywords }
    }

    fn find_terms(vocabulary: &[String], text_lower: &str) -> Vec<String> {
        vocabulary.iter()
            .filter(|term| text_lower.contains(term.to_lowercase().as_str()))
            .cloned()
            .collect()
    }

    /// Monotonic in the number of technical skills, capped at 100.
    pub fn score(technical_skill_count: usize) -> u32 {
        let count = u32::try_from(technical_skill_count).unwrap_or(u32::MAX);
        count.saturating_mul(POINTS_PER_SKILL)
            .saturating_add(BASE_SCORE)
            .min(MAX_SCORE)
    }
}

impl DocumentAnalyzer for ResumeAnalyzerTool {
    fn name(&self) -> &str {
        "resume"
    }

    fn analyze(&self, text: &str, target_role: Option<&str>) -> Result<DocumentAnalysis> {
        let text_lower = text.to_lowercase();

        let keyword_analysis = KeywordAnalysis {
            technical_skills: Self::find_terms(&self.keywords.technical_skills, &text_lower),
            soft_skills: Self::find_terms(&self.keywords.soft_skills, &text_lower),
            action_verbs: Self::find_terms(&self.keywords.action_verbs, &text_lower),
        };

        let found = keyword_analysis.technical_skills.len();
        let mut strengths = Vec::new();
        if found > 0 {
            strengths.push(format!("Found {} relevant technical skills", found));
        }

        let mut suggestions = Vec::new();
        if found < MIN_TECHNICAL_SKILLS {
            suggestions.push("Add more technical skills relevant to the role".to_string());
        }

        let analysis = DocumentAnalysis {
            ats_score: Self::score(found),
            keyword_analysis,
            suggestions,
            strengths,
            target_role: target_role.unwrap_or(DEFAULT_TARGET_ROLE).to_string(),
        };

        info!("📄 Resume analyzed. ATS score: {}", analysis.ats_score);
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_capped() {
        assert_eq!(ResumeAnalyzerTool::score(0), 20);
        assert_eq!(ResumeAnalyzerTool::score(3), 35);
        assert_eq!(ResumeAnalyzerTool::score(16), 100);
        assert_eq!(ResumeAnalyzerTool::score(usize::MAX), 100);
    }
}
