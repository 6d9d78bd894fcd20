//! The raw (pre-enrichment) response shape the completion service must
//! produce. Derived fields are absent (the enricher computes them), and
//! job opportunities arrive as plain strings because the deterministic
//! generator replaces them wholesale.
//!
//! The strict JSON Schema sent to the completion service is derived from
//! these types; `deny_unknown_fields` keeps local deserialization equally
//! strict.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::evaluation::Seniority;

fn default_timeline_text() -> String {
    "4-6 months".to_string()
}

fn default_min_months() -> i64 {
    4
}

fn default_max_months() -> i64 {
    6
}

fn default_key_gap() -> String {
    "Skill development needed".to_string()
}

fn default_confidence() -> String {
    "medium".to_string()
}

fn default_icon() -> String {
    "lightbulb".to_string()
}

fn default_title() -> String {
    "Your Current Profile".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RecommendedRoleRaw {
    pub title: String,
    pub seniority: Seniority,
    pub reason: String,
    #[serde(default = "default_timeline_text")]
    pub timeline_text: String,
    #[serde(default = "default_min_months")]
    #[schemars(range(min = 1, max = 24))]
    pub min_months: i64,
    #[serde(default = "default_max_months")]
    #[schemars(range(min = 1, max = 24))]
    pub max_months: i64,
    #[serde(default = "default_key_gap")]
    pub key_gap: String,
    #[serde(default)]
    pub milestones: Vec<String>,
    #[serde(default = "default_confidence")]
    pub confidence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CurrentProfileKeyStatRaw {
    pub label: String,
    pub value: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CurrentProfileSummaryRaw {
    #[serde(default = "default_title")]
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub key_stats: Vec<CurrentProfileKeyStatRaw>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SkillAnalysisRaw {
    pub strengths: Vec<String>,
    pub areas_to_develop: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ExperienceBenchmarkRaw {
    pub your_experience_years: String,
    pub typical_for_target_role_years: String,
    pub gap_analysis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InterviewReadinessRaw {
    #[schemars(range(min = 0, max = 100))]
    pub technical_interview_percent: i64,
    #[schemars(range(min = 0, max = 100))]
    pub hr_behavioral_percent: i64,
    pub technical_notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct QuickWinRaw {
    pub title: String,
    pub description: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PeerComparisonMetricsRaw {
    #[schemars(range(min = 0, max = 100))]
    pub profile_strength_percent: i64,
    #[schemars(range(min = 0, max = 100))]
    pub better_than_peers_percent: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PeerComparisonRaw {
    pub percentile: i64,
    pub summary: String,
    pub metrics: PeerComparisonMetricsRaw,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SuccessLikelihoodRaw {
    pub score_percent: i64,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProfileEvaluationRaw {
    #[schemars(range(min = 0, max = 100))]
    pub profile_strength_score: i64,
    pub profile_strength_notes: String,
    pub current_profile: CurrentProfileSummaryRaw,
    pub skill_analysis: SkillAnalysisRaw,
    pub recommended_tools: Vec<String>,
    pub experience_benchmark: ExperienceBenchmarkRaw,
    pub interview_readiness: InterviewReadinessRaw,
    pub peer_comparison: PeerComparisonRaw,
    pub success_likelihood: SuccessLikelihoodRaw,
    pub quick_wins: Vec<QuickWinRaw>,
    #[serde(default)]
    pub opportunities_you_qualify_for: Vec<String>,
    pub recommended_roles_based_on_interests: Vec<RecommendedRoleRaw>,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EvaluationResponseRaw {
    pub profile_evaluation: ProfileEvaluationRaw,
}
