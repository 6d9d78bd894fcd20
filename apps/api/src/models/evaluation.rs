//! The full (enriched) evaluation response — the shape returned to clients
//! and cached. Derived-status enums live here together with their ordered
//! threshold tables.
//!
//! `JsonSchema` derives feed the post-enrichment validation pass.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ProfileStrengthStatus {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SuccessLikelihoodStatus {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs significant improvement")]
    NeedsImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PeerComparisonLabel {
    #[serde(rename = "Top Performer")]
    TopPerformer,
    #[serde(rename = "Above Average")]
    AboveAverage,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Seniority {
    Entry,
    #[serde(rename = "Mid-Senior")]
    MidSenior,
    Senior,
    Expert,
}

/// Ordered threshold lookup shared by the status derivations.
fn lookup_by_threshold<T: Copy>(value: i64, thresholds: &[(i64, T)], default: T) -> T {
    for &(cutoff, result) in thresholds {
        if value >= cutoff {
            return result;
        }
    }
    default
}

pub fn profile_strength_status_from_score(score: i64) -> ProfileStrengthStatus {
    lookup_by_threshold(
        score.clamp(0, 100),
        &[
            (85, ProfileStrengthStatus::Excellent),
            (70, ProfileStrengthStatus::Good),
            (50, ProfileStrengthStatus::Average),
        ],
        ProfileStrengthStatus::NeedsImprovement,
    )
}

pub fn success_status_from_score(score: i64) -> SuccessLikelihoodStatus {
    lookup_by_threshold(
        score.clamp(0, 100),
        &[
            (85, SuccessLikelihoodStatus::Excellent),
            (70, SuccessLikelihoodStatus::Good),
            (50, SuccessLikelihoodStatus::Average),
        ],
        SuccessLikelihoodStatus::NeedsImprovement,
    )
}

pub fn success_label_from_status(status: SuccessLikelihoodStatus) -> &'static str {
    match status {
        SuccessLikelihoodStatus::Excellent => "High likelihood of success",
        SuccessLikelihoodStatus::Good => "Strong likelihood of success",
        SuccessLikelihoodStatus::Average => "Moderate likelihood of success",
        SuccessLikelihoodStatus::NeedsImprovement => "Low likelihood of success",
    }
}

pub fn peer_comparison_label_from_percentile(percentile: i64) -> PeerComparisonLabel {
    lookup_by_threshold(
        percentile.clamp(0, 100),
        &[
            (90, PeerComparisonLabel::TopPerformer),
            (70, PeerComparisonLabel::AboveAverage),
            (40, PeerComparisonLabel::Average),
        ],
        PeerComparisonLabel::BelowAverage,
    )
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecommendedRole {
    pub title: String,
    pub seniority: Seniority,
    pub reason: String,
    pub timeline_text: String,
    #[schemars(range(min = 1, max = 24))]
    pub min_months: i64,
    #[schemars(range(min = 1, max = 24))]
    pub max_months: i64,
    pub key_gap: String,
    pub milestones: Vec<String>,
    pub confidence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CurrentProfileKeyStat {
    pub label: String,
    pub value: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CurrentProfileSummary {
    pub title: String,
    pub summary: String,
    pub key_stats: Vec<CurrentProfileKeyStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QuickWinItem {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct JobOpportunityCard {
    pub title: String,
    pub role: String,
    pub copy: String,
    pub goal: String,
    pub action_items: Vec<String>,
    pub key_focus: String,
    pub milestones: Vec<String>,
    #[schemars(range(min = 1, max = 36))]
    pub min_months: i64,
    #[schemars(range(min = 1, max = 36))]
    pub max_months: i64,
    pub timeline_text: String,
    pub card_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SkillAnalysis {
    pub strengths: Vec<String>,
    pub areas_to_develop: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExperienceBenchmark {
    pub your_experience_years: String,
    pub typical_for_target_role_years: String,
    pub gap_analysis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InterviewReadinessReport {
    #[schemars(range(min = 0, max = 100))]
    pub technical_interview_percent: i64,
    #[schemars(range(min = 0, max = 100))]
    pub hr_behavioral_percent: i64,
    pub technical_notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PeerComparisonMetrics {
    #[schemars(range(min = 0, max = 100))]
    pub profile_strength_percent: i64,
    #[schemars(range(min = 0, max = 100))]
    pub better_than_peers_percent: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PeerComparison {
    #[schemars(range(min = 0, max = 100))]
    pub percentile: i64,
    #[schemars(range(min = 0, max = 100))]
    pub potential_percentile: i64,
    pub peer_group_description: String,
    pub label: PeerComparisonLabel,
    pub summary: String,
    pub metrics: PeerComparisonMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SuccessLikelihood {
    #[schemars(range(min = 0, max = 100))]
    pub score_percent: i64,
    pub label: String,
    pub status: SuccessLikelihoodStatus,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProfileEvaluation {
    #[schemars(range(min = 0, max = 100))]
    pub profile_strength_score: i64,
    pub profile_strength_status: ProfileStrengthStatus,
    pub profile_strength_notes: String,
    pub current_profile: CurrentProfileSummary,
    pub skill_analysis: SkillAnalysis,
    pub recommended_tools: Vec<String>,
    pub experience_benchmark: ExperienceBenchmark,
    pub interview_readiness: InterviewReadinessReport,
    pub peer_comparison: PeerComparison,
    pub success_likelihood: SuccessLikelihood,
    pub quick_wins: Vec<QuickWinItem>,
    pub opportunities_you_qualify_for: Vec<JobOpportunityCard>,
    pub recommended_roles_based_on_interests: Vec<RecommendedRole>,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationResponse {
    pub profile_evaluation: ProfileEvaluation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_status_thresholds() {
        assert_eq!(profile_strength_status_from_score(92), ProfileStrengthStatus::Excellent);
        assert_eq!(profile_strength_status_from_score(85), ProfileStrengthStatus::Excellent);
        assert_eq!(profile_strength_status_from_score(74), ProfileStrengthStatus::Good);
        assert_eq!(profile_strength_status_from_score(51), ProfileStrengthStatus::Average);
        assert_eq!(profile_strength_status_from_score(30), ProfileStrengthStatus::NeedsImprovement);
    }

    #[test]
    fn test_peer_label_thresholds() {
        assert_eq!(peer_comparison_label_from_percentile(95), PeerComparisonLabel::TopPerformer);
        assert_eq!(peer_comparison_label_from_percentile(71), PeerComparisonLabel::AboveAverage);
        assert_eq!(peer_comparison_label_from_percentile(40), PeerComparisonLabel::Average);
        assert_eq!(peer_comparison_label_from_percentile(12), PeerComparisonLabel::BelowAverage);
    }

    #[test]
    fn test_success_labels_track_status() {
        assert_eq!(
            success_label_from_status(success_status_from_score(90)),
            "High likelihood of success"
        );
        assert_eq!(
            success_label_from_status(success_status_from_score(40)),
            "Low likelihood of success"
        );
    }

    #[test]
    fn test_status_enum_wire_names() {
        let status = serde_json::to_value(ProfileStrengthStatus::NeedsImprovement).unwrap();
        assert_eq!(status, "Needs Improvement");
        let status = serde_json::to_value(SuccessLikelihoodStatus::NeedsImprovement).unwrap();
        assert_eq!(status, "Needs significant improvement");
        let seniority = serde_json::to_value(Seniority::MidSenior).unwrap();
        assert_eq!(seniority, "Mid-Senior");
    }
}
