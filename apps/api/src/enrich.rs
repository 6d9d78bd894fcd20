//! Response enrichment — the deterministic overlay on the LLM's narrative.
//!
//! The completion service was instructed to match the computed numbers, but
//! its copies are never trusted: scores, readiness, quick wins, tools,
//! opportunities and the current-profile summary are all overwritten with
//! the engine's values. Role cards are deduplicated, re-timed and reordered
//! so the user's stated target is pinned first. The merged object is then
//! re-validated against the full schema; a violation at that point is an
//! internal contract bug, not a retryable LLM failure.

use tracing::{info, warn};

use crate::engine::peers::{calculate_potential_percentile, generate_peer_group_description};
use crate::engine::quick_wins::generate_quick_wins;
use crate::engine::readiness::ReadinessReport;
use crate::engine::scoring::ScoreBreakdown;
use crate::engine::summary::generate_current_profile_summary;
use crate::engine::tools::generate_tool_recommendations;
use crate::engine::{notes, opportunities};
use crate::errors::AppError;
use crate::llm::schema::Schemas;
use crate::models::evaluation::{
    peer_comparison_label_from_percentile, profile_strength_status_from_score,
    success_label_from_status, success_status_from_score, EvaluationResponse,
    ExperienceBenchmark, InterviewReadinessReport, PeerComparison, PeerComparisonMetrics,
    ProfileEvaluation, QuickWinItem, RecommendedRole, Seniority, SkillAnalysis,
    SuccessLikelihood,
};
use crate::models::evaluation_raw::{EvaluationResponseRaw, RecommendedRoleRaw};
use crate::models::questionnaire::{Background, QuizResponses};
use crate::persona::catalog::PersonaCatalog;
use crate::persona::matcher::match_persona_weighted;
use crate::timeline::estimate_for_role;

/// Neither peers nor odds are ever shown below this.
const MOTIVATIONAL_FLOOR: i64 = 35;
/// At most this many role cards survive.
const MAX_ROLES: usize = 5;

pub struct EnrichmentContext<'a> {
    pub background: Background,
    pub quiz: &'a QuizResponses,
    pub score: &'a ScoreBreakdown,
    pub readiness: &'a ReadinessReport,
    pub catalog: &'a PersonaCatalog,
    pub schemas: &'a Schemas,
}

pub fn enrich(
    raw: EvaluationResponseRaw,
    ctx: &EnrichmentContext<'_>,
) -> Result<EvaluationResponse, AppError> {
    let raw = raw.profile_evaluation;
    let score = ctx.score.score as i64;

    // Peer comparison: floor, relabel, recompute description and potential.
    let percentile = raw.peer_comparison.percentile.clamp(MOTIVATIONAL_FLOOR, 100);
    let potential_percentile =
        calculate_potential_percentile(percentile, ctx.background, ctx.quiz);
    let peer_comparison = PeerComparison {
        percentile,
        potential_percentile,
        peer_group_description: generate_peer_group_description(ctx.background, ctx.quiz),
        label: peer_comparison_label_from_percentile(percentile),
        summary: raw.peer_comparison.summary,
        metrics: PeerComparisonMetrics {
            profile_strength_percent: score,
            better_than_peers_percent: percentile,
        },
    };

    let success_score = raw.success_likelihood.score_percent.clamp(MOTIVATIONAL_FLOOR, 100);
    let success_status = success_status_from_score(success_score);
    let success_likelihood = SuccessLikelihood {
        score_percent: success_score,
        label: success_label_from_status(success_status).to_string(),
        status: success_status,
        notes: raw.success_likelihood.notes,
    };

    // Narrative notes are regenerated; a contradiction note leads if raised.
    let mut profile_notes =
        notes::generate_profile_strength_notes(ctx.background, ctx.quiz, ctx.score.score);
    if let Some(contradiction) = &ctx.score.contradiction_note {
        profile_notes = format!("{contradiction} {profile_notes}");
    }

    let recommended_roles = rebuild_role_cards(raw.recommended_roles_based_on_interests, ctx);

    let quick_wins = generate_quick_wins(ctx.background, ctx.quiz)
        .into_iter()
        .map(|w| QuickWinItem {
            title: w.title,
            description: w.description,
            icon: w.icon,
        })
        .collect();

    let enriched = EvaluationResponse {
        profile_evaluation: ProfileEvaluation {
            profile_strength_score: score,
            profile_strength_status: profile_strength_status_from_score(score),
            profile_strength_notes: profile_notes,
            current_profile: generate_current_profile_summary(ctx.background, ctx.quiz),
            skill_analysis: SkillAnalysis {
                strengths: raw.skill_analysis.strengths,
                areas_to_develop: raw.skill_analysis.areas_to_develop,
            },
            recommended_tools: generate_tool_recommendations(ctx.background, ctx.quiz),
            experience_benchmark: ExperienceBenchmark {
                your_experience_years: raw.experience_benchmark.your_experience_years,
                typical_for_target_role_years: raw
                    .experience_benchmark
                    .typical_for_target_role_years,
                gap_analysis: raw.experience_benchmark.gap_analysis,
            },
            interview_readiness: InterviewReadinessReport {
                technical_interview_percent: ctx.readiness.technical_interview_percent as i64,
                hr_behavioral_percent: ctx.readiness.hr_behavioral_percent as i64,
                technical_notes: raw.interview_readiness.technical_notes,
            },
            peer_comparison,
            success_likelihood,
            quick_wins,
            opportunities_you_qualify_for: opportunities::generate_job_opportunities(
                ctx.catalog,
                ctx.background,
                ctx.quiz,
            ),
            recommended_roles_based_on_interests: recommended_roles,
            badges: raw.badges,
        },
    };

    // Contract check: the merged object must satisfy the full schema.
    let as_value = serde_json::to_value(&enriched)
        .map_err(|e| AppError::Contract(format!("enriched response failed to serialize: {e}")))?;
    ctx.schemas
        .validate_full(&as_value)
        .map_err(|e| AppError::Contract(format!("enriched response failed schema check: {e}")))?;

    info!(
        score,
        roles = enriched
            .profile_evaluation
            .recommended_roles_based_on_interests
            .len(),
        "response enriched"
    );
    Ok(enriched)
}

fn normalized_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Dedup by normalized title, attach fresh timelines, pin the target role
/// first (synthesizing a card if the model omitted it), truncate to five.
fn rebuild_role_cards(
    raw_roles: Vec<RecommendedRoleRaw>,
    ctx: &EnrichmentContext<'_>,
) -> Vec<RecommendedRole> {
    let mut seen = std::collections::HashSet::new();
    let mut roles: Vec<RecommendedRole> = Vec::new();

    for raw in raw_roles {
        let key = normalized_title(&raw.title);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        roles.push(with_fresh_timeline(raw, ctx));
    }

    let exploring = ctx.quiz.is_exploring();

    if !exploring {
        let target_label = ctx
            .quiz
            .target_role_label
            .clone()
            .unwrap_or_else(|| crate::engine::labels::role_label(&ctx.quiz.target_role));
        let target_norm = normalized_title(&target_label);

        // Match by containment in either direction: "Backend Engineer" should
        // pin a card titled "Backend Engineer @ FAANG / Big Tech" and vice versa.
        let position = roles.iter().position(|r| {
            let title = normalized_title(&r.title);
            title.contains(&target_norm) || target_norm.contains(&title)
        });

        match position {
            Some(0) => {}
            Some(idx) => {
                let card = roles.remove(idx);
                roles.insert(0, card);
            }
            None => {
                let card = synthesize_target_card(&target_label, ctx);
                warn!(title = %card.title, "target role missing from reply; synthesizing card");
                roles.insert(0, card);
            }
        }
    }

    // The pin can reintroduce a duplicate; dedup once more, order-preserving.
    let mut final_seen = std::collections::HashSet::new();
    roles.retain(|r| final_seen.insert(normalized_title(&r.title)));
    roles.truncate(MAX_ROLES);
    roles
}

fn with_fresh_timeline(raw: RecommendedRoleRaw, ctx: &EnrichmentContext<'_>) -> RecommendedRole {
    let timeline = estimate_for_role(&raw.title, ctx.quiz, &ctx.quiz.target_company);
    RecommendedRole {
        title: raw.title,
        seniority: raw.seniority,
        reason: raw.reason,
        timeline_text: timeline.timeline_text,
        min_months: timeline.min_months as i64,
        max_months: timeline.max_months as i64,
        key_gap: timeline.key_gap,
        milestones: timeline.milestones,
        confidence: timeline.confidence,
    }
}

fn synthesize_target_card(target_label: &str, ctx: &EnrichmentContext<'_>) -> RecommendedRole {
    let timeline = estimate_for_role(&ctx.quiz.target_role, ctx.quiz, &ctx.quiz.target_company);
    // The weighted matcher handles free-form targets the composite key cannot.
    let (_, persona) = match_persona_weighted(ctx.catalog, ctx.background, ctx.quiz);
    RecommendedRole {
        title: target_label.to_string(),
        seniority: seniority_for_tier(&persona.tier_key),
        reason: format!("Your stated target role - {}", timeline.key_gap),
        timeline_text: timeline.timeline_text,
        min_months: timeline.min_months as i64,
        max_months: timeline.max_months as i64,
        key_gap: timeline.key_gap,
        milestones: timeline.milestones,
        confidence: timeline.confidence,
    }
}

fn seniority_for_tier(tier_key: &str) -> Seniority {
    match tier_key {
        "junior" | "entry" => Seniority::Entry,
        "senior" => Seniority::Senior,
        "expert" => Seniority::Expert,
        _ => Seniority::MidSenior,
    }
}
