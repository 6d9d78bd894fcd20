//! Prompt construction for the evaluation call.
//!
//! The system instruction embeds the deterministic score and readiness
//! values as hard constraints: the model must echo them verbatim in the
//! named fields, and every narrative field must stay consistent with the
//! authoritative company and role labels. The enricher overwrites those
//! fields anyway; the constraints exist so the prose agrees with the
//! numbers the user will actually see.

use crate::engine::readiness::ReadinessReport;
use crate::engine::scoring::ScoreBreakdown;

/// Corrective follow-up sent when a reply fails parsing or validation.
pub fn correction_prompt(error_text: &str) -> String {
    format!(
        "The previous response did not satisfy the required schema. Error details:\n{error_text}\n\n\
         Please respond again with only a JSON object that strictly matches the schema."
    )
}

/// User message wrapping the normalized input payload.
pub fn user_prompt(payload_json: &str) -> String {
    format!(
        "Using this input JSON, return only a JSON object that matches the response schema.\n\n\
         {payload_json}"
    )
}

/// Builds the system instruction for one evaluation.
pub fn system_instruction(
    score: &ScoreBreakdown,
    readiness: &ReadinessReport,
    target_company_label: &str,
) -> String {
    let profile_score = score.score;
    let technical = readiness.technical_interview_percent;
    let hr = readiness.hr_behavioral_percent;
    let percentile_low = (profile_score - 5).max(0);
    let percentile_high = (profile_score + 5).min(100);
    let success_low = (profile_score - 10).max(0);
    let success_high = (profile_score + 5).min(100);

    format!(
        "You are a career advisor specializing in the Indian tech market. Given the candidate's \
         background, quiz responses, and goals, produce a structured profile evaluation focusing \
         on prospects, role fit, gaps, and a roadmap.\n\n\
         CONTEXT: The user is based in India and looking for opportunities in the Indian tech \
         ecosystem (Bangalore, Hyderabad, Pune, NCR) or remote roles with Indian/global \
         companies. Tailor all recommendations to be realistic for the Indian market.\n\n\
         CRITICAL: SCORE CONSISTENCY RULES\n\
         The user's profile_strength_score has been calculated as {profile_score}/100.\n\
         The user's interview readiness has been independently calculated from their practice, \
         experience, and preparation.\n\
         ALL percentage scores MUST be consistent with these calculated baselines:\n\n\
         1. profile_evaluation.profile_strength_score: MUST be {profile_score} (exact match)\n\
         2. peer_comparison.metrics.profile_strength_percent: MUST be {profile_score} (exact match)\n\
         3. interview_readiness.technical_interview_percent: MUST be {technical} (calculated \
         independently, NOT derived from profile_strength_score)\n\
         4. interview_readiness.hr_behavioral_percent: MUST be {hr}\n\
         5. peer_comparison.percentile: between {percentile_low} and {percentile_high}\n\
         6. success_likelihood.score_percent: between {success_low} and {success_high}\n\n\
         IMPORTANT DISTINCTION:\n\
         - profile_strength_score ({profile_score}%): overall career strength\n\
         - interview readiness ({technical}%): specifically how prepared they are for technical \
         interviews\n\
         They measure different things and may legitimately diverge.\n\n\
         CRITICAL: USE THE ACTUAL TARGET COMPANY IN ALL TEXT\n\
         The user selected target company: '{target_company_label}'.\n\
         When generating ANY text field (areas_to_develop, technical_notes, \
         success_likelihood.notes, peer_comparison.summary): use '{target_company_label}' \
         verbatim. DO NOT default to 'FAANG' or 'Big Tech' unless that is what they selected.\n\n\
         SENIORITY MATCHING for recommended_roles_based_on_interests:\n\
         - 0-2 years: Entry/Junior roles only\n\
         - 3-5 years: Mid-Level/Senior (lower-bound) roles\n\
         - 5-8 years: Senior/Staff roles, if coding practice supports it\n\
         - 8+ years: Staff/Principal/Lead/Architect roles, if coding practice supports it\n\
         NEVER recommend Staff/Principal/Senior roles when problem-solving practice is below \
         51-100.\n\n\
         TECHNICAL ROLES ONLY: recommend hands-on engineering roles (SDE, Backend/Frontend/\
         Full-Stack Engineer, DevOps/SRE, Data/ML Engineer, Mobile Engineer, Platform Engineer, \
         Tech Lead/Staff for 5+ years). Never Product Manager, UX Designer, Business Analyst, \
         Project Manager, or any non-coding role.\n\n\
         FORMAT for experience_benchmark: your_experience_years and \
         typical_for_target_role_years use bracket values like '0-2', '3-5', '5-8', '8+' with \
         no 'years' suffix.\n\n\
         In your advice, acknowledge when answers show limited exposure (not-yet, none, never) \
         and tailor guidance for the user's background."
    )
}
