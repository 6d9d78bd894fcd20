//! Persona matching.
//!
//! Two strategies, both deterministic:
//! - composite-key matching for the structured quiz (role × experience tier
//!   for tech, target-role bucket for non-tech), with fixed fallbacks;
//! - a weighted multi-criterion scorer for free-form targets. Ties break by
//!   catalog insertion order; first-seen wins, and callers depend on that
//!   for reproducibility.

use crate::models::questionnaire::{Background, CurrentRole, Experience, QuizResponses};
use crate::persona::catalog::{
    Persona, PersonaCatalog, DEFAULT_NON_TECH_PERSONA, DEFAULT_TECH_PERSONA,
};

/// Five-bucket experience tier used in tech persona keys.
pub fn experience_tier(experience: Experience) -> &'static str {
    match experience {
        Experience::Zero | Experience::ZeroToTwo => "junior",
        Experience::TwoToThree => "mid1",
        Experience::ThreeToFive => "mid2",
        Experience::FiveToEight | Experience::FivePlus => "senior",
        Experience::EightPlus => "expert",
    }
}

fn role_prefix(current_role: CurrentRole) -> &'static str {
    match current_role {
        CurrentRole::SweProduct => "swe_product",
        CurrentRole::SweService => "swe_service",
        CurrentRole::Devops => "devops",
        CurrentRole::QaSupport => "qa_support",
        // Switchers who self-report as tech get the most common profile.
        CurrentRole::CareerSwitcher => "swe_product",
    }
}

/// Five-bucket target-role key used in non-tech persona ids.
pub fn non_tech_bucket(target_role: &str) -> &'static str {
    let target = target_role.to_lowercase();
    if target.contains("frontend") {
        "frontend"
    } else if target.contains("fullstack") {
        "fullstack"
    } else if target.contains("backend") {
        "backend"
    } else if target.contains("data") {
        "dataml"
    } else {
        "exploring"
    }
}

/// Maps a questionnaire to the single best-fitting persona.
/// Falls back to a fixed default when the composite key is absent.
pub fn match_persona<'a>(
    catalog: &'a PersonaCatalog,
    background: Background,
    quiz: &QuizResponses,
) -> (&'a str, &'a Persona) {
    let id = match background {
        Background::Tech => format!(
            "{}_{}",
            role_prefix(quiz.current_role),
            experience_tier(quiz.experience)
        ),
        Background::NonTech => format!("nontech_{}", non_tech_bucket(&quiz.target_role)),
    };

    let fallback = match background {
        Background::Tech => DEFAULT_TECH_PERSONA,
        Background::NonTech => DEFAULT_NON_TECH_PERSONA,
    };

    match catalog.get(&id) {
        Some(persona) => (persona.id.as_str(), persona),
        None => {
            let persona = catalog
                .get(fallback)
                .expect("default persona is always present in the builtin catalog");
            (persona.id.as_str(), persona)
        }
    }
}

const WEIGHT_TARGET_ROLE: f64 = 0.35;
const WEIGHT_EXPERIENCE: f64 = 0.25;
const WEIGHT_BACKGROUND: f64 = 0.30;
const WEIGHT_CURRENT_ROLE: f64 = 0.10;

/// Scores every persona against weighted criteria and picks the arg-max.
/// Exact match earns the full weight, a same-family partial match earns half.
pub fn match_persona_weighted<'a>(
    catalog: &'a PersonaCatalog,
    background: Background,
    quiz: &QuizResponses,
) -> (&'a str, &'a Persona) {
    let target_bucket = non_tech_bucket(&quiz.target_role);
    let target_family = role_family(&quiz.target_role);
    let tier = experience_tier(quiz.experience);
    let current_prefix = role_prefix(quiz.current_role);

    let mut best: Option<(&Persona, f64)> = None;

    for persona in catalog.iter() {
        let mut score = 0.0;

        // Target role: bucket equality is exact; shared family is partial.
        if persona.role_key == target_bucket || persona.role_key == target_family {
            score += WEIGHT_TARGET_ROLE;
        } else if family_of(&persona.role_key) == target_family {
            score += WEIGHT_TARGET_ROLE / 2.0;
        }

        if persona.tier_key == tier {
            score += WEIGHT_EXPERIENCE;
        } else if adjacent_tier(&persona.tier_key, tier) {
            score += WEIGHT_EXPERIENCE / 2.0;
        }

        if persona.domain == background {
            score += WEIGHT_BACKGROUND;
        }

        if persona.role_key == current_prefix {
            score += WEIGHT_CURRENT_ROLE;
        } else if family_of(&persona.role_key) == family_of(current_prefix) {
            score += WEIGHT_CURRENT_ROLE / 2.0;
        }

        // Strictly-greater keeps the first-seen persona on ties.
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((persona, score)),
        }
    }

    let (persona, _) = best.expect("builtin catalog is never empty");
    (persona.id.as_str(), persona)
}

/// Coarse family grouping for half-weight matches.
fn role_family(role: &str) -> &'static str {
    let role = role.to_lowercase();
    if role.contains("devops") || role.contains("sre") || role.contains("infra") {
        "infra"
    } else if role.contains("data") || role.contains("ml") {
        "data"
    } else if role.contains("qa") || role.contains("support") {
        "qa"
    } else if role.contains("frontend") {
        "frontend"
    } else {
        "swe"
    }
}

fn family_of(role_key: &str) -> &'static str {
    role_family(role_key)
}

fn adjacent_tier(a: &str, b: &str) -> bool {
    const ORDER: [&str; 5] = ["junior", "mid1", "mid2", "senior", "expert"];
    let pos = |t: &str| ORDER.iter().position(|&x| x == t);
    match (pos(a), pos(b)) {
        (Some(i), Some(j)) => i.abs_diff(j) == 1,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::questionnaire::{CurrentRole, Experience};

    fn quiz(current_role: &str, experience: &str, target_role: &str) -> QuizResponses {
        QuizResponses {
            current_role: CurrentRole::from(current_role.to_string()),
            experience: Experience::from(experience.to_string()),
            target_role: target_role.to_string(),
            ..QuizResponses::default()
        }
    }

    #[test]
    fn test_tech_composite_key() {
        let catalog = PersonaCatalog::builtin();
        let (id, _) = match_persona(
            &catalog,
            Background::Tech,
            &quiz("devops", "5-8", "backend-sde"),
        );
        assert_eq!(id, "devops_senior");
    }

    #[test]
    fn test_tech_expert_tier() {
        let catalog = PersonaCatalog::builtin();
        let (id, _) = match_persona(
            &catalog,
            Background::Tech,
            &quiz("qa-support", "8+", "backend-sde"),
        );
        assert_eq!(id, "qa_support_expert");
    }

    #[test]
    fn test_non_tech_bucket_key() {
        let catalog = PersonaCatalog::builtin();
        let (id, _) = match_persona(
            &catalog,
            Background::NonTech,
            &quiz("career-switcher", "3-5", "backend"),
        );
        assert_eq!(id, "nontech_backend");
    }

    #[test]
    fn test_non_tech_exploring_fallback_bucket() {
        let catalog = PersonaCatalog::builtin();
        let (id, _) = match_persona(
            &catalog,
            Background::NonTech,
            &quiz("career-switcher", "0", "not-sure"),
        );
        assert_eq!(id, "nontech_exploring");
    }

    #[test]
    fn test_weighted_match_prefers_background_and_tier() {
        let catalog = PersonaCatalog::builtin();
        let (id, _) = match_persona_weighted(
            &catalog,
            Background::Tech,
            &quiz("swe-product", "3-5", "backend-sde"),
        );
        // swe_product_mid2 wins on background + tier + current role family.
        assert_eq!(id, "swe_product_mid2");
    }

    #[test]
    fn test_weighted_tie_breaks_first_seen() {
        let catalog = PersonaCatalog::builtin();
        // A target with no matching family and an unknown tier pushes many
        // personas to the same score; first-seen must win deterministically.
        let first = match_persona_weighted(
            &catalog,
            Background::Tech,
            &quiz("swe-product", "3-5", "backend-sde"),
        );
        let second = match_persona_weighted(
            &catalog,
            Background::Tech,
            &quiz("swe-product", "3-5", "backend-sde"),
        );
        assert_eq!(first.0, second.0);
    }

    #[test]
    fn test_weighted_non_tech_target() {
        let catalog = PersonaCatalog::builtin();
        let (id, _) = match_persona_weighted(
            &catalog,
            Background::NonTech,
            &quiz("career-switcher", "0-2", "data-analyst"),
        );
        assert_eq!(id, "nontech_dataml");
    }

    #[test]
    fn test_experience_tier_buckets() {
        assert_eq!(experience_tier(Experience::Zero), "junior");
        assert_eq!(experience_tier(Experience::TwoToThree), "mid1");
        assert_eq!(experience_tier(Experience::ThreeToFive), "mid2");
        assert_eq!(experience_tier(Experience::FivePlus), "senior");
        assert_eq!(experience_tier(Experience::EightPlus), "expert");
    }
}
