//! Profile-strength narrative notes.
//!
//! Score-banded opener, up to three gap sentences, up to two strength
//! sentences, a target-company outlook and a timeline close. The enricher
//! prefixes the contradiction note when one was raised.

use crate::engine::labels;
use crate::models::questionnaire::{
    Background, Experience, Portfolio, ProblemSolving, QuizResponses, SystemDesign,
};

pub fn generate_profile_strength_notes(
    background: Background,
    quiz: &QuizResponses,
    score: i32,
) -> String {
    match background {
        Background::Tech => tech_notes(quiz, score),
        Background::NonTech => non_tech_notes(quiz, score),
    }
}

fn tech_notes(quiz: &QuizResponses, score: i32) -> String {
    let exp = quiz.experience.as_str();
    let company = &quiz.current_company;
    let mut parts: Vec<String> = Vec::new();

    if score >= 70 {
        parts.push(format!(
            "Great news! With {exp} years at {company}, your profile shows strong readiness."
        ));
    } else if score >= 50 {
        parts.push(format!(
            "You're on the right track with {exp} years at {company}. Here's how to accelerate \
             your progress:"
        ));
    } else {
        parts.push(format!(
            "Let's turn your {exp} years at {company} into interview-ready skills:"
        ));
    }

    let mut gaps: Vec<String> = Vec::new();
    match quiz.problem_solving {
        ProblemSolving::ZeroToTen => {
            if quiz.experience == Experience::EightPlus {
                gaps.push(format!(
                    "Your {exp} years building production systems is valuable. Refresh interview \
                     skills with 30 easy + 50 medium problems over 6-8 weeks."
                ));
            } else if quiz.experience == Experience::FiveToEight {
                gaps.push(format!(
                    "With {exp} years of experience you have the fundamentals. Sharpen interview \
                     skills with 50-80 problems focusing on common patterns."
                ));
            } else if quiz.experience == Experience::ThreeToFive {
                gaps.push(format!(
                    "Your {exp} years of professional experience is valuable, but interview \
                     preparation needs immediate focus. Aim for 50-100 problems."
                ));
            } else {
                gaps.push("Build coding fundamentals with 100+ problems (currently at 0-10).".to_string());
            }
        }
        ProblemSolving::ElevenToFifty => {
            if quiz.experience.is_senior() {
                gaps.push(format!(
                    "Increase to 100+ problems (currently 11-50) to match your {exp} years of \
                     experience."
                ));
            } else {
                gaps.push(
                    "Aim for 100+ coding problems (you're at 11-50 now) for strong interview \
                     readiness."
                        .to_string(),
                );
            }
        }
        _ => {}
    }

    let mid_or_senior = !quiz.experience.is_under_two_years()
        && quiz.experience != Experience::TwoToThree;
    match quiz.system_design {
        SystemDesign::NotYet if mid_or_senior => {
            gaps.push("Master system design - it's the differentiator for senior roles.".to_string())
        }
        SystemDesign::Once if mid_or_senior => gaps.push(
            "Lead more system design discussions to build senior-level expertise.".to_string(),
        ),
        SystemDesign::Once => {
            gaps.push("Deepen your system design practice beyond theory.".to_string())
        }
        _ => {}
    }

    match quiz.portfolio {
        Portfolio::None if !quiz.experience.is_under_two_years() => {
            gaps.push("Showcase your work with 3-5 GitHub projects.".to_string())
        }
        Portfolio::Inactive => gaps.push("Revive your GitHub with recent projects.".to_string()),
        Portfolio::LimitedOneToFive if mid_or_senior => {
            gaps.push("Expand your portfolio to 5+ quality projects.".to_string())
        }
        _ => {}
    }

    if !gaps.is_empty() {
        parts.push(gaps[..gaps.len().min(3)].join(" "));
    }

    let mut strengths: Vec<String> = Vec::new();
    if quiz.problem_solving >= ProblemSolving::FiftyOneToHundred {
        strengths.push(format!(
            "Your {} problems solved shows strong fundamentals.",
            quiz.problem_solving.as_str()
        ));
    }
    if quiz.system_design == SystemDesign::Multiple {
        strengths.push(
            "Leading system design discussions positions you well for senior roles.".to_string(),
        );
    }
    if quiz.portfolio == Portfolio::ActiveFivePlus {
        strengths.push("An active GitHub portfolio demonstrates real-world impact.".to_string());
    }
    if !strengths.is_empty() {
        parts.push(strengths[..strengths.len().min(2)].join(" "));
    }

    let company_label = quiz
        .target_company_label
        .clone()
        .unwrap_or_else(|| labels::company_label(&quiz.target_company));
    if score >= 70 {
        parts.push(format!(
            "{company_label} is within reach - nail your system design and behavioral prep."
        ));
        parts.push("Timeline: 2-3 months to interview-ready.".to_string());
    } else if score >= 50 {
        parts.push(format!(
            "{company_label} readiness: 3-6 months with focused prep on the gaps above."
        ));
        parts.push("Timeline: 4-6 months with consistent effort.".to_string());
    } else {
        parts.push(format!(
            "Build with product companies first, then target {company_label} in 1-2 years."
        ));
        parts.push("Timeline: 6-9 months to build strong fundamentals.".to_string());
    }

    parts.join(" ")
}

fn non_tech_notes(quiz: &QuizResponses, score: i32) -> String {
    let mut parts: Vec<String> = Vec::new();

    if score >= 70 {
        parts.push(format!(
            "Impressive! Your {} years of prior experience plus consistent practice shows \
             serious dedication.",
            quiz.experience.as_str()
        ));
    } else if score >= 50 {
        parts.push("You're making real progress. Here's how to accelerate:".to_string());
    } else {
        parts.push("Let's build your tech career roadmap:".to_string());
    }

    let mut priorities: Vec<String> = Vec::new();
    if quiz.problem_solving == ProblemSolving::ZeroToTen {
        priorities.push(
            "Build coding fundamentals: start with Python basics and one small project."
                .to_string(),
        );
    } else {
        priorities
            .push("Keep momentum going - daily practice is key to breakthroughs.".to_string());
    }
    if quiz.portfolio == Portfolio::None {
        priorities
            .push("Apply knowledge through 2-3 real projects (not tutorials).".to_string());
    } else if quiz.portfolio == Portfolio::LimitedOneToFive {
        priorities.push("Polish projects with documentation and live deployments.".to_string());
    }
    if !priorities.is_empty() {
        parts.push(priorities[..priorities.len().min(3)].join(" "));
    }

    let target = quiz.target_role.to_lowercase();
    if target.contains("backend") {
        parts.push("Backend path: focus on Python/Node.js, SQL, and 2-3 API projects.".to_string());
    } else if target.contains("fullstack") {
        parts.push("Full-stack path: master React + Node.js, deploy one complete app.".to_string());
    } else if target.contains("data") {
        parts.push("Data path: Excel, SQL, and visualization tools (Power BI/Tableau).".to_string());
    }

    if score >= 70 {
        parts.push("Timeline: 3-4 months to your first tech role.".to_string());
    } else if score >= 50 {
        parts.push("Timeline: 5-8 months with consistent effort.".to_string());
    } else {
        parts.push("Timeline: 8-12 months for career switchers - stay committed.".to_string());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::questionnaire::CurrentRole;

    fn quiz(experience: &str, problem_solving: &str, system_design: &str, portfolio: &str) -> QuizResponses {
        QuizResponses {
            experience: Experience::from(experience.to_string()),
            problem_solving: ProblemSolving::from(problem_solving.to_string()),
            system_design: SystemDesign::from(system_design.to_string()),
            portfolio: Portfolio::from(portfolio.to_string()),
            current_role: CurrentRole::SweProduct,
            current_company: "Infosys".to_string(),
            target_role: "backend-sde".to_string(),
            ..QuizResponses::default()
        }
    }

    #[test]
    fn test_high_score_opens_positively() {
        let notes = generate_profile_strength_notes(Background::Tech, &quiz("8+", "100+", "multiple", "active-5+"), 73);
        assert!(notes.starts_with("Great news!"));
        assert!(notes.contains("2-3 months"));
    }

    #[test]
    fn test_low_score_gets_building_frame() {
        let notes = generate_profile_strength_notes(Background::Tech, &quiz("0-2", "0-10", "not-yet", "none"), 46);
        assert!(notes.contains("interview-ready skills"));
        assert!(notes.contains("6-9 months"));
    }

    #[test]
    fn test_gap_sentences_capped_at_three() {
        let notes = generate_profile_strength_notes(Background::Tech, &quiz("5-8", "0-10", "once", "inactive"), 55);
        // All three gap rules fire; the output must still read as one note.
        assert!(notes.contains("50-80 problems"));
        assert!(notes.contains("Lead more system design"));
        assert!(notes.contains("Revive your GitHub"));
    }

    #[test]
    fn test_strengths_acknowledged() {
        let notes = generate_profile_strength_notes(Background::Tech, &quiz("5-8", "100+", "multiple", "active-5+"), 71);
        assert!(notes.contains("100+ problems solved"));
        assert!(notes.contains("Leading system design"));
    }

    #[test]
    fn test_company_label_override_used() {
        let mut q = quiz("3-5", "51-100", "once", "limited-1-5");
        q.target_company_label = Some("High Growth Startups".to_string());
        let notes = generate_profile_strength_notes(Background::Tech, &q, 60);
        assert!(notes.contains("High Growth Startups"));
    }

    #[test]
    fn test_non_tech_path_guidance() {
        let notes = generate_profile_strength_notes(Background::NonTech, &quiz("0-2", "11-50", "not-yet", "none"), 52);
        assert!(notes.contains("Backend path"));
        assert!(notes.contains("5-8 months"));
    }
}
