//! Peer comparison helpers: the cohort description and the "potential
//! percentile" - where the user could land if the identified gaps close.

use crate::engine::labels;
use crate::models::questionnaire::{
    Background, Experience, Portfolio, ProblemSolving, QuizResponses, SystemDesign,
};

/// Potential never exceeds this, no matter how many gaps could close.
const POTENTIAL_CAP: i64 = 90;
/// Potential always shows at least this much headroom over the current rank.
const MIN_HEADROOM: i64 = 12;

fn seniority_description(experience: Experience) -> &'static str {
    match experience {
        Experience::EightPlus => "Senior",
        Experience::FiveToEight | Experience::FivePlus => "Mid to senior-level",
        Experience::ThreeToFive => "Mid-level",
        Experience::TwoToThree => "Early to mid-level",
        Experience::Zero | Experience::ZeroToTwo => "Junior to mid-level",
    }
}

pub fn generate_peer_group_description(background: Background, quiz: &QuizResponses) -> String {
    let role_label = quiz
        .target_role_label
        .clone()
        .unwrap_or_else(|| labels::role_label(&quiz.target_role));

    match background {
        Background::NonTech => {
            if quiz.problem_solving >= ProblemSolving::ElevenToFifty {
                format!("Career switchers transitioning to {role_label} roles")
            } else {
                format!("Aspiring tech professionals exploring {role_label} paths")
            }
        }
        Background::Tech => {
            let company_label = quiz
                .target_company_label
                .clone()
                .unwrap_or_else(|| labels::company_label(&quiz.target_company));
            format!(
                "{} {role_label}s at {company_label}",
                seniority_description(quiz.experience)
            )
        }
    }
}

/// Current percentile plus a boost for each gap that is still open -
/// the more room to improve, the higher the potential.
pub fn calculate_potential_percentile(
    current_percentile: i64,
    background: Background,
    quiz: &QuizResponses,
) -> i64 {
    let mut potential = current_percentile;

    match background {
        Background::NonTech => {
            potential += match quiz.problem_solving {
                ProblemSolving::ZeroToTen => 25,
                ProblemSolving::ElevenToFifty => 15,
                _ => 5,
            };
            if quiz.portfolio == Portfolio::None {
                potential += 10;
            }
        }
        Background::Tech => {
            potential += match quiz.problem_solving {
                ProblemSolving::ZeroToTen => 20,
                ProblemSolving::ElevenToFifty => 12,
                ProblemSolving::FiftyOneToHundred => 5,
                ProblemSolving::HundredPlus => 0,
            };

            if !quiz.experience.is_under_two_years() {
                potential += match quiz.system_design {
                    SystemDesign::NotYet => 15,
                    SystemDesign::Learning => 10,
                    SystemDesign::Once => 5,
                    SystemDesign::Multiple => 0,
                };
            }

            potential += match quiz.portfolio {
                Portfolio::None => 10,
                Portfolio::Inactive => 7,
                Portfolio::LimitedOneToFive => 3,
                Portfolio::ActiveFivePlus => 0,
            };
        }
    }

    potential = potential.min(POTENTIAL_CAP);
    potential = potential.max(current_percentile + MIN_HEADROOM);
    potential.min(POTENTIAL_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::questionnaire::TargetCompany;

    fn quiz(experience: &str, problem_solving: &str, system_design: &str, portfolio: &str) -> QuizResponses {
        QuizResponses {
            experience: Experience::from(experience.to_string()),
            problem_solving: ProblemSolving::from(problem_solving.to_string()),
            system_design: SystemDesign::from(system_design.to_string()),
            portfolio: Portfolio::from(portfolio.to_string()),
            target_role: "backend-sde".to_string(),
            target_company: TargetCompany::Faang,
            ..QuizResponses::default()
        }
    }

    #[test]
    fn test_peer_group_description_tech() {
        let desc = generate_peer_group_description(Background::Tech, &quiz("5-8", "51-100", "once", "limited-1-5"));
        assert_eq!(desc, "Mid to senior-level Backend Engineers at FAANG / Big Tech");
    }

    #[test]
    fn test_peer_group_description_non_tech() {
        let active = generate_peer_group_description(Background::NonTech, &quiz("0-2", "11-50", "not-yet", "none"));
        assert!(active.starts_with("Career switchers"));

        let exploring = generate_peer_group_description(Background::NonTech, &quiz("0-2", "0-10", "not-yet", "none"));
        assert!(exploring.starts_with("Aspiring tech professionals"));
    }

    #[test]
    fn test_potential_has_minimum_headroom() {
        // A maxed-out profile still shows room to grow.
        let potential = calculate_potential_percentile(
            70,
            Background::Tech,
            &quiz("8+", "100+", "multiple", "active-5+"),
        );
        assert_eq!(potential, 82);
    }

    #[test]
    fn test_potential_capped_at_90() {
        let potential = calculate_potential_percentile(
            85,
            Background::Tech,
            &quiz("3-5", "0-10", "not-yet", "none"),
        );
        assert_eq!(potential, 90);
    }

    #[test]
    fn test_bigger_gaps_mean_bigger_potential_boost() {
        let weak = calculate_potential_percentile(
            40,
            Background::Tech,
            &quiz("3-5", "0-10", "not-yet", "none"),
        );
        let strong = calculate_potential_percentile(
            40,
            Background::Tech,
            &quiz("3-5", "100+", "multiple", "active-5+"),
        );
        assert!(weak > strong);
        // 40 + 20 + 15 + 10 = 85.
        assert_eq!(weak, 85);
        assert_eq!(strong, 52);
    }
}
