//! Current-profile summary.
//!
//! A conversational recap of what the user told us, plus the key stats the
//! results page renders as chips. Pure templating, no inference.

use crate::engine::labels;
use crate::models::evaluation::{CurrentProfileKeyStat, CurrentProfileSummary};
use crate::models::questionnaire::{
    Background, CurrentRole, Experience, Portfolio, ProblemSolving, QuizResponses, SystemDesign,
};

fn format_experience(experience: Experience) -> &'static str {
    match experience {
        Experience::Zero => "no professional experience",
        Experience::ZeroToTwo => "0-2 years of experience",
        Experience::TwoToThree => "2-3 years of experience",
        Experience::ThreeToFive => "3-5 years of experience",
        Experience::FiveToEight => "5-8 years of experience",
        Experience::FivePlus => "5+ years of experience",
        Experience::EightPlus => "8+ years of experience",
    }
}

fn format_current_role(current_role: CurrentRole) -> &'static str {
    match current_role {
        CurrentRole::SweProduct => "software engineer at a product company",
        CurrentRole::SweService => "software engineer at a service company",
        CurrentRole::Devops => "DevOps engineer",
        CurrentRole::QaSupport => "QA/support engineer",
        CurrentRole::CareerSwitcher => "career switcher",
    }
}

fn format_problem_solving(problem_solving: ProblemSolving) -> &'static str {
    match problem_solving {
        ProblemSolving::ZeroToTen => "minimal coding practice (0-10 problems solved)",
        ProblemSolving::ElevenToFifty => "some coding practice (11-50 problems solved)",
        ProblemSolving::FiftyOneToHundred => "moderate coding practice (51-100 problems solved)",
        ProblemSolving::HundredPlus => "extensive coding practice (100+ problems solved)",
    }
}

fn format_system_design(system_design: SystemDesign) -> &'static str {
    match system_design {
        SystemDesign::NotYet => "no system design experience yet",
        SystemDesign::Learning => "self-driven system design learning",
        SystemDesign::Once => "participation in system design discussions",
        SystemDesign::Multiple => "experience leading system design discussions",
    }
}

fn format_portfolio(portfolio: Portfolio) -> &'static str {
    match portfolio {
        Portfolio::None => "no portfolio projects",
        Portfolio::Inactive => "some inactive portfolio projects",
        Portfolio::LimitedOneToFive => "1-5 portfolio projects",
        Portfolio::ActiveFivePlus => "5+ active portfolio projects",
    }
}

pub fn generate_current_profile_summary(
    background: Background,
    quiz: &QuizResponses,
) -> CurrentProfileSummary {
    match background {
        Background::Tech => tech_summary(quiz),
        Background::NonTech => non_tech_summary(quiz),
    }
}

fn tech_summary(quiz: &QuizResponses) -> CurrentProfileSummary {
    let role_text = quiz
        .current_role_label
        .clone()
        .unwrap_or_else(|| format_current_role(quiz.current_role).to_string());
    let exp_text = format_experience(quiz.experience);
    let ps_text = format_problem_solving(quiz.problem_solving);
    let sd_text = format_system_design(quiz.system_design);
    let port_text = format_portfolio(quiz.portfolio);

    let summary = if quiz.experience.is_under_two_years() {
        format!(
            "You're currently a {} with {exp_text}. You have {ps_text} and {sd_text}. \
             Your portfolio includes {port_text}.",
            role_text.to_lowercase()
        )
    } else if quiz.experience == Experience::ThreeToFive
        || quiz.experience == Experience::TwoToThree
    {
        format!(
            "You're a {} with {exp_text} at {}. You've built up {ps_text}, {sd_text}, \
             and have {port_text}.",
            role_text.to_lowercase(),
            quiz.current_company
        )
    } else {
        format!(
            "You're an experienced {} with {exp_text} at {}. You have {ps_text}, {sd_text}, \
             and maintain {port_text}.",
            role_text.to_lowercase(),
            quiz.current_company
        )
    };

    let mut key_stats = vec![
        CurrentProfileKeyStat {
            label: "Experience".to_string(),
            value: labels::experience_label(quiz.experience),
            icon: "briefcase".to_string(),
        },
        CurrentProfileKeyStat {
            label: "Current Role".to_string(),
            value: role_text,
            icon: "user".to_string(),
        },
        CurrentProfileKeyStat {
            label: "Coding Practice".to_string(),
            value: match quiz.problem_solving {
                ProblemSolving::HundredPlus => "100+ problems".to_string(),
                other => format!("{} problems", other.as_str()),
            },
            icon: "code".to_string(),
        },
    ];

    if !quiz.experience.is_under_two_years() {
        key_stats.push(CurrentProfileKeyStat {
            label: "System Design".to_string(),
            value: match quiz.system_design {
                SystemDesign::NotYet => "Not Yet",
                SystemDesign::Learning => "Learning",
                SystemDesign::Once => "Participated",
                SystemDesign::Multiple => "Extensive",
            }
            .to_string(),
            icon: "layout".to_string(),
        });
    }

    key_stats.push(CurrentProfileKeyStat {
        label: "Portfolio".to_string(),
        value: match quiz.portfolio {
            Portfolio::None => "None",
            Portfolio::Inactive => "Inactive",
            Portfolio::LimitedOneToFive => "1-5 Projects",
            Portfolio::ActiveFivePlus => "5+ Active Projects",
        }
        .to_string(),
        icon: "folder".to_string(),
    });

    CurrentProfileSummary {
        title: "Your Current Profile".to_string(),
        summary,
        key_stats,
    }
}

fn non_tech_summary(quiz: &QuizResponses) -> CurrentProfileSummary {
    let ps_text = format_problem_solving(quiz.problem_solving);
    let port_text = format_portfolio(quiz.portfolio);
    let target_label = quiz
        .target_role_label
        .clone()
        .unwrap_or_else(|| labels::role_label(&quiz.target_role));

    let summary = if quiz.experience == Experience::Zero {
        format!(
            "You're transitioning into tech from a non-tech background, aiming for a \
             {target_label} role. So far you have {ps_text} and {port_text}."
        )
    } else {
        format!(
            "You have {} in non-tech roles and are transitioning to tech, aiming for a \
             {target_label} role. So far you have {ps_text} and {port_text}.",
            format_experience(quiz.experience)
        )
    };

    let mut key_stats = vec![CurrentProfileKeyStat {
        label: "Background".to_string(),
        value: "Non-Tech Career Switcher".to_string(),
        icon: "briefcase".to_string(),
    }];

    if quiz.experience != Experience::Zero {
        key_stats.push(CurrentProfileKeyStat {
            label: "Prior Experience".to_string(),
            value: labels::experience_label(quiz.experience),
            icon: "user".to_string(),
        });
    }

    key_stats.push(CurrentProfileKeyStat {
        label: "Coding Practice".to_string(),
        value: format!("{} problems", quiz.problem_solving.as_str()),
        icon: "code".to_string(),
    });
    key_stats.push(CurrentProfileKeyStat {
        label: "Target Role".to_string(),
        value: target_label,
        icon: "target".to_string(),
    });

    CurrentProfileSummary {
        title: "Your Current Profile".to_string(),
        summary,
        key_stats,
    }
}
