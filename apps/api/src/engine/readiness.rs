//! Interview readiness.
//!
//! Computed independently of the profile-strength score: the two measure
//! different things and are allowed to diverge. A new grad who grinds
//! problems can out-ready a ten-year veteran who has not interviewed in years.

use serde::Serialize;

use crate::models::questionnaire::{
    Background, CurrentRole, Experience, Portfolio, ProblemSolving, QuizResponses, SystemDesign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    pub technical_interview_percent: i32,
    pub hr_behavioral_percent: i32,
    pub confidence: Confidence,
}

/// Calculates interview readiness for either track.
pub fn calculate_interview_readiness(
    background: Background,
    quiz: &QuizResponses,
) -> ReadinessReport {
    match background {
        Background::Tech => tech_readiness(quiz),
        Background::NonTech => non_tech_readiness(quiz),
    }
}

fn tech_readiness(quiz: &QuizResponses) -> ReadinessReport {
    // Problem-solving practice is the strongest signal, so it sets the base.
    let mut base = match quiz.problem_solving {
        ProblemSolving::HundredPlus => 72,
        ProblemSolving::FiftyOneToHundred => 62,
        ProblemSolving::ElevenToFifty => 52,
        ProblemSolving::ZeroToTen => 45,
    };

    // Design exposure only counts once there is real coding practice behind it.
    if quiz.problem_solving != ProblemSolving::ZeroToTen {
        base += match quiz.system_design {
            SystemDesign::Multiple => 12,
            SystemDesign::Once => 6,
            SystemDesign::Learning => 2,
            SystemDesign::NotYet => 0,
        };
    }

    base += match quiz.experience {
        Experience::FiveToEight | Experience::FivePlus | Experience::EightPlus => 8,
        Experience::ThreeToFive => 5,
        Experience::TwoToThree => 2,
        Experience::Zero | Experience::ZeroToTwo => 0,
    };

    base += match quiz.portfolio {
        Portfolio::ActiveFivePlus => 3,
        Portfolio::LimitedOneToFive => 1,
        _ => 0,
    };

    // Interview-prep culture varies by current role.
    base += match quiz.current_role {
        CurrentRole::Devops | CurrentRole::SweProduct => 2,
        CurrentRole::SweService => 1,
        CurrentRole::QaSupport | CurrentRole::CareerSwitcher => 0,
    };

    let technical = base.clamp(45, 80);
    let hr_offset = if technical >= 65 { 3 } else { 5 };
    let hr = (technical - hr_offset).clamp(45, 80);

    ReadinessReport {
        technical_interview_percent: technical,
        hr_behavioral_percent: hr,
        confidence: confidence_for(technical, quiz),
    }
}

fn non_tech_readiness(quiz: &QuizResponses) -> ReadinessReport {
    let mut base = match quiz.problem_solving {
        ProblemSolving::HundredPlus => 70,
        ProblemSolving::FiftyOneToHundred => 60,
        ProblemSolving::ElevenToFifty => 50,
        ProblemSolving::ZeroToTen => 45,
    };

    // Hands-on projects are the clearest commitment signal for switchers.
    base += match quiz.portfolio {
        Portfolio::ActiveFivePlus => 8,
        Portfolio::LimitedOneToFive => 4,
        Portfolio::Inactive => 1,
        Portfolio::None => 0,
    };

    // Prior (non-tech) work experience brings maturity and learning habits.
    base += match quiz.experience {
        Experience::FiveToEight | Experience::FivePlus | Experience::EightPlus => 8,
        Experience::ThreeToFive => 5,
        Experience::TwoToThree => 3,
        Experience::ZeroToTwo => 1,
        Experience::Zero => 0,
    };

    if quiz.current_role == CurrentRole::QaSupport {
        base += 2;
    }

    // A clear direction beats exploring.
    let target = quiz.target_role.to_lowercase();
    base += if target.contains("data") || target.contains("backend") || target.contains("fullstack")
    {
        3
    } else if target.contains("frontend") {
        2
    } else {
        0
    };

    let technical = base.clamp(45, 75);
    let hr_offset = if technical >= 65 { 2 } else { 5 };
    let hr = (technical - hr_offset).clamp(45, 75);

    ReadinessReport {
        technical_interview_percent: technical,
        hr_behavioral_percent: hr,
        confidence: confidence_for(technical, quiz),
    }
}

fn confidence_for(technical: i32, quiz: &QuizResponses) -> Confidence {
    if technical >= 70 {
        if quiz.experience.is_senior() || quiz.problem_solving == ProblemSolving::HundredPlus {
            Confidence::High
        } else {
            Confidence::Medium
        }
    } else if technical >= 55 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
