//! Display-label tables for role / company / answer brackets.
//!
//! User-supplied `*Label` overrides always win; these tables are the fallback
//! used when the client sent only the raw quiz value.

use crate::models::questionnaire::{Experience, TargetCompany};

pub fn role_label(role: &str) -> String {
    match role {
        "senior-backend" => "Senior Backend Engineer",
        "senior-fullstack" => "Senior Full-Stack Engineer",
        "backend-sde" | "backend" | "backend-dev" => "Backend Engineer",
        "fullstack-sde" | "fullstack" | "fullstack-dev" => "Full-Stack Engineer",
        "frontend-sde" | "frontend" => "Frontend Engineer",
        "data-ml" => "Data / ML Engineer",
        "data-analyst" => "Data Analyst",
        "devops-sre" | "devops" => "DevOps / SRE Engineer",
        "mobile-dev" => "Mobile Engineer",
        "tech-lead" => "Tech Lead / Staff Engineer",
        "qa-automation" => "QA Automation Engineer",
        "architect" => "Solutions Architect",
        "faang-sde" => "Software Development Engineer",
        "not-sure" | "exploring" | "" => "Exploring Tech Roles",
        other => return title_case(other),
    }
    .to_string()
}

pub fn company_label(company: &TargetCompany) -> String {
    match company {
        TargetCompany::Faang => "FAANG / Big Tech",
        TargetCompany::FaangLongterm => "FAANG / Big Tech (Long-term)",
        TargetCompany::Unicorns => "Product Unicorns / Scaleups",
        TargetCompany::Product => "Product Companies",
        TargetCompany::Startups => "High Growth Startups",
        TargetCompany::Service | TargetCompany::BetterService => "Service Companies",
        TargetCompany::AnyTech => "Any Tech Company",
        TargetCompany::Evaluating | TargetCompany::NotSure => "All Company Types",
        TargetCompany::Other(_) => "Tech Companies",
    }
    .to_string()
}

pub fn experience_label(experience: Experience) -> String {
    match experience {
        Experience::Zero => "0 years (Fresh grad)",
        Experience::ZeroToTwo => "0-2 years",
        Experience::TwoToThree => "2-3 years",
        Experience::ThreeToFive => "3-5 years",
        Experience::FiveToEight => "5-8 years",
        Experience::FivePlus => "5+ years",
        Experience::EightPlus => "8+ years",
    }
    .to_string()
}

/// "backend-sde" → "Backend Sde" style fallback for unmapped role ids.
fn title_case(raw: &str) -> String {
    raw.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
