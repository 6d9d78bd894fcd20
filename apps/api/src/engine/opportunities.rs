//! Job-opportunity card generation.
//!
//! Three career timeline cards per profile: the stated goal, the same role
//! at the next-easier company, and an alternative specialization at the
//! target company. Non-tech users who are still exploring get two intern
//! cards instead (frontend + backend) so they can sample both tracks.

use crate::engine::labels;
use crate::models::evaluation::JobOpportunityCard;
use crate::models::questionnaire::{Background, QuizResponses, TargetCompany};
use crate::persona::catalog::{alternative_role, CardType, PersonaCatalog};
use crate::persona::matcher::match_persona;
use crate::timeline::estimate_for_card;

/// Next-easier company in the difficulty hierarchy:
/// FAANG → unicorns → product → startups → service.
pub fn easier_company(target: &TargetCompany) -> TargetCompany {
    match target {
        TargetCompany::Faang => TargetCompany::Unicorns,
        TargetCompany::FaangLongterm => TargetCompany::Product,
        TargetCompany::Unicorns => TargetCompany::Product,
        TargetCompany::Product => TargetCompany::Startups,
        TargetCompany::Startups => TargetCompany::BetterService,
        TargetCompany::Service => TargetCompany::Service,
        _ => TargetCompany::BetterService,
    }
}

fn role_at_company(role: &str, company: &TargetCompany) -> String {
    format!("{} @ {}", labels::role_label(role), labels::company_label(company))
}

pub fn generate_job_opportunities(
    catalog: &PersonaCatalog,
    background: Background,
    quiz: &QuizResponses,
) -> Vec<JobOpportunityCard> {
    if background == Background::NonTech && quiz.is_exploring() {
        return exploring_cards();
    }

    let (persona_id, persona) = match_persona(catalog, background, quiz);
    let target_company = quiz.target_company.clone();
    let mut cards = Vec::with_capacity(3);

    let target_timeline = estimate_for_card(persona, CardType::Target, quiz);
    cards.push(JobOpportunityCard {
        title: role_at_company(&quiz.target_role, &target_company),
        role: quiz.target_role.clone(),
        copy: target_timeline.copy,
        goal: target_timeline.goal,
        action_items: target_timeline.action_items,
        key_focus: "Your stated goal - focus on these areas".to_string(),
        milestones: target_timeline.milestones,
        min_months: target_timeline.min_months as i64,
        max_months: target_timeline.max_months as i64,
        timeline_text: target_timeline.timeline_text,
        card_type: CardType::Target.as_str().to_string(),
    });

    let easier = easier_company(&target_company);
    let easier_timeline = estimate_for_card(persona, CardType::EasierCompany, quiz);
    cards.push(JobOpportunityCard {
        title: role_at_company(&quiz.target_role, &easier),
        role: quiz.target_role.clone(),
        copy: easier_timeline.copy,
        goal: easier_timeline.goal,
        action_items: easier_timeline.action_items,
        key_focus: "Easier entry point - faster timeline".to_string(),
        milestones: easier_timeline.milestones,
        min_months: easier_timeline.min_months as i64,
        max_months: easier_timeline.max_months as i64,
        timeline_text: easier_timeline.timeline_text,
        card_type: CardType::EasierCompany.as_str().to_string(),
    });

    let alt_role = alternative_role(&quiz.target_role);
    let alt_timeline = estimate_for_card(persona, CardType::DifferentRole, quiz);
    tracing::debug!(
        persona_id,
        persona = %persona.display_name,
        alt_role,
        "generated opportunity cards"
    );
    cards.push(JobOpportunityCard {
        title: role_at_company(alt_role, &target_company),
        role: alt_role.to_string(),
        copy: alt_timeline.copy,
        goal: alt_timeline.goal,
        action_items: alt_timeline.action_items,
        key_focus: "Alternative specialization - expands your options".to_string(),
        milestones: alt_timeline.milestones,
        min_months: alt_timeline.min_months as i64,
        max_months: alt_timeline.max_months as i64,
        timeline_text: alt_timeline.timeline_text,
        card_type: CardType::DifferentRole.as_str().to_string(),
    });

    cards
}

fn exploring_cards() -> Vec<JobOpportunityCard> {
    vec![
        JobOpportunityCard {
            title: "Frontend Engineer (Intern)".to_string(),
            role: "frontend".to_string(),
            copy: "Want to test if you enjoy building UIs? Frontend is visual, gives \
                   immediate feedback, and is beginner-friendly."
                .to_string(),
            goal: "Complete 2-3 frontend projects and decide if this specialization excites you."
                .to_string(),
            action_items: vec![
                "Build a simple to-do app with React".to_string(),
                "Create a portfolio website to showcase your work".to_string(),
                "Learn responsive design principles".to_string(),
            ],
            key_focus: "Understanding user interfaces and learning JavaScript fundamentals"
                .to_string(),
            milestones: vec![
                "Month 1: HTML, CSS, JavaScript basics".to_string(),
                "Month 2: Learn React or Vue framework".to_string(),
                "Month 3: Build frontend projects and decide your path".to_string(),
            ],
            min_months: 3,
            max_months: 6,
            timeline_text: "3-6 months".to_string(),
            card_type: "intern_explore_1".to_string(),
        },
        JobOpportunityCard {
            title: "Backend Engineer (Intern)".to_string(),
            role: "backend".to_string(),
            copy: "Prefer building APIs and databases? Backend is the foundation - trickier, \
                   but more powerful and lucrative."
                .to_string(),
            goal: "Complete 2-3 backend projects and decide if this specialization excites you."
                .to_string(),
            action_items: vec![
                "Build a simple REST API with Node.js or Python".to_string(),
                "Learn database design and SQL".to_string(),
                "Understand how frontend and backend communicate".to_string(),
            ],
            key_focus: "Understanding server-side logic, databases, and API design".to_string(),
            milestones: vec![
                "Month 1: Python/Node.js basics and databases".to_string(),
                "Month 2: Build simple API projects".to_string(),
                "Month 3: Decide between frontend, backend, or full-stack".to_string(),
            ],
            min_months: 3,
            max_months: 6,
            timeline_text: "3-6 months".to_string(),
            card_type: "intern_explore_2".to_string(),
        },
    ]
}
