//! Persona catalog — static reference data for the 25-persona system.
//!
//! Tech: 4 current roles × 5 experience tiers = 20 personas.
//! Non-tech: 5 target-role buckets (including "exploring") = 5 personas.
//!
//! The catalog is built once at startup and injected through `AppState`;
//! nothing in the engine touches process-wide mutable state.

use std::collections::HashMap;

use crate::models::questionnaire::{Background, Portfolio, ProblemSolving, SystemDesign};

/// One of the three framings a recommended path can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Target,
    EasierCompany,
    DifferentRole,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Target => "target",
            CardType::EasierCompany => "alternative_1_easier_company",
            CardType::DifferentRole => "alternative_2_different_role",
        }
    }
}

/// Copy and milestone template for one card of one persona.
#[derive(Debug, Clone)]
pub struct PersonaCard {
    pub card_type: CardType,
    pub copy: String,
    pub goal: String,
    pub action_items: Vec<String>,
    pub milestones: Vec<String>,
    /// Months added (or subtracted, for stepping-stone cards) on top of the
    /// persona baseline.
    pub timeline_adjustment: i32,
}

/// Months added per remaining shortfall, indexed by answer ordinal
/// (ascending practice order).
#[derive(Debug, Clone, Copy)]
pub struct GapAdjustments {
    pub problem_solving: [i32; 4],
    pub system_design: [i32; 4],
    pub portfolio: [i32; 4],
}

impl GapAdjustments {
    pub fn months_for(
        &self,
        problem_solving: ProblemSolving,
        system_design: SystemDesign,
        portfolio: Portfolio,
    ) -> i32 {
        self.problem_solving[problem_solving.ordinal()]
            + self.system_design[system_design.ordinal()]
            + self.portfolio[portfolio.ordinal()]
    }
}

/// A named cohort template carrying baseline timeline and content defaults.
#[derive(Debug, Clone)]
pub struct Persona {
    pub id: String,
    pub domain: Background,
    pub display_name: String,
    pub base_timeline_months: i32,
    pub cards: Vec<PersonaCard>,
    pub gap_adjustments: GapAdjustments,
    /// Matching hints used by the weighted matcher.
    pub role_key: String,
    pub tier_key: String,
}

impl Persona {
    pub fn card(&self, card_type: CardType) -> Option<&PersonaCard> {
        self.cards.iter().find(|c| c.card_type == card_type)
    }
}

/// Insertion-ordered persona store. Iteration order is part of the contract:
/// the weighted matcher breaks ties by first-seen.
#[derive(Debug)]
pub struct PersonaCatalog {
    personas: Vec<Persona>,
    index: HashMap<String, usize>,
}

pub const DEFAULT_TECH_PERSONA: &str = "swe_product_mid2";
pub const DEFAULT_NON_TECH_PERSONA: &str = "nontech_exploring";

impl PersonaCatalog {
    pub fn get(&self, id: &str) -> Option<&Persona> {
        self.index.get(id).map(|&i| &self.personas[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    fn push(&mut self, persona: Persona) {
        self.index.insert(persona.id.clone(), self.personas.len());
        self.personas.push(persona);
    }

    /// Builds the full 25-persona catalog.
    pub fn builtin() -> Self {
        let mut catalog = PersonaCatalog {
            personas: Vec::new(),
            index: HashMap::new(),
        };

        for (role_key, role_name) in [
            ("swe_product", "Product Company SDE"),
            ("swe_service", "Service Company SDE"),
            ("devops", "DevOps / Infrastructure Engineer"),
            ("qa_support", "QA / Support Engineer"),
        ] {
            for tier in &TECH_TIERS {
                catalog.push(tech_persona(role_key, role_name, tier));
            }
        }

        for (bucket, role_name, base_months) in [
            ("frontend", "Frontend Engineer", 6),
            ("backend", "Backend Engineer", 7),
            ("fullstack", "Full-Stack Engineer", 8),
            ("dataml", "Data / ML Engineer", 8),
            ("exploring", "Exploring Tech Roles", 6),
        ] {
            catalog.push(non_tech_persona(bucket, role_name, base_months));
        }

        catalog
    }
}

/// Tier descriptor: key, base months, gap tables.
struct TechTier {
    key: &'static str,
    base_months: i32,
    gaps: GapAdjustments,
}

const TECH_TIERS: [TechTier; 5] = [
    TechTier {
        key: "junior",
        base_months: 6,
        gaps: GapAdjustments {
            problem_solving: [4, 2, 1, 0],
            system_design: [1, 1, 0, 0],
            portfolio: [2, 1, 0, 0],
        },
    },
    TechTier {
        key: "mid1",
        base_months: 5,
        gaps: GapAdjustments {
            problem_solving: [4, 2, 1, 0],
            system_design: [2, 1, 0, 0],
            portfolio: [2, 1, 0, 0],
        },
    },
    TechTier {
        key: "mid2",
        base_months: 4,
        gaps: GapAdjustments {
            problem_solving: [5, 3, 1, 0],
            system_design: [3, 2, 1, 0],
            portfolio: [2, 1, 1, 0],
        },
    },
    TechTier {
        key: "senior",
        base_months: 4,
        gaps: GapAdjustments {
            problem_solving: [5, 3, 1, 0],
            system_design: [4, 3, 1, 0],
            portfolio: [2, 1, 1, 0],
        },
    },
    TechTier {
        key: "expert",
        base_months: 3,
        gaps: GapAdjustments {
            problem_solving: [6, 3, 1, 0],
            system_design: [4, 3, 1, 0],
            portfolio: [1, 1, 0, 0],
        },
    },
];

fn tech_persona(role_key: &str, role_name: &str, tier: &TechTier) -> Persona {
    let id = format!("{role_key}_{}", tier.key);
    let cards = vec![
        PersonaCard {
            card_type: CardType::Target,
            copy: format!(
                "Your stated goal. As a {role_name} you already have the day-to-day \
                 exposure; close the interview-specific gaps and go for it."
            ),
            goal: "Clear the interview bar at your target company.".to_string(),
            action_items: vec![
                "Work through a structured problem set matched to your weakest topic".to_string(),
                "Do one timed mock interview every two weeks".to_string(),
                "Keep a log of every problem you could not finish and revisit it".to_string(),
            ],
            milestones: vec![
                "Month 1: Close the biggest practice gap identified below".to_string(),
                "Month 2: Timed mocks and company-specific preparation".to_string(),
                "Month 3: Applications and interview loops".to_string(),
            ],
            timeline_adjustment: 0,
        },
        PersonaCard {
            card_type: CardType::EasierCompany,
            copy: "Same role, friendlier entry bar. A stepping-stone offer builds leverage \
                   and interview reps while you keep preparing for the main goal."
                .to_string(),
            goal: "Land the same role one rung down the difficulty ladder, faster.".to_string(),
            action_items: vec![
                "Apply to 5-8 companies in this bracket this month".to_string(),
                "Treat every onsite as a rehearsal for the target company".to_string(),
            ],
            milestones: vec![
                "Month 1: Resume refresh and first application wave".to_string(),
                "Month 2: Interview loops at stepping-stone companies".to_string(),
            ],
            timeline_adjustment: -1,
        },
        PersonaCard {
            card_type: CardType::DifferentRole,
            copy: "An adjacent specialization that values the skills you already have. \
                   Longer runway, but it widens your market considerably."
                .to_string(),
            goal: "Build a credible profile in the alternative specialization.".to_string(),
            action_items: vec![
                "Ship one substantial project in the new specialization".to_string(),
                "Pair the new skill with your existing domain knowledge in your resume".to_string(),
            ],
            milestones: vec![
                "Months 1-3: Foundations of the new specialization".to_string(),
                "Months 4-6: A portfolio project that proves the switch".to_string(),
                "Months 7+: Applications with the repositioned profile".to_string(),
            ],
            timeline_adjustment: 2,
        },
    ];

    Persona {
        id,
        domain: Background::Tech,
        display_name: format!("{role_name} ({})", tier.key),
        base_timeline_months: tier.base_months,
        cards,
        gap_adjustments: tier.gaps,
        role_key: role_key.to_string(),
        tier_key: tier.key.to_string(),
    }
}

fn non_tech_persona(bucket: &str, role_name: &str, base_months: i32) -> Persona {
    let cards = vec![
        PersonaCard {
            card_type: CardType::Target,
            copy: format!(
                "The {role_name} path. Career switchers land this role every hiring cycle; \
                 consistency matters far more than your starting point."
            ),
            goal: format!("Become interview-ready for an entry-level {role_name} role."),
            action_items: vec![
                "Finish one structured course end to end, no skipping".to_string(),
                "Build two small but complete projects and put them online".to_string(),
                "Practice explaining your projects out loud".to_string(),
            ],
            milestones: vec![
                "Months 1-2: Programming fundamentals, daily practice".to_string(),
                "Months 3-4: First real project, reviewed and deployed".to_string(),
                "Months 5+: Interview practice and applications".to_string(),
            ],
            timeline_adjustment: 0,
        },
        PersonaCard {
            card_type: CardType::EasierCompany,
            copy: "Start at a services or early-stage company. The first tech job is the \
                   hardest one to get; the second comes much faster."
                .to_string(),
            goal: "Get the first paid tech role, then level up from inside.".to_string(),
            action_items: vec![
                "Target companies that hire switchers: services firms, agencies, startups"
                    .to_string(),
                "Lead your resume with projects, not prior titles".to_string(),
            ],
            milestones: vec![
                "Months 1-2: Portfolio ready and public".to_string(),
                "Months 3-4: Broad application wave, interview practice".to_string(),
            ],
            timeline_adjustment: -1,
        },
        PersonaCard {
            card_type: CardType::DifferentRole,
            copy: "A neighbouring role that shares most of the learning path, in case the \
                   first choice stops feeling right."
                .to_string(),
            goal: "Keep a second path warm while you commit to the first.".to_string(),
            action_items: vec![
                "Spend one week sampling the adjacent track before deciding".to_string(),
            ],
            milestones: vec![
                "Months 1-3: Shared fundamentals for both tracks".to_string(),
                "Month 4: Commit to one specialization".to_string(),
            ],
            timeline_adjustment: 2,
        },
    ];

    Persona {
        id: format!("nontech_{bucket}"),
        domain: Background::NonTech,
        display_name: role_name.to_string(),
        base_timeline_months: base_months,
        // Non-tech timelines adjust on experience, not on tech gap tables.
        gap_adjustments: GapAdjustments {
            problem_solving: [0; 4],
            system_design: [0; 4],
            portfolio: [0; 4],
        },
        cards,
        role_key: bucket.to_string(),
        tier_key: "entry".to_string(),
    }
}

/// Alternative specialization suggested on the different-role card.
pub fn alternative_role(target_role: &str) -> &'static str {
    match target_role {
        "backend-sde" | "backend" | "backend-dev" => "devops-sre",
        "fullstack-sde" | "fullstack" | "fullstack-dev" => "frontend",
        "frontend-sde" | "frontend" => "fullstack-sde",
        "data-ml" => "backend-sde",
        "senior-backend" => "tech-lead",
        "tech-lead" => "senior-backend",
        "devops-sre" | "devops" => "backend-sde",
        "mobile-dev" => "fullstack-sde",
        _ => "fullstack-sde",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_25_personas() {
        let catalog = PersonaCatalog::builtin();
        assert_eq!(catalog.len(), 25);
    }

    #[test]
    fn test_every_persona_has_three_cards() {
        let catalog = PersonaCatalog::builtin();
        for persona in catalog.iter() {
            assert_eq!(persona.cards.len(), 3, "persona {}", persona.id);
            assert!(persona.card(CardType::Target).is_some());
            assert!(persona.card(CardType::EasierCompany).is_some());
            assert!(persona.card(CardType::DifferentRole).is_some());
        }
    }

    #[test]
    fn test_default_personas_exist() {
        let catalog = PersonaCatalog::builtin();
        assert!(catalog.get(DEFAULT_TECH_PERSONA).is_some());
        assert!(catalog.get(DEFAULT_NON_TECH_PERSONA).is_some());
    }

    #[test]
    fn test_tech_personas_precede_non_tech_in_iteration_order() {
        let catalog = PersonaCatalog::builtin();
        let first = catalog.iter().next().unwrap();
        assert_eq!(first.id, "swe_product_junior");
        let last = catalog.iter().last().unwrap();
        assert_eq!(last.id, "nontech_exploring");
    }

    #[test]
    fn test_gap_months_shrink_as_practice_grows() {
        let catalog = PersonaCatalog::builtin();
        let persona = catalog.get("swe_product_mid2").unwrap();
        let weak = persona.gap_adjustments.months_for(
            ProblemSolving::ZeroToTen,
            SystemDesign::NotYet,
            Portfolio::None,
        );
        let strong = persona.gap_adjustments.months_for(
            ProblemSolving::HundredPlus,
            SystemDesign::Multiple,
            Portfolio::ActiveFivePlus,
        );
        assert!(weak > strong);
        assert_eq!(strong, 0);
    }

    #[test]
    fn test_alternative_role_mapping() {
        assert_eq!(alternative_role("backend-sde"), "devops-sre");
        assert_eq!(alternative_role("tech-lead"), "senior-backend");
        assert_eq!(alternative_role("something-else"), "fullstack-sde");
    }
}
