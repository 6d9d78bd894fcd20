//! Quick-win generation.
//!
//! Nested conditional rules keyed on role, experience, practice and portfolio
//! state produce prioritised action items; a fallback pool tops the list up
//! to at least three entries (title-deduplicated), and the result is sorted
//! by priority and truncated to five.

use serde::Serialize;

use crate::models::questionnaire::{
    Background, CurrentRole, Experience, Portfolio, ProblemSolving, QuizResponses, SystemDesign,
};

#[derive(Debug, Clone, Serialize)]
pub struct QuickWin {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(skip)]
    priority: i32,
}

const MIN_WINS: usize = 3;
const MAX_WINS: usize = 5;

fn win(title: &str, description: &str, icon: &str, priority: i32) -> QuickWin {
    QuickWin {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        priority,
    }
}

/// Experience maturity used to branch the rule tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserLevel {
    Beginner,
    Intermediate,
    Advanced,
}

fn determine_user_level(quiz: &QuizResponses) -> UserLevel {
    if quiz.experience.is_senior() {
        return UserLevel::Advanced;
    }

    if quiz.experience == Experience::ThreeToFive {
        let mut signals = 0;
        if matches!(
            quiz.portfolio,
            Portfolio::ActiveFivePlus | Portfolio::LimitedOneToFive
        ) {
            signals += 1;
        }
        if matches!(quiz.current_role, CurrentRole::SweProduct | CurrentRole::Devops) {
            signals += 1;
        }
        if matches!(quiz.system_design, SystemDesign::Once | SystemDesign::Multiple) {
            signals += 1;
        }
        if quiz.problem_solving >= ProblemSolving::FiftyOneToHundred {
            signals += 1;
        }
        if signals >= 2 {
            return UserLevel::Advanced;
        }
    }

    if quiz.experience.is_under_two_years()
        && quiz.problem_solving == ProblemSolving::ZeroToTen
        && quiz.portfolio == Portfolio::None
    {
        return UserLevel::Beginner;
    }

    UserLevel::Intermediate
}

pub fn generate_quick_wins(background: Background, quiz: &QuizResponses) -> Vec<QuickWin> {
    let mut wins = match background {
        Background::Tech => tech_wins(quiz),
        Background::NonTech => non_tech_wins(quiz),
    };

    if wins.len() < MIN_WINS {
        let fallbacks = match background {
            Background::Tech => tech_fallbacks(quiz),
            Background::NonTech => non_tech_fallbacks(&wins),
        };
        for fallback in fallbacks {
            if wins.len() >= MAX_WINS {
                break;
            }
            if !wins.iter().any(|w| w.title == fallback.title) {
                wins.push(fallback);
            }
        }
    }

    // Stable sort keeps insertion order among equal priorities.
    wins.sort_by(|a, b| b.priority.cmp(&a.priority));
    wins.truncate(MAX_WINS);
    wins
}

fn tech_wins(quiz: &QuizResponses) -> Vec<QuickWin> {
    let mut wins = Vec::new();
    let level = determine_user_level(quiz);

    match quiz.problem_solving {
        ProblemSolving::ZeroToTen => {
            let exp = quiz.experience.as_str();
            if quiz.experience == Experience::EightPlus {
                wins.push(win(
                    "Refresh Interview Skills",
                    &format!(
                        "Your {exp} years building production systems is valuable. Refresh \
                         interview skills with 30 easy + 50 medium problems over 6-8 weeks."
                    ),
                    "trophy",
                    100,
                ));
            } else if quiz.experience == Experience::FiveToEight {
                wins.push(win(
                    "Sharpen Interview Skills",
                    &format!(
                        "Your {exp} years of experience shows strong fundamentals. Sharpen \
                         interview prep with 50-80 problems focusing on common patterns."
                    ),
                    "trophy",
                    100,
                ));
            } else if quiz.experience == Experience::ThreeToFive || level == UserLevel::Advanced {
                wins.push(win(
                    "Strengthen Interview Prep",
                    &format!(
                        "Your {exp} years of professional experience is valuable. Focus \
                         interview prep on 50-100 problems to unlock senior opportunities."
                    ),
                    "trophy",
                    100,
                ));
            } else {
                wins.push(win(
                    "Build Coding Foundation",
                    "Solve 20 easy problems focusing on arrays and strings.",
                    "code",
                    100,
                ));
            }
        }
        ProblemSolving::ElevenToFifty => wins.push(win(
            "Strengthen Problem Solving",
            "Solve 30 medium problems focusing on Trees, Graphs, and Dynamic Programming.",
            "trophy",
            95,
        )),
        ProblemSolving::FiftyOneToHundred => wins.push(win(
            "Master Advanced Patterns",
            "Solve 20 hard problems and participate in 2 weekly coding contests.",
            "trophy",
            90,
        )),
        ProblemSolving::HundredPlus => {}
    }

    if quiz.system_design == SystemDesign::NotYet && level != UserLevel::Beginner {
        wins.push(win(
            "Start System Design Prep",
            "Read 'Designing Data-Intensive Applications' and design 1 system (URL shortener, chat app).",
            "books",
            95,
        ));
    } else if quiz.system_design == SystemDesign::Once && level == UserLevel::Advanced {
        wins.push(win(
            "Deep Dive System Design",
            "Study 5 real-world system designs (Netflix, Uber, Instagram). Focus on trade-offs and scalability.",
            "books",
            90,
        ));
    }

    if quiz.experience.is_senior() && level == UserLevel::Advanced {
        if matches!(quiz.system_design, SystemDesign::Once | SystemDesign::Multiple)
            && quiz.problem_solving >= ProblemSolving::FiftyOneToHundred
        {
            wins.push(win(
                "Schedule Mock Interviews",
                "Book 3-5 mock interviews to practice articulating your experience and design thinking.",
                "trophy",
                92,
            ));
        }
        wins.push(win(
            "Prepare Leadership Stories",
            "Document 5-7 STAR stories showcasing impact, leadership and problem-solving. Quantify results.",
            "certificate",
            90,
        ));
    }

    if matches!(
        quiz.target_role.as_str(),
        "senior-backend" | "senior-fullstack" | "tech-lead"
    ) && !quiz.experience.is_under_two_years()
    {
        wins.push(win(
            "Senior Role Interview Prep",
            "Complete a 90-day plan: 60 problems + 20 system designs + 10 behavioral questions.",
            "trophy",
            95,
        ));
    }

    match quiz.portfolio {
        Portfolio::None if level != UserLevel::Beginner => wins.push(win(
            "Build GitHub Presence",
            "Create a GitHub account and upload 3-5 well-documented projects from your work.",
            "rocket",
            75,
        )),
        Portfolio::LimitedOneToFive => wins.push(win(
            "Expand Portfolio Quality",
            "Add README, tests, and CI to existing projects. Host 1 project live.",
            "rocket",
            70,
        )),
        _ => {}
    }

    if !quiz.experience.is_under_two_years() && level != UserLevel::Beginner {
        wins.push(win(
            "Build Technical Brand",
            "Write 3 technical blog posts or tutorials on topics you've mastered.",
            "certificate",
            65,
        ));
    }

    wins
}

fn non_tech_wins(quiz: &QuizResponses) -> Vec<QuickWin> {
    let mut wins = Vec::new();

    if quiz.current_role == CurrentRole::CareerSwitcher {
        wins.push(win(
            "Start with Programming Basics",
            "Try an intro Python course and build a small automation like an Excel-to-CSV script.",
            "code",
            95,
        ));
    } else if quiz.current_role == CurrentRole::QaSupport {
        wins.push(win(
            "Brush Up Coding Fundamentals",
            "Focus on loops and conditions. Solve 5 beginner problems this week.",
            "code",
            90,
        ));
    }

    if quiz.experience.is_under_two_years() {
        wins.push(win(
            "Build Your First Project",
            "Create a mini-project like a to-do app or calculator to showcase basic skills.",
            "rocket",
            85,
        ));
    } else if quiz.experience == Experience::ThreeToFive {
        wins.push(win(
            "Showcase Transition Intent",
            "Add 2-3 measurable projects to your portfolio showing your transition to tech.",
            "trophy",
            80,
        ));
    }

    if quiz.problem_solving >= ProblemSolving::ElevenToFifty {
        let target = quiz.target_role.to_lowercase();
        if target.contains("backend") {
            wins.push(win(
                "Build a Simple REST API",
                "Create a basic REST API with 2-3 endpoints using Flask or Django. Learn SQL basics.",
                "code",
                75,
            ));
        } else if target.contains("fullstack") {
            wins.push(win(
                "Build a Web App",
                "Create a simple web app with HTML, CSS, JavaScript. Host it publicly.",
                "rocket",
                75,
            ));
        }
    }

    if quiz.portfolio == Portfolio::None {
        wins.push(win(
            "Set Up GitHub Profile",
            "Create a GitHub account and upload 1-2 practice projects to start your portfolio.",
            "target",
            70,
        ));
    }

    wins
}

fn tech_fallbacks(quiz: &QuizResponses) -> Vec<QuickWin> {
    let mut fallbacks = Vec::new();

    if !quiz.experience.is_senior() {
        fallbacks.push(win(
            "Practice Coding Regularly",
            "Set aside 1 hour daily for coding practice. Consistency beats intensity.",
            "code",
            50,
        ));
    }

    if matches!(quiz.system_design, SystemDesign::Once | SystemDesign::Multiple) {
        fallbacks.push(win(
            "Document System Design Decisions",
            "Write 2-3 design docs for systems you've built. Practice explaining trade-offs.",
            "books",
            50,
        ));
    }

    fallbacks.push(win(
        "Prepare for Behavioral Interviews",
        "Use the STAR method to prepare 5 stories covering leadership and problem-solving.",
        "trophy",
        45,
    ));
    fallbacks.push(win(
        "Update Your Resume",
        "Quantify achievements (reduced load time by 40%, handled 10K+ users). Use action verbs.",
        "certificate",
        40,
    ));

    fallbacks
}

fn non_tech_fallbacks(existing: &[QuickWin]) -> Vec<QuickWin> {
    let mut fallbacks = Vec::new();

    if !existing
        .iter()
        .any(|w| w.title.to_lowercase().contains("basic") || w.title.to_lowercase().contains("programming"))
    {
        fallbacks.push(win(
            "Complete One Online Course",
            "Finish a beginner-friendly course on Python, JavaScript, or SQL this month.",
            "code",
            50,
        ));
    }

    if !existing.iter().any(|w| w.title.to_lowercase().contains("project")) {
        fallbacks.push(win(
            "Build Your First Tech Project",
            "Create a simple project like a calculator, to-do list, or personal website.",
            "rocket",
            50,
        ));
    }

    fallbacks.push(win(
        "Network with Tech Professionals",
        "Join 2-3 tech communities. Ask questions and share what you learn.",
        "trophy",
        45,
    ));
    fallbacks.push(win(
        "Set Learning Goals",
        "Define specific, measurable goals: 'Learn Python basics in 4 weeks', not 'learn programming'.",
        "target",
        40,
    ));

    fallbacks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(
        experience: &str,
        problem_solving: &str,
        system_design: &str,
        portfolio: &str,
        current_role: &str,
        target_role: &str,
    ) -> QuizResponses {
        QuizResponses {
            experience: Experience::from(experience.to_string()),
            problem_solving: ProblemSolving::from(problem_solving.to_string()),
            system_design: SystemDesign::from(system_design.to_string()),
            portfolio: Portfolio::from(portfolio.to_string()),
            current_role: CurrentRole::from(current_role.to_string()),
            target_role: target_role.to_string(),
            ..QuizResponses::default()
        }
    }

    #[test]
    fn test_always_between_three_and_five_wins() {
        let cases = [
            quiz("0-2", "0-10", "not-yet", "none", "swe-service", "backend-sde"),
            quiz("8+", "100+", "multiple", "active-5+", "swe-product", "tech-lead"),
            quiz("3-5", "51-100", "once", "limited-1-5", "devops", "senior-backend"),
            quiz("0", "0-10", "not-yet", "none", "career-switcher", "exploring"),
        ];
        for (i, q) in cases.iter().enumerate() {
            for background in [Background::Tech, Background::NonTech] {
                let wins = generate_quick_wins(background, q);
                assert!(
                    (MIN_WINS..=MAX_WINS).contains(&wins.len()),
                    "case {i}: got {} wins",
                    wins.len()
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_titles() {
        let q = quiz("3-5", "11-50", "not-yet", "limited-1-5", "swe-service", "backend-sde");
        let wins = generate_quick_wins(Background::Tech, &q);
        let mut titles: Vec<_> = wins.iter().map(|w| w.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), wins.len());
    }

    #[test]
    fn test_sorted_by_priority_descending() {
        let q = quiz("5-8", "0-10", "not-yet", "none", "swe-product", "senior-backend");
        let wins = generate_quick_wins(Background::Tech, &q);
        for pair in wins.windows(2) {
            assert!(pair[0].priority >= pair[1].priority);
        }
    }

    #[test]
    fn test_senior_with_no_practice_gets_respectful_framing() {
        let q = quiz("8+", "0-10", "multiple", "active-5+", "swe-product", "tech-lead");
        let wins = generate_quick_wins(Background::Tech, &q);
        assert_eq!(wins[0].title, "Refresh Interview Skills");
    }

    #[test]
    fn test_beginner_gets_foundation_first() {
        let q = quiz("0-2", "0-10", "not-yet", "none", "swe-service", "backend-sde");
        let wins = generate_quick_wins(Background::Tech, &q);
        assert_eq!(wins[0].title, "Build Coding Foundation");
    }

    #[test]
    fn test_non_tech_switcher_starts_with_basics() {
        let q = quiz("3-5", "0-10", "not-yet", "none", "career-switcher", "backend");
        let wins = generate_quick_wins(Background::NonTech, &q);
        assert!(wins.iter().any(|w| w.title == "Start with Programming Basics"));
    }
}
