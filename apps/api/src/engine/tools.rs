//! Tool recommendations.
//!
//! Professional, role-specific tooling only, never the generic platforms
//! every candidate already knows. Rules key on target role, current skill
//! and seniority; a generic fill keeps the list at 5+, deduplicated and
//! truncated to 8.

use crate::models::questionnaire::{
    Background, CurrentRole, Experience, QuizResponses, SystemDesign,
};

const MAX_TOOLS: usize = 8;

pub fn generate_tool_recommendations(background: Background, quiz: &QuizResponses) -> Vec<String> {
    let mut tools: Vec<String> = match background {
        Background::Tech => tech_tools(quiz),
        Background::NonTech => non_tech_tools(quiz),
    };

    let mut seen = std::collections::HashSet::new();
    tools.retain(|t| seen.insert(t.clone()));
    tools.truncate(MAX_TOOLS);
    tools
}

fn push_all(tools: &mut Vec<String>, items: &[&str]) {
    tools.extend(items.iter().map(|s| s.to_string()));
}

fn tech_tools(quiz: &QuizResponses) -> Vec<String> {
    let mut tools = Vec::new();
    let experienced = !quiz.experience.is_under_two_years()
        && quiz.experience != Experience::TwoToThree;
    let target = quiz.target_role.to_lowercase();
    let skill = quiz.current_skill.to_lowercase();

    if experienced || matches!(quiz.system_design, SystemDesign::Once | SystemDesign::Multiple) {
        push_all(
            &mut tools,
            &[
                "Excalidraw or Draw.io - System architecture diagrams",
                "Miro - Collaborative design whiteboarding",
            ],
        );
    }

    if skill.contains("backend") || skill.contains("database") || target.contains("backend") {
        push_all(
            &mut tools,
            &[
                "Postman or Insomnia - API development and testing",
                "DataGrip or DBeaver - Advanced database management",
                "Docker - Containerization for local development",
                "k6 or Locust - Load testing and performance",
            ],
        );
        if experienced || quiz.system_design != SystemDesign::NotYet {
            push_all(
                &mut tools,
                &[
                    "Terraform - Infrastructure as Code",
                    "Prometheus + Grafana - Monitoring and metrics",
                ],
            );
        }
    } else if skill.contains("frontend") || skill.contains("web") || target.contains("frontend") {
        push_all(
            &mut tools,
            &[
                "React DevTools - Browser debugging extension",
                "Lighthouse - Performance and accessibility audits",
                "Storybook - Component documentation and testing",
                "Webpack Bundle Analyzer - Bundle size optimization",
            ],
        );
        if experienced {
            push_all(
                &mut tools,
                &[
                    "Chromatic - Visual regression testing",
                    "Sentry - Error tracking and monitoring",
                ],
            );
        }
    } else if skill.contains("fullstack") || target.contains("fullstack") {
        push_all(
            &mut tools,
            &[
                "Postman - API development and testing",
                "Docker - Full-stack containerization",
                "React DevTools - Frontend debugging",
                "GitHub Actions or Jenkins - CI/CD pipelines",
            ],
        );
        if experienced {
            push_all(
                &mut tools,
                &[
                    "Datadog or New Relic - Application monitoring",
                    "Sentry - Error tracking across the stack",
                ],
            );
        }
    } else if quiz.current_role == CurrentRole::Devops
        || ["cloud", "containers", "cicd", "iac"].iter().any(|k| skill.contains(k))
    {
        push_all(
            &mut tools,
            &[
                "Terraform or Pulumi - Infrastructure as Code",
                "Kubernetes Dashboard - Cluster management",
                "Prometheus + Grafana - Metrics and alerting",
                "ArgoCD - GitOps continuous delivery",
            ],
        );
        if experienced {
            push_all(
                &mut tools,
                &[
                    "Datadog - Cloud infrastructure monitoring",
                    "Vault - Secrets management",
                ],
            );
        }
    } else if target.contains("data") || target.contains("ml") {
        push_all(
            &mut tools,
            &[
                "MLflow - ML experiment tracking",
                "Weights & Biases - Model training visualization",
                "Airflow or Prefect - Data pipeline orchestration",
                "Great Expectations - Data quality testing",
            ],
        );
        if experienced {
            push_all(
                &mut tools,
                &[
                    "Databricks - Big data and ML platform",
                    "Kubeflow - ML operations on Kubernetes",
                ],
            );
        }
    } else if target.contains("tech-lead") || quiz.system_design == SystemDesign::Multiple {
        push_all(
            &mut tools,
            &[
                "Excalidraw - System architecture diagrams",
                "Miro - Team collaboration and whiteboarding",
                "Terraform - Infrastructure design and management",
                "Datadog or New Relic - Production system monitoring",
                "Sentry or Rollbar - Error tracking and alerting",
                "PagerDuty - Incident management",
            ],
        );
    }

    if tools.len() < 5 {
        push_all(
            &mut tools,
            &[
                "Postman - API development and testing",
                "Docker - Containerization basics",
                "Sentry - Error tracking and monitoring",
            ],
        );
    }

    tools
}

fn non_tech_tools(quiz: &QuizResponses) -> Vec<String> {
    let mut tools = Vec::new();
    let target = quiz.target_role.to_lowercase();

    if target.contains("backend") {
        push_all(
            &mut tools,
            &[
                "Postman - API testing and debugging",
                "DBeaver - Database client for SQL learning",
                "Flask or Django - Python web frameworks",
                "Replit - Online coding environment (no setup needed)",
                "TablePlus - Visual database management",
            ],
        );
    } else if target.contains("fullstack") {
        push_all(
            &mut tools,
            &[
                "CodeSandbox - Online React playground",
                "Postman - API testing and integration",
                "MongoDB Compass - Visual database tool",
                "React DevTools - Browser extension for debugging",
                "Netlify or Vercel - One-click deployment platforms",
            ],
        );
    } else if target.contains("data-ml") || target == "data/ml" {
        push_all(
            &mut tools,
            &[
                "Jupyter Notebook - Interactive Python environment",
                "Pandas & NumPy - Data manipulation libraries",
                "Kaggle - Dataset repository and competitions",
                "Google Colab - Free cloud Jupyter environment",
                "Matplotlib & Seaborn - Data visualization libraries",
            ],
        );
    } else if target.contains("data") {
        push_all(
            &mut tools,
            &[
                "Power BI or Tableau - Dashboard creation tools",
                "DBeaver - SQL query and database management",
                "Excel Power Query - Advanced data transformation",
                "Kaggle Datasets - Practice with real-world data",
                "Google Data Studio - Free dashboard tool",
            ],
        );
    } else {
        push_all(
            &mut tools,
            &[
                "Replit - Online coding (no local setup)",
                "Postman - API testing basics",
                "CodeSandbox - Frontend practice",
                "DBeaver - SQL learning and practice",
                "Notion - Learning plan and progress tracking",
            ],
        );
    }

    tools
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::questionnaire::{Experience, SystemDesign};

    fn quiz(experience: &str, system_design: &str, target_role: &str, current_skill: &str) -> QuizResponses {
        QuizResponses {
            experience: Experience::from(experience.to_string()),
            system_design: SystemDesign::from(system_design.to_string()),
            target_role: target_role.to_string(),
            current_skill: current_skill.to_string(),
            ..QuizResponses::default()
        }
    }

    #[test]
    fn test_backend_track_gets_backend_tooling() {
        let tools = generate_tool_recommendations(
            Background::Tech,
            &quiz("3-5", "once", "backend-sde", "backend"),
        );
        assert!(tools.iter().any(|t| t.contains("Postman")));
        assert!(tools.iter().any(|t| t.contains("Terraform")));
    }

    #[test]
    fn test_list_bounded_and_deduplicated() {
        for target in ["backend-sde", "frontend", "fullstack", "data-ml", "tech-lead", "other"] {
            let tools = generate_tool_recommendations(
                Background::Tech,
                &quiz("5-8", "multiple", target, ""),
            );
            assert!(tools.len() >= 3, "{target}: {tools:?}");
            assert!(tools.len() <= MAX_TOOLS);
            let mut sorted = tools.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), tools.len(), "duplicates for {target}");
        }
    }

    #[test]
    fn test_junior_without_design_skips_architecture_tools() {
        let tools = generate_tool_recommendations(
            Background::Tech,
            &quiz("0-2", "not-yet", "backend-sde", "backend"),
        );
        assert!(!tools.iter().any(|t| t.contains("Miro")));
    }

    #[test]
    fn test_non_tech_data_analyst_gets_bi_stack() {
        let tools = generate_tool_recommendations(
            Background::NonTech,
            &quiz("0-2", "not-yet", "data-analyst", ""),
        );
        assert!(tools.iter().any(|t| t.contains("Power BI") || t.contains("Tableau")));
    }

    #[test]
    fn test_non_tech_fallback_pool() {
        let tools = generate_tool_recommendations(
            Background::NonTech,
            &quiz("0", "not-yet", "exploring", ""),
        );
        assert!(tools.len() >= 5);
    }

    #[test]
    fn test_never_recommends_generic_platforms() {
        let banned = ["LeetCode", "HackerRank", "GitHub -", "Coursera", "VS Code"];
        for background in [Background::Tech, Background::NonTech] {
            for target in ["backend-sde", "frontend", "data-ml", "tech-lead", "exploring"] {
                let tools = generate_tool_recommendations(
                    background,
                    &quiz("3-5", "once", target, ""),
                );
                for tool in &tools {
                    assert!(
                        !banned.iter().any(|b| tool.contains(b)),
                        "banned tool {tool} for {target}"
                    );
                }
            }
        }
    }
}
