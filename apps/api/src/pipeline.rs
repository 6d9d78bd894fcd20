//! The evaluation pipeline.
//!
//! normalize → cache lookup → deterministic engines → LLM orchestration →
//! enrichment → cache write. Deterministic computations are pure and
//! I/O-free; the only shared mutable resource is the cache, and its failures
//! never fail the request. A post-enrichment write error is logged and the
//! already-computed result is still returned.

use tracing::{info, warn};

use crate::cache::cache_key;
use crate::engine::labels;
use crate::engine::readiness::calculate_interview_readiness;
use crate::engine::scoring::calculate_profile_strength;
use crate::enrich::{enrich, EnrichmentContext};
use crate::errors::AppError;
use crate::llm::orchestrator::Orchestrator;
use crate::llm::prompts;
use crate::models::evaluation::EvaluationResponse;
use crate::models::questionnaire::EvaluationRequest;
use crate::state::AppState;

pub async fn evaluate(
    state: &AppState,
    request: EvaluationRequest,
) -> Result<EvaluationResponse, AppError> {
    // Typed round-trip canonicalizes the payload: unknown enum values are
    // already collapsed to their defaults, and serde_json sorts object keys.
    let payload = serde_json::to_value(&request)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("payload serialization failed: {e}")))?;
    let key = cache_key(&payload);
    let model = &state.config.openai_model;

    if let Some(cached) = state.cache.get(&key, model).await {
        match serde_json::from_str::<EvaluationResponse>(&cached) {
            Ok(response) => {
                info!("returning cached evaluation");
                return Ok(response);
            }
            Err(e) => warn!("cached entry failed to deserialize, recomputing: {e}"),
        }
    }

    let background = request.background;
    let quiz = &request.quiz_responses;

    let score = calculate_profile_strength(background, quiz);
    let readiness = calculate_interview_readiness(background, quiz);
    info!(
        score = score.score,
        technical = readiness.technical_interview_percent,
        contradiction = score.has_contradiction,
        "deterministic signals computed"
    );

    let target_company_label = quiz
        .target_company_label
        .clone()
        .unwrap_or_else(|| labels::company_label(&quiz.target_company));

    let system = prompts::system_instruction(&score, &readiness, &target_company_label);
    let payload_json = serde_json::to_string(&payload)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("payload serialization failed: {e}")))?;

    let orchestrator = Orchestrator::new(
        state.llm.as_ref(),
        state.sleeper.as_ref(),
        &state.schemas,
        model,
        state.config.openai_max_retries,
    );
    let raw = orchestrator.complete(&system, &payload_json).await?;

    let ctx = EnrichmentContext {
        background,
        quiz,
        score: &score,
        readiness: &readiness,
        catalog: &state.catalog,
        schemas: &state.schemas,
    };
    let enriched = enrich(raw, &ctx)?;

    match serde_json::to_string(&enriched) {
        Ok(serialized) => {
            // Best-effort write; last writer wins on concurrent misses.
            state.cache.set(&key, model, &serialized).await;
        }
        Err(e) => warn!("skipping cache write, serialization failed: {e}"),
    }

    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::cache::testing::MemoryCacheStore;
    use crate::config::Config;
    use crate::llm::orchestrator::Sleeper;
    use crate::llm::schema::Schemas;
    use crate::llm::{ChatRequest, CompletionTransport, TransportError};
    use crate::models::questionnaire::{Background, QuizResponses, TargetCompany};
    use crate::persona::catalog::PersonaCatalog;

    /// Counts calls and always returns one fixed valid reply.
    struct CountingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionTransport for CountingTransport {
        async fn complete(&self, _request: &ChatRequest) -> Result<String, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(valid_reply())
        }
    }

    struct NoopSleeper;

    #[async_trait]
    impl Sleeper for NoopSleeper {
        async fn sleep(&self, _duration: std::time::Duration) {}
    }

    fn valid_reply() -> String {
        serde_json::json!({
            "profile_evaluation": {
                "profile_strength_score": 61,
                "profile_strength_notes": "notes",
                "current_profile": {"title": "Your Current Profile", "summary": "s", "key_stats": []},
                "skill_analysis": {
                    "strengths": ["A", "B", "C"],
                    "areas_to_develop": ["X", "Y", "Z"]
                },
                "recommended_tools": ["T1", "T2", "T3"],
                "experience_benchmark": {
                    "your_experience_years": "3-5",
                    "typical_for_target_role_years": "3-5",
                    "gap_analysis": "On track"
                },
                "interview_readiness": {
                    "technical_interview_percent": 66,
                    "hr_behavioral_percent": 63,
                    "technical_notes": "tn"
                },
                "peer_comparison": {
                    "percentile": 58,
                    "summary": "ps",
                    "metrics": {"profile_strength_percent": 61, "better_than_peers_percent": 58}
                },
                "success_likelihood": {"score_percent": 60, "notes": "sn"},
                "quick_wins": [{"title": "w", "description": "d", "icon": "lightbulb"}],
                "opportunities_you_qualify_for": [],
                "recommended_roles_based_on_interests": [
                    {"title": "Backend Engineer", "seniority": "Mid-Senior", "reason": "r",
                     "timeline_text": "4-6 months", "min_months": 4, "max_months": 6,
                     "key_gap": "kg", "milestones": [], "confidence": "medium"}
                ],
                "badges": ["B"]
            }
        })
        .to_string()
    }

    fn test_config() -> Config {
        Config {
            database_url: "postgres://unused".to_string(),
            openai_api_key: "test-key".to_string(),
            openai_model: "gpt-4o".to_string(),
            openai_timeout_secs: 60,
            openai_max_retries: 3,
            cache_enabled: true,
            db_pool_size: 10,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    fn test_state(transport: Arc<CountingTransport>) -> AppState {
        AppState {
            cache: Arc::new(MemoryCacheStore::default()),
            llm: transport,
            sleeper: Arc::new(NoopSleeper),
            catalog: Arc::new(PersonaCatalog::builtin()),
            schemas: Arc::new(Schemas::build().unwrap()),
            config: test_config(),
        }
    }

    fn request() -> EvaluationRequest {
        EvaluationRequest {
            background: Background::Tech,
            quiz_responses: QuizResponses {
                target_role: "backend-sde".to_string(),
                target_company: TargetCompany::Product,
                ..QuizResponses::default()
            },
            goals: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_identical_requests_hit_cache_on_second_call() {
        let transport = Arc::new(CountingTransport {
            calls: AtomicUsize::new(0),
        });
        let state = test_state(transport.clone());

        let first = evaluate(&state, request()).await.unwrap();
        let second = evaluate(&state, request()).await.unwrap();

        // One LLM call total: the second request was served from cache.
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            first.profile_evaluation.profile_strength_score,
            second.profile_evaluation.profile_strength_score
        );
    }

    #[tokio::test]
    async fn test_different_answers_produce_different_cache_keys() {
        let transport = Arc::new(CountingTransport {
            calls: AtomicUsize::new(0),
        });
        let state = test_state(transport.clone());

        let mut other = request();
        other.quiz_responses.experience = "8+".to_string().into();

        evaluate(&state, request()).await.unwrap();
        evaluate(&state, other).await.unwrap();
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_result_scores_are_engine_values_not_llm_values() {
        let transport = Arc::new(CountingTransport {
            calls: AtomicUsize::new(0),
        });
        let state = test_state(transport);

        let req = request();
        let score = crate::engine::scoring::calculate_profile_strength(
            req.background,
            &req.quiz_responses,
        );
        let result = evaluate(&state, req).await.unwrap();
        assert_eq!(
            result.profile_evaluation.profile_strength_score,
            score.score as i64
        );
    }

    #[tokio::test]
    async fn test_recommended_roles_dedup_and_target_pin_hold_end_to_end() {
        let transport = Arc::new(CountingTransport {
            calls: AtomicUsize::new(0),
        });
        let state = test_state(transport);

        let result = evaluate(&state, request()).await.unwrap();
        let roles = &result.profile_evaluation.recommended_roles_based_on_interests;
        assert!(roles.len() <= 5);
        assert_eq!(roles[0].title.to_lowercase(), "backend engineer");
        let mut titles: Vec<String> =
            roles.iter().map(|r| r.title.trim().to_lowercase()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), roles.len());
    }
}
