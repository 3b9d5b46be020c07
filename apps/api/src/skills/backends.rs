//! Skill extraction backends — pluggable, trait-based extractors behind the HTTP API.
//!
//! Default: `KeywordSkillExtractor` (the local taxonomy pipeline, never fails).
//! `LlmSkillExtractor` and `RemoteSkillExtractor` are always wrapped in a
//! `FallbackSkillExtractor`, so a failing LLM or upstream degrades to keyword
//! extraction instead of an error.
//!
//! `AppState` holds an `Arc<dyn SkillExtractor>`, chosen at startup via `SKILL_BACKEND`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::config::{Config, SkillBackend};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::skills::extractor::{
    extract_skills, rank_skills, ExtractionResult, Skill, MAX_CONFIDENCE,
};
use crate::skills::prompts::{build_extract_prompt, LLM_MAX_SKILLS, SKILLS_EXTRACT_SYSTEM};
use crate::skills::taxonomy;

/// Confidence assumed when an LLM reply omits it.
const LLM_DEFAULT_CONFIDENCE: f64 = 0.7;
const REMOTE_TIMEOUT: Duration = Duration::from_secs(10);
const EXTRACT_PATH: &str = "/api/v1/skills/extract";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The extraction backend trait. Implement this to swap backends without
/// touching the endpoint or handler code.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<ExtractionResult, AppError>;

    /// Short label for logs and `/health`.
    fn backend_name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

/// Local taxonomy matching. Pure, deterministic, no I/O.
pub struct KeywordSkillExtractor;

#[async_trait]
impl SkillExtractor for KeywordSkillExtractor {
    async fn extract(&self, text: &str) -> Result<ExtractionResult, AppError> {
        Ok(extract_skills(text))
    }

    fn backend_name(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

/// Asks the LLM for five skills and sanitizes the reply.
pub struct LlmSkillExtractor(pub LlmClient);

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract(&self, text: &str) -> Result<ExtractionResult, AppError> {
        let prompt = build_extract_prompt(text);
        let raw: RawExtraction = self
            .0
            .call_json(&prompt, SKILLS_EXTRACT_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Skill extraction failed: {e}")))?;

        let result = sanitize_extraction(raw, Some(LLM_MAX_SKILLS), LLM_DEFAULT_CONFIDENCE);
        if result.skills.is_empty() {
            return Err(AppError::Llm("LLM returned no usable skills".to_string()));
        }
        Ok(result)
    }

    fn backend_name(&self) -> &'static str {
        "llm"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RemoteSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

/// Forwards text to another deployment's `POST /api/v1/skills/extract`.
pub struct RemoteSkillExtractor {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteSkillExtractor {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REMOTE_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for skills service")?;
        Ok(Self {
            client,
            endpoint: format!("{}{EXTRACT_PATH}", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SkillExtractor for RemoteSkillExtractor {
    async fn extract(&self, text: &str) -> Result<ExtractionResult, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Skills service unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "Skills service returned {status}"
            )));
        }

        let raw: RawExtraction = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Skills service sent invalid JSON: {e}")))?;

        debug!("Remote extraction returned {} skills", raw.skills.len());
        Ok(sanitize_extraction(raw, None, 0.0))
    }

    fn backend_name(&self) -> &'static str {
        "remote"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

/// Tries `primary`; on any error answers with keyword extraction instead.
pub struct FallbackSkillExtractor {
    primary: Arc<dyn SkillExtractor>,
}

impl FallbackSkillExtractor {
    pub fn new(primary: Arc<dyn SkillExtractor>) -> Self {
        Self { primary }
    }
}

#[async_trait]
impl SkillExtractor for FallbackSkillExtractor {
    async fn extract(&self, text: &str) -> Result<ExtractionResult, AppError> {
        match self.primary.extract(text).await {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!(
                    "{} extraction failed, falling back to keyword extraction: {e}",
                    self.primary.backend_name()
                );
                KeywordSkillExtractor.extract(text).await
            }
        }
    }

    fn backend_name(&self) -> &'static str {
        self.primary.backend_name()
    }
}

/// Builds the extractor selected by `config.skill_backend`.
pub fn build_extractor(config: &Config) -> anyhow::Result<Arc<dyn SkillExtractor>> {
    let extractor: Arc<dyn SkillExtractor> = match config.skill_backend {
        SkillBackend::Keyword => Arc::new(KeywordSkillExtractor),
        SkillBackend::Llm => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .context("ANTHROPIC_API_KEY is required for the llm backend")?;
            let mut llm = LlmClient::new(api_key).context("Failed to build LLM client")?;
            if let Some(url) = &config.anthropic_api_url {
                info!("LLM requests go to {url}");
                llm = llm.with_api_url(url.as_str());
            }
            Arc::new(FallbackSkillExtractor::new(Arc::new(LlmSkillExtractor(llm))))
        }
        SkillBackend::Remote => {
            let url = config
                .skills_service_url
                .as_deref()
                .context("SKILLS_SERVICE_URL is required for the remote backend")?;
            let remote = RemoteSkillExtractor::new(url)?;
            info!("Remote skill extraction endpoint: {}", remote.endpoint());
            Arc::new(FallbackSkillExtractor::new(Arc::new(remote)))
        }
    };
    Ok(extractor)
}

// ────────────────────────────────────────────────────────────────────────────
// Reply sanitizing (shared by LLM and remote backends)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct RawSkill {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    value: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawExtraction {
    #[serde(default)]
    skills: Vec<RawSkill>,
    #[serde(default)]
    confidence: Option<f64>,
}

/// Brings a foreign reply in line with the local result invariants:
/// named skills only, values truncated into 0–100, at most `limit` skills (first
/// ones win), confidence clamped to 0–0.95, canonical names and categories where
/// the taxonomy knows the skill, core ranking order.
fn sanitize_extraction(
    raw: RawExtraction,
    limit: Option<usize>,
    default_confidence: f64,
) -> ExtractionResult {
    let mut skills: Vec<Skill> = raw
        .skills
        .into_iter()
        .filter_map(|s| {
            let name = s.name?.trim().to_string();
            if name.is_empty() {
                return None;
            }
            let value = s.value.unwrap_or(0.0).trunc().clamp(0.0, 100.0) as u8;
            let known = taxonomy::find(&name);
            Some(Skill {
                name: known.map(|e| e.name.to_string()).unwrap_or(name),
                value,
                category: known.map(|e| e.category),
            })
        })
        .take(limit.unwrap_or(usize::MAX))
        .collect();
    rank_skills(&mut skills);

    let confidence = raw
        .confidence
        .unwrap_or(default_confidence)
        .clamp(0.0, MAX_CONFIDENCE);

    ExtractionResult { skills, confidence }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::taxonomy::Category;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::Value;

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn raw(value: Value) -> RawExtraction {
        serde_json::from_value(value).unwrap()
    }

    struct FailingExtractor;

    #[async_trait]
    impl SkillExtractor for FailingExtractor {
        async fn extract(&self, _text: &str) -> Result<ExtractionResult, AppError> {
            Err(AppError::Upstream("connection refused".to_string()))
        }

        fn backend_name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_sanitize_clamps_and_truncates_values() {
        let result = sanitize_extraction(
            raw(json!({
                "skills": [
                    {"name": "Rust", "value": 250},
                    {"name": "Go", "value": -5},
                    {"name": "SQL", "value": 61.9}
                ],
                "confidence": 0.5
            })),
            None,
            0.0,
        );
        let values: Vec<(&str, u8)> = result
            .skills
            .iter()
            .map(|s| (s.name.as_str(), s.value))
            .collect();
        assert_eq!(values, vec![("Rust", 100), ("SQL", 61), ("Go", 0)]);
    }

    #[test]
    fn test_sanitize_drops_unnamed_and_limits_count() {
        let result = sanitize_extraction(
            raw(json!({
                "skills": [
                    {"value": 90},
                    {"name": "  ", "value": 90},
                    {"name": "skill-a", "value": 10},
                    {"name": "skill-b", "value": 20},
                    {"name": "skill-c", "value": 30},
                    {"name": "skill-d", "value": 40},
                    {"name": "skill-e", "value": 50},
                    {"name": "skill-f", "value": 60}
                ]
            })),
            Some(LLM_MAX_SKILLS),
            LLM_DEFAULT_CONFIDENCE,
        );
        let names: Vec<&str> = result.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["skill-e", "skill-d", "skill-c", "skill-b", "skill-a"]);
        assert_eq!(result.confidence, LLM_DEFAULT_CONFIDENCE);
    }

    #[test]
    fn test_sanitize_caps_confidence() {
        let high = sanitize_extraction(raw(json!({"skills": [], "confidence": 1.0})), None, 0.0);
        assert_eq!(high.confidence, MAX_CONFIDENCE);
        let low = sanitize_extraction(raw(json!({"skills": [], "confidence": -0.3})), None, 0.0);
        assert_eq!(low.confidence, 0.0);
    }

    #[test]
    fn test_sanitize_restores_taxonomy_names_and_categories() {
        let result = sanitize_extraction(
            raw(json!({"skills": [
                {"name": "machine learning", "value": 80},
                {"name": "Prolog", "value": 40},
                {"name": "c", "value": 30}
            ]})),
            None,
            0.0,
        );
        assert_eq!(result.skills[0].name, "Machine Learning");
        assert_eq!(result.skills[0].category, Some(Category::Ml));
        assert_eq!(result.skills[1].name, "Prolog");
        assert_eq!(result.skills[1].category, None);
        assert_eq!(result.skills[2].name, "C");
        assert_eq!(result.skills[2].category, Some(Category::Language));
    }

    #[tokio::test]
    async fn test_keyword_backend_matches_core() {
        let text = "Rust, Docker and a lot of Kubernetes";
        let result = KeywordSkillExtractor.extract(text).await.unwrap();
        assert_eq!(result, extract_skills(text));
        assert_eq!(KeywordSkillExtractor.backend_name(), "keyword");
    }

    #[tokio::test]
    async fn test_fallback_uses_keyword_result_on_error() {
        let fallback = FallbackSkillExtractor::new(Arc::new(FailingExtractor));
        let text = "I use Go daily";
        let result = fallback.extract(text).await.unwrap();
        assert_eq!(result, extract_skills(text));
        assert_eq!(fallback.backend_name(), "failing");
    }

    #[tokio::test]
    async fn test_fallback_passes_primary_result_through() {
        let fallback = FallbackSkillExtractor::new(Arc::new(KeywordSkillExtractor));
        let result = fallback.extract("python").await.unwrap();
        assert_eq!(result.skills[0].name, "Python");
    }

    #[tokio::test]
    async fn test_remote_backend_sanitizes_reply() {
        let router = Router::new().route(
            EXTRACT_PATH,
            post(|Json(body): Json<Value>| async move {
                let text = body["text"].as_str().unwrap_or_default().to_string();
                Json(json!({
                    "skills": [
                        {"name": "python", "value": 55},
                        {"name": text, "value": 99}
                    ],
                    "confidence": 0.99
                }))
            }),
        );
        let base = spawn_stub(router).await;
        let remote = RemoteSkillExtractor::new(&format!("{base}/")).unwrap();
        assert_eq!(remote.endpoint(), format!("{base}{EXTRACT_PATH}"));

        let result = remote.extract("Echo").await.unwrap();
        assert_eq!(result.skills.len(), 2);
        assert_eq!(result.skills[0].name, "Echo");
        assert_eq!(result.skills[1].name, "Python");
        assert_eq!(result.skills[1].category, Some(Category::Language));
        assert_eq!(result.confidence, MAX_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_remote_error_status_is_upstream_error() {
        let router = Router::new().route(
            EXTRACT_PATH,
            post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let base = spawn_stub(router).await;
        let remote = RemoteSkillExtractor::new(&base).unwrap();

        let err = remote.extract("rust").await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)), "got {err:?}");

        let fallback = FallbackSkillExtractor::new(Arc::new(remote));
        let result = fallback.extract("rust").await.unwrap();
        assert_eq!(result, extract_skills("rust"));
    }

    #[tokio::test]
    async fn test_llm_backend_parses_and_limits_reply() {
        let reply = json!({
            "skills": [
                {"name": "Python", "value": 80},
                {"name": "SQL", "value": 60},
                {"name": "Git", "value": 50},
                {"name": "React", "value": 40},
                {"name": "Docker", "value": 30},
                {"name": "Linux", "value": 20}
            ],
            "confidence": 0.8
        })
        .to_string();
        let router = Router::new().route(
            "/v1/messages",
            post(move || {
                let reply = reply.clone();
                async move {
                    Json(json!({
                        "content": [{"type": "text", "text": reply}],
                        "usage": {"input_tokens": 12, "output_tokens": 40}
                    }))
                }
            }),
        );
        let base = spawn_stub(router).await;
        let llm = LlmClient::new("sk-test".to_string())
            .unwrap()
            .with_api_url(format!("{base}/v1/messages"));

        let result = LlmSkillExtractor(llm).extract("some profile").await.unwrap();
        assert_eq!(result.skills.len(), LLM_MAX_SKILLS);
        assert!(result.skills.iter().all(|s| s.name != "Linux"));
        assert_eq!(result.confidence, 0.8);
    }

    #[tokio::test]
    async fn test_llm_backend_rejects_empty_skill_list() {
        let router = Router::new().route(
            "/v1/messages",
            post(|| async {
                Json(json!({
                    "content": [{"type": "text", "text": "{\"skills\": [], \"confidence\": 0.9}"}],
                    "usage": {"input_tokens": 12, "output_tokens": 8}
                }))
            }),
        );
        let base = spawn_stub(router).await;
        let llm = LlmClient::new("sk-test".to_string())
            .unwrap()
            .with_api_url(format!("{base}/v1/messages"));

        let err = LlmSkillExtractor(llm).extract("hi").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)), "got {err:?}");
    }

    #[test]
    fn test_build_extractor_follows_config() {
        let mut config = Config {
            port: 8080,
            rust_log: "info".to_string(),
            skill_backend: SkillBackend::Keyword,
            anthropic_api_key: None,
            anthropic_api_url: None,
            skills_service_url: None,
            max_text_chars: 20_000,
        };
        assert_eq!(build_extractor(&config).unwrap().backend_name(), "keyword");

        config.skill_backend = SkillBackend::Remote;
        config.skills_service_url = Some("http://localhost:9000".to_string());
        assert_eq!(build_extractor(&config).unwrap().backend_name(), "remote");

        config.skill_backend = SkillBackend::Llm;
        assert!(build_extractor(&config).is_err());
        config.anthropic_api_key = Some("sk-test".to_string());
        assert_eq!(build_extractor(&config).unwrap().backend_name(), "llm");
    }

    #[tokio::test]
    async fn test_build_extractor_honours_api_url_override() {
        let reply = json!({"skills": [{"name": "Prolog", "value": 70}], "confidence": 0.6})
            .to_string();
        let router = Router::new().route(
            "/v1/messages",
            post(move || {
                let reply = reply.clone();
                async move {
                    Json(json!({
                        "content": [{"type": "text", "text": reply}],
                        "usage": {"input_tokens": 10, "output_tokens": 20}
                    }))
                }
            }),
        );
        let base = spawn_stub(router).await;
        let config = Config {
            port: 8080,
            rust_log: "info".to_string(),
            skill_backend: SkillBackend::Llm,
            anthropic_api_key: Some("sk-test".to_string()),
            anthropic_api_url: Some(format!("{base}/v1/messages")),
            skills_service_url: None,
            max_text_chars: 20_000,
        };

        let extractor = build_extractor(&config).unwrap();
        let result = extractor.extract("logic programming").await.unwrap();
        assert_eq!(result.skills.len(), 1);
        assert_eq!(result.skills[0].name, "Prolog");
        assert_eq!(result.confidence, 0.6);
    }
}
