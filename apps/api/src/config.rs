use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which backend answers `POST /api/v1/skills/extract`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillBackend {
    /// Local taxonomy matching only.
    Keyword,
    /// LLM first, keyword extraction on failure.
    Llm,
    /// Another deployment's skills endpoint first, keyword extraction on failure.
    Remote,
}

impl FromStr for SkillBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(SkillBackend::Keyword),
            "llm" => Ok(SkillBackend::Llm),
            "remote" => Ok(SkillBackend::Remote),
            other => bail!("Unknown SKILL_BACKEND '{other}' (expected keyword, llm or remote)"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable required by the selected backend is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub skill_backend: SkillBackend,
    pub anthropic_api_key: Option<String>,
    /// Overrides the Messages endpoint (proxies, gateways). Defaults to Anthropic's.
    pub anthropic_api_url: Option<String>,
    pub skills_service_url: Option<String>,
    pub max_text_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let skill_backend = lookup("SKILL_BACKEND")
            .map(|v| v.parse::<SkillBackend>())
            .transpose()?
            .unwrap_or(SkillBackend::Keyword);

        let anthropic_api_key = lookup("ANTHROPIC_API_KEY").filter(|v| !v.trim().is_empty());
        let anthropic_api_url = lookup("ANTHROPIC_API_URL").filter(|v| !v.trim().is_empty());
        let skills_service_url = lookup("SKILLS_SERVICE_URL").filter(|v| !v.trim().is_empty());

        match skill_backend {
            SkillBackend::Llm if anthropic_api_key.is_none() => {
                bail!("SKILL_BACKEND=llm requires ANTHROPIC_API_KEY to be set")
            }
            SkillBackend::Remote if skills_service_url.is_none() => {
                bail!("SKILL_BACKEND=remote requires SKILLS_SERVICE_URL to be set")
            }
            _ => {}
        }

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            skill_backend,
            anthropic_api_key,
            anthropic_api_url,
            skills_service_url,
            max_text_chars: lookup("MAX_TEXT_CHARS")
                .unwrap_or_else(|| "20000".to_string())
                .parse::<usize>()
                .context("MAX_TEXT_CHARS must be a positive integer")?,
        })
    }
}
