//! CLI configuration: TOML file with `FOLIO_*` env overrides.

use std::path::Path;

use anyhow::Context;
use folio_llm::compatible::CompatibleProvider;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub llm: LlmConfig,
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name, or "none" to force the local fallback summarizer.
    pub provider: String,
    pub base_url: String,
    pub model: String,
    /// Env var holding the API key; never stored in the file itself.
    pub api_key_env: String,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub limit: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".into(),
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4o-mini".into(),
            api_key_env: "OPENAI_API_KEY".into(),
            max_tokens: 500,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            limit: folio_retrieval::retriever::DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("FOLIO_LLM_PROVIDER") {
            self.llm.provider = v;
        }
        if let Ok(v) = std::env::var("FOLIO_LLM_BASE_URL") {
            self.llm.base_url = v;
        }
        if let Ok(v) = std::env::var("FOLIO_LLM_MODEL") {
            self.llm.model = v;
        }
    }

    /// Build the configured provider, or `None` when generation is
    /// disabled or no API key is present — the answer engine then uses
    /// the local summary.
    #[must_use]
    pub fn provider(&self) -> Option<CompatibleProvider> {
        if self.llm.provider == "none" {
            return None;
        }
        let Ok(api_key) = std::env::var(&self.llm.api_key_env) else {
            tracing::debug!(
                env = %self.llm.api_key_env,
                "API key not set, using local fallback summaries"
            );
            return None;
        };
        Some(
            CompatibleProvider::new(
                self.llm.provider.clone(),
                api_key,
                self.llm.base_url.clone(),
                self.llm.model.clone(),
            )
            .with_max_tokens(self.llm.max_tokens),
        )
    }
}
