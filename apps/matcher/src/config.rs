use anyhow::{Context, Result};

use crate::scoring::aggregate::MatchWeights;
use crate::scoring::similarity::DEFAULT_MAX_FEATURES;
use crate::scoring::upskilling::DEFAULT_UPSKILL_LIMIT;
use crate::scoring::Subscore;

pub const DEFAULT_RECOMMEND_THRESHOLD: f64 = 30.0;

/// Engine configuration loaded from environment variables.
/// Every variable is optional; unset ones fall back to the documented defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub weights: MatchWeights,
    pub similarity_max_features: usize,
    pub upskill_limit: usize,
    pub recommend_threshold: f64,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            similarity_max_features: DEFAULT_MAX_FEATURES,
            upskill_limit: DEFAULT_UPSKILL_LIMIT,
            recommend_threshold: DEFAULT_RECOMMEND_THRESHOLD,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = MatchWeights::default();
        let weights = MatchWeights::new(
            parse_or(&lookup, "MATCH_WEIGHT_SKILLS", defaults.weight(Subscore::Skills))?,
            parse_or(&lookup, "MATCH_WEIGHT_TEXT", defaults.weight(Subscore::Text))?,
            parse_or(&lookup, "MATCH_WEIGHT_EXPERIENCE", defaults.weight(Subscore::Experience))?,
            parse_or(&lookup, "MATCH_WEIGHT_EDUCATION", defaults.weight(Subscore::Education))?,
        )
        .context("MATCH_WEIGHT_* variables do not form a valid weight table")?;

        Ok(Config {
            weights,
            similarity_max_features: parse_or(&lookup, "SIMILARITY_MAX_FEATURES", DEFAULT_MAX_FEATURES)?,
            upskill_limit: parse_or(&lookup, "UPSKILL_LIMIT", DEFAULT_UPSKILL_LIMIT)?,
            recommend_threshold: parse_or(&lookup, "RECOMMEND_THRESHOLD", DEFAULT_RECOMMEND_THRESHOLD)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
