//! Scoring configuration.
//!
//! Defaults reproduce the console's tuned constants exactly. A JSON file may
//! override any subset of them for offline tuning; omitted fields keep their
//! defaults and unknown fields are rejected.

use crate::catalog::Catalog;
use crate::error::{RecommenderError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name under the platform config dir
const CONFIG_DIR: &str = "command-recommender";

/// Config file name inside [`CONFIG_DIR`]
const CONFIG_FILE: &str = "scoring.json";

// ============================================================================
// Weights
// ============================================================================

/// Points for lexical matches between the query and a command's keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeywordWeights {
    /// Multi-word keyword found verbatim in the raw query
    pub phrase: i32,
    /// Single-word keyword found as a whole query token
    pub exact: i32,
    /// Query token contained in the keyword or vice-versa
    pub partial: i32,
    /// Tokens must be longer than this to earn partial credit
    pub partial_min_len: usize,
    /// Ceiling on the summed keyword points
    pub cap: i32,
}

impl Default for KeywordWeights {
    fn default() -> Self {
        Self {
            phrase: 15,
            exact: 8,
            partial: 3,
            partial_min_len: 3,
            cap: 40,
        }
    }
}

/// Points for commands that usually follow a recent action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequenceWeights {
    pub base: i32,
    /// Extra when the preceding command is the most recent action
    pub latest_bonus: i32,
    /// Extra when it is any older action
    pub earlier_bonus: i32,
    pub cap: i32,
}

impl Default for SequenceWeights {
    fn default() -> Self {
        Self {
            base: 15,
            latest_bonus: 10,
            earlier_bonus: 5,
            cap: 25,
        }
    }
}

/// Points for declared affinities with the session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContextWeights {
    pub view: i32,
    /// Per matching connected service
    pub service: i32,
    pub workflows: i32,
    pub saved_files: i32,
    pub purchases: i32,
    pub cap: i32,
}

impl Default for ContextWeights {
    fn default() -> Self {
        Self {
            view: 10,
            service: 5,
            workflows: 4,
            saved_files: 4,
            purchases: 3,
            cap: 20,
        }
    }
}

/// Linear rescale of raw scores into a bounded percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfidenceWindow {
    pub floor: i32,
    pub ceiling: i32,
    /// Nominal top of the raw score range
    pub normalization: f64,
}

impl Default for ConfidenceWindow {
    fn default() -> Self {
        Self {
            floor: 45,
            ceiling: 97,
            normalization: 105.0,
        }
    }
}

/// Result size and fallback padding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingLimits {
    pub max_results: usize,
    /// Pad from `fallback` until at least this many results
    pub min_results: usize,
    /// High-utility commands used for padding, in priority order
    pub fallback: Vec<String>,
    /// Raw score assigned to padded commands
    pub fallback_score: i32,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            max_results: 3,
            min_results: 2,
            fallback: vec![
                "engine_import".to_string(),
                "workflow_create".to_string(),
                "store_browse".to_string(),
            ],
            fallback_score: 20,
        }
    }
}

/// Every tuning knob of a recommendation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub keyword: KeywordWeights,
    pub sequence: SequenceWeights,
    pub context: ContextWeights,
    /// Subtracted when the command itself is among the recent actions
    pub freshness_penalty: i32,
    pub confidence: ConfidenceWindow,
    pub ranking: RankingLimits,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keyword: KeywordWeights::default(),
            sequence: SequenceWeights::default(),
            context: ContextWeights::default(),
            freshness_penalty: 10,
            confidence: ConfidenceWindow::default(),
            ranking: RankingLimits::default(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl ScoringConfig {
    /// `$CONFIG_DIR/command-recommender/scoring.json`, if the platform has a
    /// config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn from_json(input: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| RecommenderError::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RecommenderError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content, path)
    }

    /// An explicit path must load. Otherwise the default location is used
    /// when it exists, and built-in defaults when it doesn't.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading scoring config from {:?}", path);
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!("Loading scoring config from {:?}", path);
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Reject configs that would break the output invariants or point at
    /// commands the catalog doesn't have.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        let window = &self.confidence;
        if !(0 <= window.floor && window.floor <= window.ceiling && window.ceiling <= 100) {
            return Err(RecommenderError::InvalidConfig(format!(
                "confidence window must satisfy 0 <= floor <= ceiling <= 100, got {}..={}",
                window.floor, window.ceiling
            )));
        }
        if !(window.normalization.is_finite() && window.normalization > 0.0) {
            return Err(RecommenderError::InvalidConfig(format!(
                "confidence normalization must be positive, got {}",
                window.normalization
            )));
        }
        if self.ranking.min_results > self.ranking.max_results {
            return Err(RecommenderError::InvalidConfig(format!(
                "min_results {} exceeds max_results {}",
                self.ranking.min_results, self.ranking.max_results
            )));
        }
        if let Some(missing) = self.ranking.fallback.iter().find(|id| !catalog.contains(id)) {
            return Err(RecommenderError::UnknownCommand {
                referrer: "ranking.fallback".to_string(),
                missing: missing.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn test_defaults_match_tuned_constants() {
        let cfg = ScoringConfig::default();
        assert_eq!(
            (cfg.keyword.phrase, cfg.keyword.exact, cfg.keyword.partial, cfg.keyword.cap),
            (15, 8, 3, 40)
        );
        assert_eq!(
            (cfg.sequence.base, cfg.sequence.latest_bonus, cfg.sequence.earlier_bonus, cfg.sequence.cap),
            (15, 10, 5, 25)
        );
        assert_eq!(cfg.context.cap, 20);
        assert_eq!(cfg.freshness_penalty, 10);
        assert_eq!((cfg.confidence.floor, cfg.confidence.ceiling), (45, 97));
        assert_eq!(cfg.confidence.normalization, 105.0);
        assert_eq!(cfg.ranking.fallback, vec!["engine_import", "workflow_create", "store_browse"]);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let cfg = ScoringConfig::from_json(
            r#"{"keyword": {"phrase": 20}, "freshnessPenalty": 0}"#,
            Path::new("inline"),
        );
        // field names are snake_case on disk
        assert!(cfg.is_err());

        let cfg = ScoringConfig::from_json(
            r#"{"keyword": {"phrase": 20}, "freshness_penalty": 0}"#,
            Path::new("inline"),
        )
        .unwrap();
        assert_eq!(cfg.keyword.phrase, 20);
        assert_eq!(cfg.keyword.exact, 8);
        assert_eq!(cfg.freshness_penalty, 0);
        assert_eq!(cfg.ranking, RankingLimits::default());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = ScoringConfig::load(Path::new("/nonexistent/scoring.json"));
        assert!(matches!(err, Err(RecommenderError::ConfigRead { .. })));
        assert!(ScoringConfig::resolve(Some(Path::new("/nonexistent/scoring.json"))).is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("cmdrec-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"ranking": {"max_results": 5}}"#).unwrap();
        let cfg = ScoringConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(cfg.ranking.max_results, 5);
        assert_eq!(cfg.ranking.min_results, 2);
    }

    #[test]
    fn test_validate() {
        let catalog = builtin::catalog();
        assert!(ScoringConfig::default().validate(catalog).is_ok());

        let mut inverted = ScoringConfig::default();
        inverted.confidence.floor = 99;
        assert!(matches!(inverted.validate(catalog), Err(RecommenderError::InvalidConfig(_))));

        let mut zero = ScoringConfig::default();
        zero.confidence.normalization = 0.0;
        assert!(zero.validate(catalog).is_err());

        let mut below = ScoringConfig::default();
        below.confidence.floor = -5;
        assert!(matches!(below.validate(catalog), Err(RecommenderError::InvalidConfig(_))));

        let mut above = ScoringConfig::default();
        above.confidence.ceiling = 150;
        assert!(matches!(above.validate(catalog), Err(RecommenderError::InvalidConfig(_))));

        let mut full = ScoringConfig::default();
        full.confidence.floor = 0;
        full.confidence.ceiling = 100;
        assert!(full.validate(catalog).is_ok());

        let mut limits = ScoringConfig::default();
        limits.ranking.min_results = 4;
        assert!(limits.validate(catalog).is_err());

        let mut ghost = ScoringConfig::default();
        ghost.ranking.fallback.push("ghost".to_string());
        assert!(matches!(
            ghost.validate(catalog),
            Err(RecommenderError::UnknownCommand { missing, .. }) if missing == "ghost"
        ));
    }
}
