//! The recommendation pass: gate, score, rank, rescale.
//!
//! A [`Recommender`] owns a shared handle to an immutable catalog and a
//! validated scoring config. It keeps no per-session state, so one instance
//! can serve any number of threads at once.

use crate::builtin;
use crate::catalog::Catalog;
use crate::confidence::map_confidence;
use crate::config::ScoringConfig;
use crate::context::RecommendationContext;
use crate::error::Result;
use crate::gate::prerequisites_met;
use crate::query::Query;
use crate::ranker::{rank, ScoredCommand};
use crate::recommendation::Recommendation;
use crate::scorer::{score_command, ScoreBreakdown};
use lazy_static::lazy_static;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

lazy_static! {
    static ref DEFAULT: Recommender = Recommender::builtin();
}

/// Recommend from the built-in catalog with default scoring.
pub fn recommend(ctx: &RecommendationContext) -> Vec<Recommendation> {
    DEFAULT.recommend(ctx)
}

/// Why a command ended up where it did.
///
/// `score` is the score the command was ranked by, which for a padded
/// command is the fallback score. `breakdown` is always the command's own
/// earned score, so a padded command that was suppressed shows a total at
/// or below zero there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub id: String,
    pub score: i32,
    pub confidence: u8,
    /// Made it into the returned list
    pub selected: bool,
    /// Added by fallback padding
    pub padded: bool,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    config: ScoringConfig,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, config: ScoringConfig) -> Result<Self> {
        config.validate(&catalog)?;
        Ok(Self { catalog, config })
    }

    /// Built-in catalog, default scoring.
    pub fn builtin() -> Self {
        Self {
            catalog: builtin::shared(),
            config: ScoringConfig::default(),
        }
    }

    /// Built-in catalog with a custom config.
    pub fn with_config(config: ScoringConfig) -> Result<Self> {
        Self::new(builtin::shared(), config)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a single command. `None` if it is unknown or gated out.
    pub fn score(&self, id: &str, ctx: &RecommendationContext) -> Option<ScoreBreakdown> {
        let entry = self.catalog.get(id)?;
        if !prerequisites_met(entry, ctx) {
            return None;
        }
        let query = Query::from_messages(&ctx.messages);
        Some(score_command(entry, &query, ctx, &self.config))
    }

    /// Every eligible command with a strictly positive score, sorted by
    /// score with catalog order breaking ties. Not truncated, not padded.
    pub fn candidates(&self, ctx: &RecommendationContext) -> Vec<ScoredCommand<'_>> {
        let query = Query::from_messages(&ctx.messages);

        // Order-preserving collect keeps catalog order for the stable sort
        let mut scored: Vec<ScoredCommand<'_>> = self
            .catalog
            .entries()
            .par_iter()
            .filter(|entry| prerequisites_met(entry, ctx))
            .filter_map(|entry| {
                let breakdown = score_command(entry, &query, ctx, &self.config);
                (breakdown.total() > 0).then(|| ScoredCommand::scored(entry, breakdown))
            })
            .collect();

        debug!(
            "{} of {} commands scored above zero ({} query tokens)",
            scored.len(),
            self.catalog.len(),
            query.tokens.len()
        );

        scored.sort_by_key(|s| std::cmp::Reverse(s.score));
        scored
    }

    /// The final ranked list with raw scores and breakdowns.
    pub fn rank(&self, ctx: &RecommendationContext) -> Vec<ScoredCommand<'_>> {
        rank(self.candidates(ctx), &self.catalog, ctx, &self.config.ranking)
    }

    /// The top commands for `ctx`, with bounded confidence.
    pub fn recommend(&self, ctx: &RecommendationContext) -> Vec<Recommendation> {
        self.rank(ctx)
            .iter()
            .map(|s| Recommendation::from_entry(s.entry, self.confidence_of(s.score)))
            .collect()
    }

    /// Selected commands first (in rank order), then the remaining
    /// candidates that were cut by the result limit.
    pub fn explain(&self, ctx: &RecommendationContext) -> Vec<Explanation> {
        let candidates = self.candidates(ctx);
        let ranked = rank(candidates.clone(), &self.catalog, ctx, &self.config.ranking);

        let query = Query::from_messages(&ctx.messages);
        let to_explanation = |s: &ScoredCommand<'_>, selected: bool| Explanation {
            id: s.entry.id.clone(),
            score: s.score,
            confidence: self.confidence_of(s.score),
            selected,
            padded: s.padded,
            breakdown: if s.padded {
                score_command(s.entry, &query, ctx, &self.config)
            } else {
                s.breakdown.clone()
            },
        };

        let mut out: Vec<Explanation> = ranked.iter().map(|s| to_explanation(s, true)).collect();
        out.extend(
            candidates
                .iter()
                .filter(|c| !ranked.iter().any(|r| r.entry.id == c.entry.id))
                .map(|c| to_explanation(c, false)),
        );
        out
    }

    fn confidence_of(&self, raw: i32) -> u8 {
        map_confidence(raw, &self.config.confidence)
    }
}
