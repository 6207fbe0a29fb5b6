//! Ordering, truncation and fallback padding of scored commands.

use crate::catalog::{Catalog, CommandEntry};
use crate::config::RankingLimits;
use crate::context::RecommendationContext;
use crate::gate::prerequisites_met;
use crate::scorer::ScoreBreakdown;
use tracing::{debug, warn};

/// A command together with the raw score it is ranked by.
#[derive(Debug, Clone)]
pub struct ScoredCommand<'a> {
    pub entry: &'a CommandEntry,
    pub score: i32,
    pub breakdown: ScoreBreakdown,
    /// Added by fallback padding rather than earned
    pub padded: bool,
}

impl<'a> ScoredCommand<'a> {
    pub fn scored(entry: &'a CommandEntry, breakdown: ScoreBreakdown) -> Self {
        Self {
            entry,
            score: breakdown.total(),
            breakdown,
            padded: false,
        }
    }

    pub fn fallback(entry: &'a CommandEntry, score: i32) -> Self {
        Self {
            entry,
            score,
            breakdown: ScoreBreakdown::default(),
            padded: true,
        }
    }
}

/// Rank `scored` (expected in catalog order) and pad when too few survive.
///
/// The sort is stable, so equal scores keep catalog declaration order.
/// Padding walks `limits.fallback` in order, skipping ids already present
/// and commands whose prerequisites are unmet, until `limits.min_results`
/// is reached or the list runs out.
pub fn rank<'a>(
    mut scored: Vec<ScoredCommand<'a>>,
    catalog: &'a Catalog,
    ctx: &RecommendationContext,
    limits: &RankingLimits,
) -> Vec<ScoredCommand<'a>> {
    scored.sort_by_key(|s| std::cmp::Reverse(s.score));
    scored.truncate(limits.max_results);

    if scored.len() >= limits.min_results {
        return scored;
    }

    debug!(
        "Only {} command(s) scored, padding from fallback list",
        scored.len()
    );

    for id in &limits.fallback {
        if scored.len() >= limits.min_results {
            break;
        }
        if scored.iter().any(|s| s.entry.id == *id) {
            continue;
        }
        let Some(entry) = catalog.get(id) else {
            warn!("Fallback command {} is not in the catalog", id);
            continue;
        };
        if !prerequisites_met(entry, ctx) {
            continue;
        }
        scored.push(ScoredCommand::fallback(entry, limits.fallback_score));
    }

    scored
}
