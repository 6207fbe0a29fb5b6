//! Per-command scoring.
//!
//! Four independent contributions are computed for each command that passed
//! the prerequisite gate:
//! - keyword match against the query corpus (capped)
//! - sequential pattern match against recent actions (capped)
//! - contextual signal match against the session state (capped)
//! - freshness penalty when the command was just used
//!
//! Each contribution records short evidence strings so a ranking can be
//! explained after the fact.

use crate::catalog::CommandEntry;
use crate::config::{ContextWeights, KeywordWeights, ScoringConfig, SequenceWeights};
use crate::context::RecommendationContext;
use crate::query::Query;
use serde::Serialize;

/// Points a command earned, by source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub keyword: i32,
    pub sequential: i32,
    pub context: i32,
    /// Zero or negative
    pub freshness: i32,
    /// What triggered each contribution, e.g. `phrase:api keys`, `follows:engine_import`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.keyword + self.sequential + self.context + self.freshness
    }
}

/// Score one command against a prepared query and context.
pub fn score_command(
    cmd: &CommandEntry,
    query: &Query,
    ctx: &RecommendationContext,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let mut evidence = Vec::new();

    let keyword = keyword_score(query, cmd, &config.keyword, &mut evidence);
    let sequential = sequential_score(ctx, cmd, &config.sequence, &mut evidence);
    let context = context_score(ctx, cmd, &config.context, &mut evidence);
    let freshness = freshness_penalty(ctx, cmd, config.freshness_penalty, &mut evidence);

    ScoreBreakdown {
        keyword,
        sequential,
        context,
        freshness,
        evidence,
    }
}

/// Lexical match between the query and the command's keywords.
///
/// A multi-word keyword found verbatim in the raw corpus earns the phrase
/// weight and nothing else. Otherwise a whole-token hit earns the exact
/// weight, and failing that a long-enough token overlapping the keyword
/// earns partial credit.
pub fn keyword_score(
    query: &Query,
    cmd: &CommandEntry,
    weights: &KeywordWeights,
    evidence: &mut Vec<String>,
) -> i32 {
    if query.is_empty() {
        return 0;
    }

    let mut score = 0;
    for kw in &cmd.keywords {
        if kw.contains(' ') && query.raw.contains(kw.as_str()) {
            score += weights.phrase;
            evidence.push(format!("phrase:{}", kw));
            continue;
        }

        if query.has_token(kw) {
            score += weights.exact;
            evidence.push(format!("keyword:{}", kw));
        } else if query.tokens.iter().any(|t| {
            t.len() > weights.partial_min_len && (kw.contains(t.as_str()) || t.contains(kw.as_str()))
        }) {
            score += weights.partial;
            evidence.push(format!("partial:{}", kw));
        }
    }

    score.min(weights.cap)
}

/// Points for every recent action this command usually follows, with a
/// larger bonus when that action is the most recent one.
pub fn sequential_score(
    ctx: &RecommendationContext,
    cmd: &CommandEntry,
    weights: &SequenceWeights,
    evidence: &mut Vec<String>,
) -> i32 {
    if cmd.follows_after.is_empty() {
        return 0;
    }

    let latest = ctx.last_action();
    let mut score = 0;
    for action in &ctx.recent_actions {
        if !cmd.follows_after.contains(action) {
            continue;
        }
        let bonus = if latest == Some(action.as_str()) {
            weights.latest_bonus
        } else {
            weights.earlier_bonus
        };
        score += weights.base + bonus;
        evidence.push(format!("follows:{}", action));
    }

    score.min(weights.cap)
}

/// Points for declared affinities that the session currently satisfies.
pub fn context_score(
    ctx: &RecommendationContext,
    cmd: &CommandEntry,
    weights: &ContextWeights,
    evidence: &mut Vec<String>,
) -> i32 {
    let signals = &cmd.context_signals;
    let mut score = 0;

    if signals.views.iter().any(|v| *v == ctx.current_view) {
        score += weights.view;
        evidence.push(format!("view:{}", ctx.current_view));
    }

    for service in signals.services.iter().filter(|s| ctx.is_connected(s)) {
        score += weights.service;
        evidence.push(format!("service:{}", service));
    }

    if signals.has_workflows && ctx.has_workflows {
        score += weights.workflows;
        evidence.push("flag:has_workflows".to_string());
    }
    if signals.has_saved_files && ctx.has_saved_files {
        score += weights.saved_files;
        evidence.push("flag:has_saved_files".to_string());
    }
    if signals.has_purchases && ctx.has_purchases {
        score += weights.purchases;
        evidence.push("flag:has_purchases".to_string());
    }

    score.min(weights.cap)
}

/// Negative points when the user has just run this very command.
pub fn freshness_penalty(
    ctx: &RecommendationContext,
    cmd: &CommandEntry,
    penalty: i32,
    evidence: &mut Vec<String>,
) -> i32 {
    if ctx.recently_did(&cmd.id) {
        evidence.push("recent:self".to_string());
        -penalty
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::context::Message;

    fn query(text: &str) -> Query {
        Query::from_messages(&[Message::user(text)])
    }

    fn vault_cmd() -> CommandEntry {
        CommandEntry::builder("vault_create", Category::Vault)
            .keywords(&["vault", "api keys", "credentials", "encrypt"])
            .views(&["vault", "engine"])
            .follows_after(&["engine_verify", "engine_import"])
            .build()
    }

    fn kw(text: &str, cmd: &CommandEntry) -> i32 {
        keyword_score(&query(text), cmd, &KeywordWeights::default(), &mut Vec::new())
    }

    #[test]
    fn test_phrase_match() {
        let cmd = CommandEntry::builder("x", Category::Vault).keywords(&["api keys"]).build();
        let mut evidence = Vec::new();
        let score = keyword_score(&query("store my api keys"), &cmd, &KeywordWeights::default(), &mut evidence);
        assert_eq!(score, 15);
        assert_eq!(evidence, vec!["phrase:api keys"]);
    }

    #[test]
    fn test_exact_and_partial() {
        let cmd = CommandEntry::builder("x", Category::Vault).keywords(&["vault"]).build();
        assert_eq!(kw("open the vault", &cmd), 8);
        // "vaults" contains "vault"
        assert_eq!(kw("list vaults", &cmd), 3);
        // tokens of length <= 3 never earn partial credit
        let short = CommandEntry::builder("y", Category::Vault).keywords(&["keystore"]).build();
        assert_eq!(kw("key", &short), 0);
        assert_eq!(kw("keys", &short), 3);
    }

    #[test]
    fn test_phrase_absent_falls_back_to_partial() {
        let cmd = CommandEntry::builder("x", Category::Vault).keywords(&["api keys"]).build();
        // "keys" is a long-enough token contained in the phrase
        assert_eq!(kw("rotate keys", &cmd), 3);
        assert_eq!(kw("hello", &cmd), 0);
    }

    #[test]
    fn test_keyword_cap() {
        let cmd = CommandEntry::builder("x", Category::Vault)
            .keywords(&["a b", "c d", "e f", "g h"])
            .build();
        assert_eq!(kw("a b c d e f g h", &cmd), 40);
    }

    #[test]
    fn test_empty_query_scores_nothing() {
        assert_eq!(kw("", &vault_cmd()), 0);
        assert_eq!(kw("?!", &vault_cmd()), 0);
    }

    #[test]
    fn test_keyword_monotonic_in_phrase() {
        let cmd = vault_cmd();
        let with_phrase = kw("where do I put api keys", &cmd);
        let without = kw("where do I put them", &cmd);
        assert!(with_phrase >= 15);
        assert!(with_phrase > without);
    }

    #[test]
    fn test_sequential_recency_bonus() {
        let cmd = vault_cmd();
        let w = SequenceWeights::default();

        let latest = RecommendationContext::default().with_recent_actions(&["engine_import"]);
        assert_eq!(sequential_score(&latest, &cmd, &w, &mut Vec::new()), 25);

        let older = RecommendationContext::default().with_recent_actions(&["help", "engine_import"]);
        assert_eq!(sequential_score(&older, &cmd, &w, &mut Vec::new()), 20);

        let both = RecommendationContext::default().with_recent_actions(&["engine_verify", "engine_import"]);
        assert_eq!(sequential_score(&both, &cmd, &w, &mut Vec::new()), 25);

        let none = RecommendationContext::default().with_recent_actions(&["help"]);
        assert_eq!(sequential_score(&none, &cmd, &w, &mut Vec::new()), 0);
    }

    #[test]
    fn test_context_signals() {
        let cmd = CommandEntry::builder("x", Category::Crm)
            .views(&["crm"])
            .services(&["crm", "linkedin"])
            .boost_workflows()
            .boost_saved_files()
            .boost_purchases()
            .build();
        let w = ContextWeights::default();

        let view_only = RecommendationContext::default().with_view("crm");
        assert_eq!(context_score(&view_only, &cmd, &w, &mut Vec::new()), 10);

        let services = RecommendationContext::default().with_services(&["crm", "linkedin"]);
        assert_eq!(context_score(&services, &cmd, &w, &mut Vec::new()), 10);

        let mut flags = RecommendationContext::default();
        flags.has_workflows = true;
        flags.has_saved_files = true;
        flags.has_purchases = true;
        assert_eq!(context_score(&flags, &cmd, &w, &mut Vec::new()), 11);

        let everything = flags.with_view("crm").with_services(&["crm", "linkedin"]);
        assert_eq!(context_score(&everything, &cmd, &w, &mut Vec::new()), 20);
    }

    #[test]
    fn test_flags_without_affinity_score_nothing() {
        let cmd = CommandEntry::builder("x", Category::General).build();
        let mut ctx = RecommendationContext::default().with_view("settings");
        ctx.has_workflows = true;
        assert_eq!(context_score(&ctx, &cmd, &ContextWeights::default(), &mut Vec::new()), 0);
    }

    #[test]
    fn test_freshness_penalty() {
        let cmd = vault_cmd();
        let mut evidence = Vec::new();
        let ctx = RecommendationContext::default().with_recent_actions(&["help", "vault_create"]);
        assert_eq!(freshness_penalty(&ctx, &cmd, 10, &mut evidence), -10);
        assert_eq!(evidence, vec!["recent:self"]);

        let clean = RecommendationContext::default();
        assert_eq!(freshness_penalty(&clean, &cmd, 10, &mut Vec::new()), 0);
    }

    #[test]
    fn test_score_command_sums_contributions() {
        let cmd = vault_cmd();
        let ctx = RecommendationContext::default()
            .with_message(Message::user("encrypt my api keys"))
            .with_view("vault")
            .with_recent_actions(&["engine_import"]);
        let q = Query::from_messages(&ctx.messages);

        let breakdown = score_command(&cmd, &q, &ctx, &ScoringConfig::default());
        // phrase "api keys" 15 + exact "encrypt" 8
        assert_eq!(breakdown.keyword, 23);
        assert_eq!(breakdown.sequential, 25);
        assert_eq!(breakdown.context, 10);
        assert_eq!(breakdown.freshness, 0);
        assert_eq!(breakdown.total(), 58);
        assert!(breakdown.evidence.contains(&"follows:engine_import".to_string()));
    }
}
