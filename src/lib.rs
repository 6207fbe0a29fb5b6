//! Command Recommender - contextual next-command suggestions for the console
//!
//! Ranks a fixed catalog of console commands against a snapshot of the
//! session and returns the two or three the user most likely wants next.
//!
//! # Pipeline
//! 1. Query builder: last 5 messages, user turns only, latest user turn doubled
//! 2. Prerequisite gate: commands with unmet requirements are dropped
//! 3. Scorer: keyword (cap 40) + sequence (cap 25) + context (cap 20) - freshness (10)
//! 4. Ranker: stable sort, top 3, pad to 2 from a fallback list
//! 5. Confidence: linear rescale of the raw score into 45..=97
//!
//! Every call is a pure function of its input and the immutable catalog.
//!
//! ```
//! use command_recommender::{recommend, Message, RecommendationContext};
//!
//! let ctx = RecommendationContext::default()
//!     .with_message(Message::user("import my api keys"))
//!     .with_view("engine");
//! let recs = recommend(&ctx);
//! assert!(recs.len() >= 2);
//! assert!(recs.iter().all(|r| (45..=97).contains(&r.confidence)));
//! ```

pub mod builtin;
pub mod catalog;
pub mod confidence;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod gate;
pub mod query;
pub mod ranker;
pub mod recommendation;
pub mod scorer;
pub mod tokenizer;

pub use catalog::{ActionKind, Catalog, Category, CommandEntry, CommandEntryBuilder};
pub use confidence::{map_confidence, ConfidenceTier};
pub use config::ScoringConfig;
pub use context::{Message, RecommendationContext, Role};
pub use engine::{recommend, Explanation, Recommender};
pub use error::{RecommenderError, Result};
pub use recommendation::Recommendation;
pub use scorer::ScoreBreakdown;
