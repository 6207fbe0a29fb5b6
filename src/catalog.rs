//! Command catalog: the closed, immutable registry of recommendable commands.
//!
//! Entries are stored in declaration order (which is also the ranking
//! tie-break order) with a side index from id to position. A catalog is built
//! once and then only ever borrowed.

use crate::error::{RecommenderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Closed enumerations
// ============================================================================

/// Product area a command belongs to.
///
/// Declaration order doubles as display order when grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vault,
    Engine,
    Deed,
    Workflow,
    Store,
    Builder,
    Social,
    Crm,
    Convert,
    General,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Vault,
        Category::Engine,
        Category::Deed,
        Category::Workflow,
        Category::Store,
        Category::Builder,
        Category::Social,
        Category::Crm,
        Category::Convert,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vault => "vault",
            Category::Engine => "engine",
            Category::Deed => "deed",
            Category::Workflow => "workflow",
            Category::Store => "store",
            Category::Builder => "builder",
            Category::Social => "social",
            Category::Crm => "crm",
            Category::Convert => "convert",
            Category::General => "general",
        }
    }

    /// Accent color used by the UI for badges and pins.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Vault => "#a78bfa",
            Category::Engine => "#00d4ff",
            Category::Deed => "#f59e0b",
            Category::Workflow => "#7ed957",
            Category::Store => "#ec4899",
            Category::Builder => "#6366f1",
            Category::Social => "#38bdf8",
            Category::Crm => "#ff6b35",
            Category::Convert => "#8b5cf6",
            Category::General => "#8888a0",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RecommenderError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| RecommenderError::UnknownCategory(s.to_string()))
    }
}

/// How the UI layer should carry out a chosen command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Put the invocation text into the chat input.
    ChatCommand,
    /// Switch to the view named by the payload.
    Navigate,
    /// Call the backend operation named by the payload.
    ApiCall,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::ChatCommand => "chat_command",
            ActionKind::Navigate => "navigate",
            ActionKind::ApiCall => "api_call",
        }
    }
}

// ============================================================================
// Command entries
// ============================================================================

/// Session state that makes a command more likely. Every field is optional;
/// an empty list or `false` flag contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSignals {
    /// `currentView` values that boost this command
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<String>,

    /// Connected services that boost this command
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_workflows: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_saved_files: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_purchases: bool,
}

/// Hard eligibility requirements. Unmet requirements exclude the command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prerequisites {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_workflows: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_saved_files: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_purchases: bool,

    /// Every one of these must be connected
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connected_services: Vec<String>,
}

impl Prerequisites {
    pub fn is_empty(&self) -> bool {
        !self.has_workflows
            && !self.has_saved_files
            && !self.has_purchases
            && self.connected_services.is_empty()
    }
}

/// A single catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEntry {
    pub id: String,
    pub label: String,
    pub description: String,
    /// Text typed into the chat to run the command, e.g. `/vault create`
    pub invocation: String,
    pub category: Category,
    /// Opaque glyph name, resolved by the UI
    pub icon: String,
    /// Lowercase keywords and phrases, in declaration order
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "is_default_signals")]
    pub context_signals: ContextSignals,
    #[serde(skip_serializing_if = "Prerequisites::is_empty")]
    pub prerequisites: Prerequisites,
    /// Ids of commands that commonly precede this one
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub follows_after: Vec<String>,
    pub action: ActionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_payload: Option<String>,
}

fn is_default_signals(signals: &ContextSignals) -> bool {
    *signals == ContextSignals::default()
}

impl CommandEntry {
    pub fn builder(id: &str, category: Category) -> CommandEntryBuilder {
        CommandEntryBuilder::new(id, category)
    }
}

/// Builder for [`CommandEntry`]. Anything not set stays empty; the action
/// defaults to [`ActionKind::ChatCommand`].
#[derive(Debug, Clone)]
pub struct CommandEntryBuilder {
    entry: CommandEntry,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl CommandEntryBuilder {
    pub fn new(id: &str, category: Category) -> Self {
        Self {
            entry: CommandEntry {
                id: id.to_string(),
                label: String::new(),
                description: String::new(),
                invocation: String::new(),
                category,
                icon: String::new(),
                keywords: Vec::new(),
                context_signals: ContextSignals::default(),
                prerequisites: Prerequisites::default(),
                follows_after: Vec::new(),
                action: ActionKind::ChatCommand,
                action_payload: None,
            },
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.entry.label = label.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.entry.description = description.to_string();
        self
    }

    pub fn invocation(mut self, invocation: &str) -> Self {
        self.entry.invocation = invocation.to_string();
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.entry.icon = icon.to_string();
        self
    }

    /// Keywords are lowercased here so the scorer never has to.
    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.entry.keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        self
    }

    pub fn views(mut self, views: &[&str]) -> Self {
        self.entry.context_signals.views = owned(views);
        self
    }

    pub fn services(mut self, services: &[&str]) -> Self {
        self.entry.context_signals.services = owned(services);
        self
    }

    pub fn boost_workflows(mut self) -> Self {
        self.entry.context_signals.has_workflows = true;
        self
    }

    pub fn boost_saved_files(mut self) -> Self {
        self.entry.context_signals.has_saved_files = true;
        self
    }

    pub fn boost_purchases(mut self) -> Self {
        self.entry.context_signals.has_purchases = true;
        self
    }

    pub fn requires_workflows(mut self) -> Self {
        self.entry.prerequisites.has_workflows = true;
        self
    }

    pub fn requires_saved_files(mut self) -> Self {
        self.entry.prerequisites.has_saved_files = true;
        self
    }

    pub fn requires_purchases(mut self) -> Self {
        self.entry.prerequisites.has_purchases = true;
        self
    }

    pub fn requires_services(mut self, services: &[&str]) -> Self {
        self.entry.prerequisites.connected_services = owned(services);
        self
    }

    pub fn follows_after(mut self, ids: &[&str]) -> Self {
        self.entry.follows_after = owned(ids);
        self
    }

    pub fn navigate(mut self, view: &str) -> Self {
        self.entry.action = ActionKind::Navigate;
        self.entry.action_payload = Some(view.to_string());
        self
    }

    pub fn api_call(mut self, operation: &str) -> Self {
        self.entry.action = ActionKind::ApiCall;
        self.entry.action_payload = Some(operation.to_string());
        self
    }

    pub fn build(self) -> CommandEntry {
        self.entry
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable registry of commands keyed by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CommandEntry>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and dangling `follows_after`
    /// references. Keywords are lowercased here so hand-built entries match
    /// the same way builder-made ones do.
    pub fn new(mut entries: Vec<CommandEntry>) -> Result<Self> {
        for entry in &mut entries {
            for kw in &mut entry.keywords {
                *kw = kw.to_lowercase();
            }
        }

        let mut by_id = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_id.insert(entry.id.clone(), idx).is_some() {
                return Err(RecommenderError::DuplicateCommand(entry.id.clone()));
            }
        }

        for entry in &entries {
            if let Some(missing) = entry.follows_after.iter().find(|id| !by_id.contains_key(*id)) {
                return Err(RecommenderError::UnknownCommand {
                    referrer: entry.id.clone(),
                    missing: missing.clone(),
                });
            }
        }

        Ok(Self { entries, by_id })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommandEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&CommandEntry> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    /// Declaration position of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Free-text filter over label, description, category and invocation.
    /// A blank query returns every entry.
    pub fn search(&self, query: &str) -> Vec<&CommandEntry> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.entries.iter().collect();
        }

        self.entries
            .iter()
            .filter(|c| {
                c.label.to_lowercase().contains(&q)
                    || c.description.to_lowercase().contains(&q)
                    || c.category.as_str().contains(&q)
                    || c.invocation.to_lowercase().contains(&q)
            })
            .collect()
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter().filter(move |c| c.category == category)
    }

    /// Group entries by category; categories come out in enum order and
    /// entries keep declaration order within a group.
    pub fn grouped<'a, I>(entries: I) -> BTreeMap<Category, Vec<&'a CommandEntry>>
    where
        I: IntoIterator<Item = &'a CommandEntry>,
    {
        let mut groups: BTreeMap<Category, Vec<&'a CommandEntry>> = BTreeMap::new();
        for entry in entries {
            groups.entry(entry.category).or_default().push(entry);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CommandEntry;
    type IntoIter = std::slice::Iter<'a, CommandEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
