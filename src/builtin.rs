//! Built-in console command catalog.

use crate::catalog::{Catalog, Category, CommandEntry};
use lazy_static::lazy_static;
use std::sync::Arc;

lazy_static! {
    static ref BUILTIN: Arc<Catalog> = Arc::new(
        Catalog::new(builtin_entries()).expect("built-in catalog must have unique, resolvable ids")
    );
}

/// The process-wide built-in catalog. Built on first use, shared read-only.
pub fn catalog() -> &'static Catalog {
    &BUILTIN
}

/// Shared handle to the same catalog, for owners such as a `Recommender`.
pub fn shared() -> Arc<Catalog> {
    Arc::clone(&BUILTIN)
}

/// Fresh copy of the built-in entries, in declaration order.
pub fn builtin_entries() -> Vec<CommandEntry> {
    let mut entries = Vec::with_capacity(46);
    entries.extend(vault_commands());
    entries.extend(deed_commands());
    entries.extend(engine_commands());
    entries.extend(workflow_commands());
    entries.extend(store_commands());
    entries.extend(builder_commands());
    entries.extend(social_commands());
    entries.extend(crm_commands());
    entries.extend(general_commands());
    entries
}

// ============================================================================
// Vault
// ============================================================================

fn vault_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry::builder("vault_create", Category::Vault)
            .label("Create Encrypted Vault")
            .description("Seal credentials into an AES-256-GCM encrypted .0nv vault file with hardware fingerprint binding.")
            .invocation("/vault create")
            .icon("Lock")
            .keywords(&[
                "vault", "encrypt", "seal", "secure", "credentials", "keys", "api keys",
                "protect", "aes", "store credentials", "hide keys", "lock",
            ])
            .views(&["vault", "settings", "engine"])
            .follows_after(&["engine_verify", "engine_import"])
            .build(),
        CommandEntry::builder("vault_open", Category::Vault)
            .label("Open Vault File")
            .description("Decrypt and access the contents of an existing .0nv vault file.")
            .invocation("/vault open")
            .icon("Unlock")
            .keywords(&[
                "open vault", "decrypt", "access vault", "read vault", "load vault",
                "unseal vault", "unlock", "view credentials",
            ])
            .views(&["vault"])
            .boost_saved_files()
            .requires_saved_files()
            .follows_after(&["vault_create", "vault_verify"])
            .build(),
        CommandEntry::builder("vault_inspect", Category::Vault)
            .label("Inspect Vault")
            .description("View vault metadata, layer manifest, and creation info without decrypting.")
            .invocation("/vault inspect")
            .icon("ScanLine")
            .keywords(&[
                "inspect vault", "vault metadata", "vault info", "vault details",
                "what's in vault", "vault contents", "check vault",
            ])
            .views(&["vault"])
            .boost_saved_files()
            .requires_saved_files()
            .follows_after(&["vault_create", "vault_open"])
            .build(),
        CommandEntry::builder("vault_verify", Category::Vault)
            .label("Verify Vault Integrity")
            .description("Run the Seal of Truth SHA3-256 verification to confirm the vault has not been tampered with.")
            .invocation("/vault verify")
            .icon("ShieldCheck")
            .keywords(&[
                "verify vault", "integrity", "seal of truth", "tamper", "authentic",
                "valid vault", "check integrity", "sha3", "trust",
            ])
            .views(&["vault"])
            .boost_saved_files()
            .requires_saved_files()
            .follows_after(&["vault_create", "vault_open", "vault_inspect"])
            .build(),
        CommandEntry::builder("vault_seal", Category::Vault)
            .label("Seal Credentials")
            .description("Encrypt individual API keys with AES-256-GCM and hardware fingerprint binding.")
            .invocation("/vault seal")
            .icon("KeyRound")
            .keywords(&[
                "seal", "seal credentials", "seal keys", "bind to machine", "hardware bind",
                "encrypt keys", "machine locked",
            ])
            .views(&["vault", "engine", "settings"])
            .follows_after(&["engine_import", "engine_verify"])
            .build(),
        CommandEntry::builder("vault_unseal", Category::Vault)
            .label("Unseal Credentials")
            .description("Decrypt hardware-bound credentials sealed with /vault seal.")
            .invocation("/vault unseal")
            .icon("KeySquare")
            .keywords(&[
                "unseal", "unseal credentials", "decrypt keys", "unlock credentials",
                "restore keys", "retrieve credentials",
            ])
            .views(&["vault"])
            .boost_saved_files()
            .requires_saved_files()
            .follows_after(&["vault_seal", "vault_create"])
            .build(),
        CommandEntry::builder("vault_container", Category::Vault)
            .label("Create Vault Container")
            .description("Multi-layer encrypted container with 7 semantic layers: workflows, credentials, env_vars, mcp_configs, site_profiles, ai_brain, audit_trail.")
            .invocation("/vault container")
            .icon("Boxes")
            .keywords(&[
                "container", "vault container", "multi layer", "7 layers", "all in one",
                "full backup", "comprehensive vault", "bundle vault", "package everything",
            ])
            .views(&["vault"])
            .boost_saved_files()
            .follows_after(&["vault_create", "engine_bundle"])
            .build(),
        CommandEntry::builder("vault_escrow", Category::Vault)
            .label("Create Escrow Package")
            .description("Multi-party escrow using X25519 ECDH, up to 8 parties with a per-layer access matrix.")
            .invocation("/vault escrow")
            .icon("Users")
            .keywords(&[
                "escrow", "multi party", "share vault", "split key", "x25519",
                "shared access", "team vault", "delegate", "escrow package",
            ])
            .views(&["vault"])
            .boost_saved_files()
            .requires_saved_files()
            .follows_after(&["vault_container", "deed_create"])
            .build(),
    ]
}

// ============================================================================
// Deed
// ============================================================================

fn deed_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry::builder("deed_create", Category::Deed)
            .label("Create Business Deed")
            .description("Package all digital business assets (credentials, workflows, AI brain, site profiles) into a transferable .0nv container.")
            .invocation("/deed create")
            .icon("FileSignature")
            .keywords(&[
                "deed", "business deed", "transfer business", "sell business",
                "package assets", "digital assets", "business transfer", "convey",
                "hand off", "ownership", "chain of custody",
            ])
            .views(&["vault", "engine"])
            .follows_after(&["vault_container", "engine_bundle"])
            .build(),
        CommandEntry::builder("deed_open", Category::Deed)
            .label("Open Deed File")
            .description("Decrypt and view the full contents of a business deed .0nv file.")
            .invocation("/deed open")
            .icon("FolderOpen")
            .keywords(&[
                "open deed", "read deed", "view deed", "access deed",
                "decrypt deed", "load deed",
            ])
            .views(&["vault"])
            .follows_after(&["deed_accept", "deed_inspect"])
            .build(),
        CommandEntry::builder("deed_inspect", Category::Deed)
            .label("Inspect Deed")
            .description("View deed metadata and the full chain of custody transfer history without decrypting.")
            .invocation("/deed inspect")
            .icon("ClipboardList")
            .keywords(&[
                "inspect deed", "deed info", "deed details", "deed metadata",
                "chain of custody", "transfer history", "deed audit",
            ])
            .views(&["vault"])
            .follows_after(&["deed_create", "deed_accept"])
            .build(),
        CommandEntry::builder("deed_verify", Category::Deed)
            .label("Verify Deed Authenticity")
            .description("Verify Ed25519 digital signatures and Seal of Truth to confirm deed integrity.")
            .invocation("/deed verify")
            .icon("BadgeCheck")
            .keywords(&[
                "verify deed", "authentic", "deed signature", "ed25519",
                "deed integrity", "trust deed", "valid deed",
            ])
            .views(&["vault"])
            .follows_after(&["deed_open", "deed_inspect"])
            .build(),
        CommandEntry::builder("deed_accept", Category::Deed)
            .label("Accept Deed Transfer")
            .description("Accept an incoming business deed transfer and take ownership of all included assets.")
            .invocation("/deed accept")
            .icon("HandshakeIcon")
            .keywords(&[
                "accept deed", "receive deed", "incoming transfer", "take ownership",
                "claim deed", "accept transfer", "new owner",
            ])
            .views(&["vault"])
            .follows_after(&["deed_verify"])
            .build(),
        CommandEntry::builder("deed_import", Category::Deed)
            .label("Import Deed Assets")
            .description("Unpack and import deed contents: writes .0n connection files, .env, workflows, MCP configs, and AI brain data locally.")
            .invocation("/deed import")
            .icon("PackageOpen")
            .keywords(&[
                "import deed", "unpack deed", "restore deed", "load deed assets",
                "install deed", "apply deed", "deploy deed",
            ])
            .views(&["vault", "engine"])
            .follows_after(&["deed_accept", "deed_open"])
            .build(),
    ]
}

// ============================================================================
// Engine
// ============================================================================

fn engine_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry::builder("engine_import", Category::Engine)
            .label("Import Credentials")
            .description("Auto-detect and import API keys from .env files, CSV exports, or JSON configs. Maps to all 26 services.")
            .invocation("/engine import")
            .icon("Download")
            .keywords(&[
                "import", "import credentials", "import keys", "load env", "dotenv",
                "csv import", "connect services", "add keys", "turn it on",
                "setup", "get started", "onboard",
            ])
            .views(&["engine", "settings"])
            .build(),
        CommandEntry::builder("engine_verify", Category::Engine)
            .label("Verify API Keys")
            .description("Test all imported credentials with a live API health check across every connected service.")
            .invocation("/engine verify")
            .icon("Zap")
            .keywords(&[
                "verify", "test keys", "check keys", "api health", "validate credentials",
                "test connections", "are keys valid", "ping services", "health check",
            ])
            .views(&["engine", "settings"])
            .follows_after(&["engine_import"])
            .build(),
        CommandEntry::builder("engine_platforms", Category::Engine)
            .label("Generate AI Platform Configs")
            .description("Generate ready-to-paste config files for Claude Desktop, Cursor, Windsurf, Gemini, Continue, Cline, and OpenAI.")
            .invocation("/engine platforms")
            .icon("Cpu")
            .keywords(&[
                "platform config", "claude desktop", "cursor", "windsurf", "cline",
                "ai config", "mcp config", "ide config", "generate config",
                "setup claude", "setup cursor",
            ])
            .views(&["engine"])
            .follows_after(&["engine_verify"])
            .build(),
        CommandEntry::builder("engine_export", Category::Engine)
            .label("Export Brain Bundle")
            .description("Create a portable AES-256-GCM encrypted credential package that works on any machine (no hardware binding).")
            .invocation("/engine export")
            .icon("UploadCloud")
            .keywords(&[
                "export", "brain bundle", "portable", "share credentials",
                "backup credentials", "move setup", "export keys", "portable bundle",
            ])
            .views(&["engine"])
            .follows_after(&["engine_verify", "engine_import"])
            .build(),
        CommandEntry::builder("engine_bundle", Category::Engine)
            .label("Bundle Everything")
            .description("Full system export of credentials, workflows, configs and AI brain into one portable encrypted package.")
            .invocation("/engine bundle")
            .icon("Package")
            .keywords(&[
                "bundle", "full export", "everything", "complete backup",
                "all in one", "full bundle", "export all", "package up",
            ])
            .views(&["engine"])
            .boost_workflows()
            .follows_after(&["engine_export", "workflow_list"])
            .build(),
        CommandEntry::builder("engine_open", Category::Engine)
            .label("Open Brain Bundle")
            .description("Decrypt and restore from a portable brain bundle, reconstructing all credentials and configs.")
            .invocation("/engine open")
            .icon("BrainCircuit")
            .keywords(&[
                "open bundle", "restore bundle", "load bundle", "import bundle",
                "decrypt bundle", "restore brain", "apply bundle",
            ])
            .views(&["engine"])
            .follows_after(&["engine_bundle", "engine_export"])
            .build(),
    ]
}

// ============================================================================
// Workflow
// ============================================================================

fn workflow_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry::builder("workflow_create", Category::Workflow)
            .label("Create New Workflow")
            .description("Build a new .0n SWITCH file: define steps, triggers, actions, and service integrations.")
            .invocation("/workflow create")
            .icon("GitBranch")
            .keywords(&[
                "create workflow", "new workflow", "build workflow", "make workflow",
                "automate", "automation", "switch file", "run", "new run",
                "workflow", "flow", "pipeline",
            ])
            .views(&["builder", "workflows"])
            .build(),
        CommandEntry::builder("workflow_run", Category::Workflow)
            .label("Run Workflow")
            .description("Execute a saved .0n SWITCH file, running all steps in sequence with live output.")
            .invocation("/workflow run")
            .icon("Play")
            .keywords(&[
                "run workflow", "execute", "start workflow", "fire workflow",
                "trigger workflow", "run run", "execute switch", "launch workflow",
            ])
            .views(&["workflows"])
            .boost_workflows()
            .requires_workflows()
            .follows_after(&["workflow_create", "workflow_test", "workflow_import"])
            .build(),
        CommandEntry::builder("workflow_list", Category::Workflow)
            .label("List Workflows")
            .description("View all saved .0n SWITCH files with names, last run timestamps, and status.")
            .invocation("/workflow list")
            .icon("List")
            .keywords(&[
                "list workflows", "show workflows", "my workflows", "all workflows",
                "saved workflows", "workflow list", "runs", "show runs",
            ])
            .views(&["workflows"])
            .boost_workflows()
            .requires_workflows()
            .follows_after(&["workflow_create"])
            .build(),
        CommandEntry::builder("workflow_deploy", Category::Workflow)
            .label("Deploy Workflow Live")
            .description("Deploy a workflow with full production setup: CRM tags, custom values, webhook handlers.")
            .invocation("/workflow deploy")
            .icon("Rocket")
            .keywords(&[
                "deploy", "deploy workflow", "go live", "production", "publish workflow",
                "activate workflow", "launch", "deploy live",
            ])
            .views(&["workflows", "builder"])
            .boost_workflows()
            .requires_workflows()
            .follows_after(&["workflow_test", "workflow_create"])
            .build(),
        CommandEntry::builder("workflow_test", Category::Workflow)
            .label("Test Workflow")
            .description("Dry-run a workflow without executing real actions to validate logic and catch errors before deployment.")
            .invocation("/workflow test")
            .icon("TestTube")
            .keywords(&[
                "test workflow", "dry run", "validate workflow", "check workflow",
                "preview workflow", "workflow test", "debug workflow",
            ])
            .views(&["workflows", "builder"])
            .boost_workflows()
            .requires_workflows()
            .follows_after(&["workflow_create"])
            .build(),
        CommandEntry::builder("workflow_import", Category::Workflow)
            .label("Import Workflow")
            .description("Import a .0n SWITCH file from the store or from a local file upload.")
            .invocation("/workflow import")
            .icon("FileInput")
            .keywords(&[
                "import workflow", "load workflow", "upload workflow",
                "download workflow", "get workflow", "install workflow",
            ])
            .views(&["store", "workflows"])
            .boost_purchases()
            .follows_after(&["store_purchase", "store_download"])
            .build(),
    ]
}

// ============================================================================
// Store
// ============================================================================

fn store_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry::builder("store_browse", Category::Store)
            .label("Browse Store")
            .description("Explore the marketplace of ready-made .0n SWITCH files for common automation tasks.")
            .invocation("/store browse")
            .icon("ShoppingBag")
            .keywords(&[
                "store", "browse", "marketplace", "shop", "listings",
                "buy workflow", "find workflows", "explore", "catalog",
            ])
            .views(&["store"])
            .navigate("store")
            .build(),
        CommandEntry::builder("store_purchase", Category::Store)
            .label("Get Store Listing")
            .description("Purchase or claim a marketplace listing, pay-per-execution or one-time.")
            .invocation("/store purchase")
            .icon("CreditCard")
            .keywords(&[
                "purchase", "buy", "claim listing", "get workflow",
                "checkout", "pay", "acquire",
            ])
            .views(&["store"])
            .follows_after(&["store_browse"])
            .build(),
        CommandEntry::builder("store_publish", Category::Store)
            .label("Publish to Store")
            .description("List your .0n SWITCH file on the marketplace and earn per execution.")
            .invocation("/store publish")
            .icon("SendHorizontal")
            .keywords(&[
                "publish", "sell workflow", "list workflow", "monetize",
                "upload to store", "submit to marketplace", "earn",
            ])
            .views(&["store", "workflows"])
            .boost_workflows()
            .requires_workflows()
            .follows_after(&["workflow_test", "workflow_deploy"])
            .build(),
        CommandEntry::builder("store_download", Category::Store)
            .label("Download .0n File")
            .description("Download a purchased SWITCH file to your local environment.")
            .invocation("/store download")
            .icon("FileDown")
            .keywords(&[
                "download", "get file", "download workflow", "retrieve",
                "pull workflow", "download switch",
            ])
            .views(&["store"])
            .boost_purchases()
            .requires_purchases()
            .follows_after(&["store_purchase"])
            .build(),
    ]
}

// ============================================================================
// Builder
// ============================================================================

fn builder_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry::builder("builder_open", Category::Builder)
            .label("Open Visual Builder")
            .description("Launch the drag-and-drop workflow editor to visually wire steps and service calls.")
            .invocation("/builder open")
            .icon("LayoutTemplate")
            .keywords(&[
                "builder", "visual builder", "drag drop", "visual editor",
                "flow editor", "open builder", "graphical", "no code",
            ])
            .views(&["builder"])
            .navigate("builder")
            .build(),
        CommandEntry::builder("builder_save", Category::Builder)
            .label("Save Workflow")
            .description("Save the current visual builder state as a .0n SWITCH file.")
            .invocation("/builder save")
            .icon("Save")
            .keywords(&[
                "save", "save workflow", "save builder", "checkpoint",
                "persist workflow", "store workflow",
            ])
            .views(&["builder"])
            .follows_after(&["builder_open"])
            .build(),
        CommandEntry::builder("builder_convert", Category::Convert)
            .label("Convert Format")
            .description("Convert between workflow config formats: import Zapier, Make, n8n or export to OpenAI/Gemini.")
            .invocation("/builder convert")
            .icon("RefreshCw")
            .keywords(&[
                "convert", "format", "zapier", "make", "n8n", "openai format",
                "gemini format", "transform", "migrate format",
            ])
            .views(&["builder", "converter"])
            .follows_after(&["builder_open"])
            .navigate("convert")
            .build(),
        CommandEntry::builder("builder_preview", Category::Builder)
            .label("Preview Workflow")
            .description("Preview the current workflow execution plan without actually running it.")
            .invocation("/builder preview")
            .icon("Eye")
            .keywords(&[
                "preview", "preview workflow", "step through", "show steps",
                "execution plan", "what will happen", "walk through",
            ])
            .views(&["builder"])
            .boost_workflows()
            .follows_after(&["builder_open", "builder_save"])
            .build(),
    ]
}

// ============================================================================
// Social
// ============================================================================

fn social_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry::builder("social_post", Category::Social)
            .label("Post to Social")
            .description("Publish content to LinkedIn, Dev.to, and Reddit simultaneously.")
            .invocation("/social post")
            .icon("Share2")
            .keywords(&[
                "post", "social", "linkedin", "devto", "reddit",
                "publish post", "share content", "social media",
            ])
            .views(&["social"])
            .services(&["linkedin"])
            .build(),
        CommandEntry::builder("social_schedule", Category::Social)
            .label("Schedule Posts")
            .description("Queue social media content for future publishing and build a content calendar.")
            .invocation("/social schedule")
            .icon("CalendarClock")
            .keywords(&[
                "schedule", "queue post", "content calendar", "schedule post",
                "future post", "plan content", "drip",
            ])
            .views(&["social"])
            .follows_after(&["social_post"])
            .build(),
        CommandEntry::builder("social_analytics", Category::Social)
            .label("View Social Analytics")
            .description("Engagement metrics (impressions, clicks, reactions) across all connected social platforms.")
            .invocation("/social analytics")
            .icon("BarChart3")
            .keywords(&[
                "analytics", "engagement", "metrics", "impressions",
                "social stats", "performance", "clicks", "views",
            ])
            .views(&["social"])
            .follows_after(&["social_post", "social_schedule"])
            .build(),
    ]
}

// ============================================================================
// CRM
// ============================================================================

fn crm_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry::builder("crm_contacts", Category::Crm)
            .label("Manage Contacts")
            .description("Create, update, tag, and search contacts in the CRM across 23 contact tools.")
            .invocation("/crm contacts")
            .icon("ContactRound")
            .keywords(&[
                "contacts", "crm contacts", "manage contacts", "contact list",
                "add contact", "find contact", "search contacts", "customer",
            ])
            .views(&["crm"])
            .services(&["crm"])
            .requires_services(&["crm"])
            .build(),
        CommandEntry::builder("crm_workflows", Category::Crm)
            .label("CRM Workflows")
            .description("Manage CRM automation: add contacts to workflows and trigger sequences.")
            .invocation("/crm workflows")
            .icon("Workflow")
            .keywords(&[
                "crm workflow", "automation", "sequences", "drip", "trigger sequence",
                "add to workflow", "crm automation",
            ])
            .views(&["crm"])
            .services(&["crm"])
            .requires_services(&["crm"])
            .follows_after(&["crm_contacts"])
            .build(),
        CommandEntry::builder("crm_calendar", Category::Crm)
            .label("Calendar Management")
            .description("View availability, create appointments, and manage team calendars in the CRM.")
            .invocation("/crm calendar")
            .icon("Calendar")
            .keywords(&[
                "calendar", "appointment", "schedule", "booking",
                "availability", "slot", "meeting", "book",
            ])
            .views(&["crm"])
            .services(&["crm"])
            .requires_services(&["crm"])
            .follows_after(&["crm_contacts"])
            .build(),
        CommandEntry::builder("crm_conversations", Category::Crm)
            .label("View Conversations")
            .description("Browse CRM conversation threads across SMS, email, and chat channels.")
            .invocation("/crm conversations")
            .icon("MessageCircle")
            .keywords(&[
                "conversations", "messages", "sms", "chat", "inbox",
                "email threads", "communications", "crm messages",
            ])
            .views(&["crm"])
            .services(&["crm"])
            .requires_services(&["crm"])
            .follows_after(&["crm_contacts"])
            .build(),
        CommandEntry::builder("crm_opportunities", Category::Crm)
            .label("Pipeline Management")
            .description("View and update the sales pipeline: opportunities, stages, deal values, and forecasts.")
            .invocation("/crm opportunities")
            .icon("TrendingUp")
            .keywords(&[
                "pipeline", "opportunities", "deals", "sales", "funnel",
                "deal stage", "forecast", "revenue", "leads",
            ])
            .views(&["crm"])
            .services(&["crm"])
            .requires_services(&["crm"])
            .follows_after(&["crm_contacts"])
            .build(),
    ]
}

// ============================================================================
// General
// ============================================================================

fn general_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry::builder("help", Category::General)
            .label("Get Help")
            .description("Show all available commands, categories, and quick-start guides.")
            .invocation("/help")
            .icon("HelpCircle")
            .keywords(&[
                "help", "what can you do", "commands", "how do i",
                "guide", "docs", "tutorial", "list commands", "options",
            ])
            .build(),
        CommandEntry::builder("settings", Category::General)
            .label("Console Settings")
            .description("Configure console preferences: theme, default services, notification settings.")
            .invocation("/settings")
            .icon("Settings")
            .keywords(&[
                "settings", "preferences", "configure", "options",
                "setup", "config", "customize",
            ])
            .views(&["settings"])
            .navigate("settings")
            .build(),
        CommandEntry::builder("connect_service", Category::General)
            .label("Connect New Service")
            .description("Add API credentials for any of the 26 supported services and activate related tools.")
            .invocation("/connect")
            .icon("Plus")
            .keywords(&[
                "connect", "add service", "new service", "api key", "credential",
                "authorize", "link service", "integrate",
            ])
            .views(&["engine", "settings"])
            .follows_after(&["engine_import"])
            .build(),
        CommandEntry::builder("export_data", Category::General)
            .label("Export My Data")
            .description("Download a full export of all your data: workflows, history, connections, and settings.")
            .invocation("/export")
            .icon("DatabaseBackup")
            .keywords(&[
                "export data", "download data", "my data", "backup",
                "export everything", "data export", "gdpr",
            ])
            .views(&["settings"])
            .follows_after(&["engine_bundle"])
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ActionKind;

    #[test]
    fn test_builtin_catalog_builds() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 46);
        assert_eq!(catalog.entries()[0].id, "vault_create");
        assert_eq!(catalog.entries()[45].id, "export_data");
    }

    #[test]
    fn test_category_counts() {
        let catalog = catalog();
        let count = |c: Category| catalog.in_category(c).count();
        assert_eq!(count(Category::Vault), 8);
        assert_eq!(count(Category::Deed), 6);
        assert_eq!(count(Category::Engine), 6);
        assert_eq!(count(Category::Workflow), 6);
        assert_eq!(count(Category::Store), 4);
        assert_eq!(count(Category::Builder), 3);
        assert_eq!(count(Category::Convert), 1);
        assert_eq!(count(Category::Social), 3);
        assert_eq!(count(Category::Crm), 5);
        assert_eq!(count(Category::General), 4);
    }

    #[test]
    fn test_navigate_commands_carry_payload() {
        for entry in catalog() {
            match entry.action {
                ActionKind::Navigate | ActionKind::ApiCall => {
                    assert!(entry.action_payload.is_some(), "{} missing payload", entry.id)
                }
                ActionKind::ChatCommand => assert!(entry.action_payload.is_none()),
            }
        }
        assert_eq!(
            catalog().get("builder_convert").and_then(|c| c.action_payload.as_deref()),
            Some("convert")
        );
    }

    #[test]
    fn test_every_entry_is_described() {
        for entry in catalog() {
            assert!(!entry.label.is_empty(), "{} has no label", entry.id);
            assert!(entry.invocation.starts_with('/'), "{} invocation", entry.id);
            assert!(!entry.keywords.is_empty(), "{} has no keywords", entry.id);
        }
    }
}
