//! Prerequisite gate: hard eligibility filter applied before scoring.

use crate::catalog::CommandEntry;
use crate::context::RecommendationContext;

/// Whether every prerequisite declared by `cmd` holds in `ctx`.
pub fn prerequisites_met(cmd: &CommandEntry, ctx: &RecommendationContext) -> bool {
    let p = &cmd.prerequisites;

    if p.has_workflows && !ctx.has_workflows {
        return false;
    }
    if p.has_saved_files && !ctx.has_saved_files {
        return false;
    }
    if p.has_purchases && !ctx.has_purchases {
        return false;
    }

    p.connected_services.iter().all(|s| ctx.is_connected(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_no_prerequisites_always_eligible() {
        let cmd = CommandEntry::builder("help", Category::General).build();
        assert!(prerequisites_met(&cmd, &RecommendationContext::default()));
    }

    #[test]
    fn test_flag_requirements() {
        let cmd = CommandEntry::builder("workflow_run", Category::Workflow)
            .requires_workflows()
            .build();
        let mut ctx = RecommendationContext::default();
        assert!(!prerequisites_met(&cmd, &ctx));
        ctx.has_workflows = true;
        assert!(prerequisites_met(&cmd, &ctx));

        let files = CommandEntry::builder("vault_open", Category::Vault)
            .requires_saved_files()
            .build();
        assert!(!prerequisites_met(&files, &ctx));

        let purchases = CommandEntry::builder("store_download", Category::Store)
            .requires_purchases()
            .build();
        ctx.has_purchases = true;
        assert!(prerequisites_met(&purchases, &ctx));
    }

    #[test]
    fn test_all_services_required() {
        let cmd = CommandEntry::builder("sync", Category::Crm)
            .requires_services(&["crm", "linkedin"])
            .build();

        let none = RecommendationContext::default();
        let partial = RecommendationContext::default().with_services(&["crm"]);
        let both = RecommendationContext::default().with_services(&["linkedin", "crm", "stripe"]);

        assert!(!prerequisites_met(&cmd, &none));
        assert!(!prerequisites_met(&cmd, &partial));
        assert!(prerequisites_met(&cmd, &both));
    }
}
