use log::{error, info, warn};

use crate::db::DataService;
use crate::models::{mentor_rule, profile_rule, row_id, ScrubRule};

/// Per-table result of a cleanup pass. Row-level failures are counted
/// here and logged, but do not affect the process exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOutcome {
    pub matched: usize,
    pub updated: usize,
    pub failed: usize,
}

/// Scrub placeholder rows from both tables, sequentially. A failed
/// selection skips that table only; a failed update skips that row only.
pub async fn run(svc: &(impl DataService + Sync)) {
    for rule in [profile_rule(), mentor_rule()] {
        scrub_table(svc, &rule).await;
    }
}

/// One table's select → report → per-row overwrite pass.
pub async fn scrub_table(svc: &(impl DataService + Sync), rule: &ScrubRule) -> TableOutcome {
    let rows = match svc
        .select(rule.table, rule.select_columns, Some(&rule.filter()))
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            error!("{} query failed, skipping table: {e}", rule.table);
            return TableOutcome::default();
        }
    };
    info!(
        "{}: {} row(s) match placeholder patterns",
        rule.table,
        rows.len()
    );

    let mut outcome = TableOutcome {
        matched: rows.len(),
        ..TableOutcome::default()
    };
    for row in &rows {
        let Some(id) = row_id(row) else {
            warn!("{}: row without usable id, skipping: {:?}", rule.table, row);
            outcome.failed += 1;
            continue;
        };
        match svc.update(rule.table, &rule.replacement, &id).await {
            Ok(()) => {
                info!("{} {id}: scrubbed", rule.table);
                outcome.updated += 1;
            }
            Err(e) => {
                warn!("{} {id}: update failed: {e}", rule.table);
                outcome.failed += 1;
            }
        }
    }
    info!(
        "{}: {} updated, {} failed",
        rule.table, outcome.updated, outcome.failed
    );
    outcome
}
