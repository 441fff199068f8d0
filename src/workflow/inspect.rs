use log::{error, info};

use crate::db::DataService;
use crate::models::{MENTOR_TABLE, PROFILE_TABLE};

pub const PROFILE_COLUMNS: &str = "id,full_name,role";
pub const MENTOR_COLUMNS: &str = "id,user_id,bio,company";

/// Read-only dump of both tables for manual review. A query failure on
/// one table is logged and the other table is still attempted.
pub async fn run(svc: &(impl DataService + Sync)) {
    dump_table(svc, PROFILE_TABLE, PROFILE_COLUMNS).await;
    dump_table(svc, MENTOR_TABLE, MENTOR_COLUMNS).await;
}

async fn dump_table(svc: &(impl DataService + Sync), table: &str, columns: &str) {
    info!("Fetching {table} ({columns})");
    let rows = match svc.select(table, columns, None).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("{table} query failed: {e}");
            return;
        }
    };
    println!("{table}: {} row(s)", rows.len());
    match serde_json::to_string_pretty(&rows) {
        Ok(dump) => println!("{dump}"),
        Err(e) => error!("failed to render {table} dump: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::testing::ScriptedService;

    #[tokio::test]
    async fn dumps_both_tables_with_projected_columns() {
        let svc = ScriptedService::with_rows(
            PROFILE_TABLE,
            vec![ScriptedService::row(&[
                ("id", serde_json::json!("p1")),
                ("full_name", serde_json::json!("Asha Rao")),
                ("role", serde_json::json!("student")),
            ])],
        );
        run(&svc).await;
        let calls = svc.select_calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], (PROFILE_TABLE.into(), PROFILE_COLUMNS.into(), None));
        assert_eq!(calls[1], (MENTOR_TABLE.into(), MENTOR_COLUMNS.into(), None));
    }

    #[tokio::test]
    async fn profile_failure_does_not_stop_the_mentor_dump() {
        let mut svc = ScriptedService::default();
        svc.fail_select.insert(PROFILE_TABLE);
        run(&svc).await;
        let calls = svc.select_calls.lock().unwrap();
        let tables: Vec<&str> = calls.iter().map(|(t, _, _)| t.as_str()).collect();
        assert_eq!(tables, vec![PROFILE_TABLE, MENTOR_TABLE]);
    }

    #[tokio::test]
    async fn empty_tables_dump_without_error() {
        // No canned rows at all: both selects return empty sequences.
        let svc = ScriptedService::default();
        run(&svc).await;
        assert_eq!(svc.select_calls.lock().unwrap().len(), 2);
        assert!(svc.update_calls.lock().unwrap().is_empty());
    }
}
