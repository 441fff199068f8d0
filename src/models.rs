use serde_json::{json, Value};

use crate::db::{OrFilter, Row};

pub const PROFILE_TABLE: &str = "profiles";
pub const MENTOR_TABLE: &str = "mentors";

/// Substrings that heuristically identify rows created during
/// development or testing. Matching is case-insensitive on both ends.
pub const PROFILE_PATTERNS: &[&str] = &["test", "dasd"];
pub const MENTOR_PATTERNS: &[&str] = &["test", "dasd", "ghgh"];

// Canonical replacement values. None of these contains a placeholder
// substring, which is what makes a cleanup run idempotent.
pub const CLEAN_FULL_NAME: &str = "Rohal Sharma";
pub const CLEAN_PHONE: &str = "9988776655";
pub const CLEAN_BIO: &str =
    "Experienced mentor passionate about helping learners reach their goals.";
pub const CLEAN_COMPANY: &str = "Mentozy";
pub const CLEAN_HOURLY_RATE: i64 = 150;

/// Everything the cleanup workflow needs to scrub one table: which rows
/// to select, which columns the patterns apply to, and the fixed patch
/// written over each matched row.
#[derive(Debug, Clone)]
pub struct ScrubRule {
    pub table: &'static str,
    pub select_columns: &'static str,
    pub match_columns: &'static [&'static str],
    pub patterns: &'static [&'static str],
    pub replacement: Value,
}

impl ScrubRule {
    /// OR-combination of ilike predicates: every pattern against every
    /// match column.
    pub fn filter(&self) -> OrFilter {
        self.match_columns
            .iter()
            .fold(OrFilter::new(), |f, col| f.ilike_any(col, self.patterns))
    }
}

pub fn profile_rule() -> ScrubRule {
    ScrubRule {
        table: PROFILE_TABLE,
        select_columns: "id,full_name",
        match_columns: &["full_name"],
        patterns: PROFILE_PATTERNS,
        replacement: json!({
            "full_name": CLEAN_FULL_NAME,
            "phone": CLEAN_PHONE,
        }),
    }
}

pub fn mentor_rule() -> ScrubRule {
    ScrubRule {
        table: MENTOR_TABLE,
        select_columns: "id,bio,company",
        match_columns: &["bio", "company"],
        patterns: MENTOR_PATTERNS,
        replacement: json!({
            "bio": CLEAN_BIO,
            "company": CLEAN_COMPANY,
            "hourly_rate": CLEAN_HOURLY_RATE,
        }),
    }
}

/// Case-insensitive substring match against any of the patterns.
pub fn matches_any(text: &str, patterns: &[&str]) -> bool {
    let lower = text.to_lowercase();
    patterns.iter().any(|p| lower.contains(&p.to_lowercase()))
}

/// Extract the row identifier for the update filter. Identifiers are
/// strings in the service schema, but numeric ids are rendered too so a
/// schema change does not silently drop rows.
pub fn row_id(row: &Row) -> Option<String> {
    match row.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
