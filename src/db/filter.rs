/// OR-combination of case-insensitive substring predicates over named
/// columns, rendered in the data service's filter syntax:
/// `(full_name.ilike.%test%,full_name.ilike.%dasd%)`.
#[derive(Debug, Clone, Default)]
pub struct OrFilter {
    clauses: Vec<String>,
}

impl OrFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one `ilike %pattern%` clause per pattern for `column`.
    pub fn ilike_any(mut self, column: &str, patterns: &[&str]) -> Self {
        for p in patterns {
            self.clauses.push(format!("{column}.ilike.%{p}%"));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Render the parenthesized OR expression for the request query string.
    pub fn to_expression(&self) -> String {
        format!("({})", self.clauses.join(","))
    }
}
