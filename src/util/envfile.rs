use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::ConfigError;

/// Parse key/value pairs from a local env file. Returns a map of
/// key/value pairs. Does not modify the process environment.
///
/// The parser is deliberately narrow: each line is split on `=`, the
/// segment before the first `=` becomes the key and the segment between
/// the first and second `=` becomes the value, both whitespace-trimmed.
/// A value containing `=` is therefore truncated at the first embedded
/// `=`. Lines without `=` are skipped. Last write wins on duplicate
/// keys. Deployed env files rely on these exact semantics.
pub fn load_env_map(path: &str) -> Result<HashMap<String, String>, ConfigError> {
    let content = fs::read_to_string(Path::new(path)).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    let mut map = HashMap::new();
    for line in content.lines() {
        let mut parts = line.split('=');
        let key = match parts.next() {
            Some(k) => k.trim(),
            None => continue,
        };
        let val = match parts.next() {
            Some(v) => v.trim(),
            None => continue,
        };
        map.insert(key.to_string(), val.to_string());
    }
    Ok(map)
}

/// Generate an env template file with placeholder values and comments.
pub fn write_env_template(path: &str) -> std::io::Result<()> {
    let mut f = fs::File::create(path)?;
    let template = r#"# Mentozy maintenance environment configuration template
# Copy this file to .env.local and fill in the data service credentials.

SUPABASE_URL=https://your-project.supabase.co
SUPABASE_SERVICE_ROLE_KEY=service-role-key
"#;
    f.write_all(template.as_bytes())?;
    Ok(())
}
