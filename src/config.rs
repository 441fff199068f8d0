use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::util::envfile::load_env_map;

/// Env file key holding the data service base URL.
pub const URL_KEY: &str = "SUPABASE_URL";
/// Env file key holding the service-role access key.
pub const SERVICE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Credentials for the hosted data service, loaded from a local env file.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub url: String,
    pub key: String,
}

impl ServiceConfig {
    /// Load credentials from the env file at `path`. Fails when the file
    /// cannot be read or either required key is absent.
    pub fn from_env_file(path: &str) -> Result<Self, ConfigError> {
        let map = load_env_map(path)?;
        let url = map
            .get(URL_KEY)
            .cloned()
            .ok_or(ConfigError::MissingKey { key: URL_KEY })?;
        let key = map
            .get(SERVICE_KEY)
            .cloned()
            .ok_or(ConfigError::MissingKey { key: SERVICE_KEY })?;
        Ok(Self { url, key })
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_both_required_keys() {
        let f = write_temp(
            "SUPABASE_URL=https://x.supabase.co\nSUPABASE_SERVICE_ROLE_KEY= secret \nEXTRA=1\n",
        );
        let cfg = ServiceConfig::from_env_file(f.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.url, "https://x.supabase.co");
        assert_eq!(cfg.key, "secret");
    }

    #[test]
    fn missing_url_key_fails() {
        let f = write_temp("SUPABASE_SERVICE_ROLE_KEY=secret\n");
        let err = ServiceConfig::from_env_file(f.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { key: URL_KEY }));
    }

    #[test]
    fn missing_service_key_fails() {
        let f = write_temp("SUPABASE_URL=https://x.supabase.co\n");
        let err = ServiceConfig::from_env_file(f.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { key: SERVICE_KEY }));
    }

    #[test]
    fn debug_redacts_the_access_key() {
        let cfg = ServiceConfig {
            url: "https://x.supabase.co".into(),
            key: "secret".into(),
        };
        let dbg = format!("{:?}", cfg);
        assert!(dbg.contains("<redacted>"));
        assert!(!dbg.contains("secret"));
    }
}
