//! Persistence of the authentication token between runs. The token is stored
//! as a small versioned JSON document, and should only be saved once the node
//! has accepted it.
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Version of the stored document.
const TOKEN_CACHE_VERSION: u32 = 0;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
struct StoredToken {
    version: u32,
    value:   String,
}

#[derive(Error, Debug)]
/// Failure to read or write the token cache.
pub enum TokenCacheError {
    #[error("Could not access the token cache: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed token cache: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load the token stored at the given path. Returns [`None`] if nothing is
/// stored there, or if it was stored in a version this library does not
/// understand.
pub fn load(path: &Path) -> Result<Option<String>, TokenCacheError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let stored: StoredToken = serde_json::from_str(&contents)?;
    if stored.version != TOKEN_CACHE_VERSION {
        tracing::warn!(
            target: "node_monitor",
            "Ignoring cached token with unsupported version {}.",
            stored.version
        );
        return Ok(None);
    }
    Ok(Some(stored.value))
}

/// Store the token at the given path, replacing whatever was there.
pub fn save(path: &Path, token: &str) -> Result<(), TokenCacheError> {
    let stored = StoredToken {
        version: TOKEN_CACHE_VERSION,
        value:   token.to_string(),
    };
    std::fs::write(path, serde_json::to_string(&stored)?)?;
    tracing::debug!(target: "node_monitor", "Saved token to {}.", path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("node-monitor-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn test_round_trip() {
        let path = temp_path("round-trip");
        save(&path, "secret").expect("Can write token");
        assert_eq!(
            std::fs::read_to_string(&path).expect("Token written"),
            r#"{"version":0,"value":"secret"}"#
        );
        assert_eq!(load(&path).expect("Can read token"), Some("secret".into()));
        std::fs::remove_file(&path).expect("Can remove token");
        assert_eq!(load(&path).expect("Missing file is not an error"), None);
    }

    #[test]
    fn test_unknown_version_and_malformed() {
        let path = temp_path("version");
        std::fs::write(&path, r#"{"version":1,"value":"secret"}"#).expect("Can write");
        assert_eq!(load(&path).expect("Can read token"), None);
        std::fs::write(&path, "not json").expect("Can write");
        assert!(matches!(load(&path), Err(TokenCacheError::Json(_))));
        std::fs::remove_file(&path).expect("Can remove token");
    }
}
