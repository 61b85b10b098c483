//! Save-file versioning and migration
//!
//! Profiles are persisted inside a versioned envelope. Loading goes
//! through `migrate`, which upgrades older layouts step by step instead of
//! merging unversioned blobs with defaults on every read.
//!
//! Version history:
//! - 0: bare `PlayerAggregate` JSON, no envelope
//! - 1: `{ "version": 1, "state": { ... } }`

use crate::core::error::{CodequestError, Result};
use crate::progression::player::PlayerAggregate;
use serde::{Deserialize, Serialize};

/// Current save layout version
pub const SAVE_VERSION: u32 = 1;

/// The envelope written to storage
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub state: serde_json::Value,
}

/// Serialize an aggregate into the current envelope
pub fn encode(aggregate: &PlayerAggregate) -> Result<String> {
    let envelope = SaveFile {
        version: SAVE_VERSION,
        state: serde_json::to_value(aggregate)?,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a raw blob of any supported version into a current aggregate
///
/// Missing nested sections backfill with defaults via the aggregate's
/// serde defaults, which covers schema drift within a version.
pub fn migrate(raw: &str) -> Result<PlayerAggregate> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let version = match value.get("version").and_then(|v| v.as_u64()) {
        Some(v) => v as u32,
        // Pre-envelope saves carried the aggregate at the top level
        None => 0,
    };

    let state = match version {
        0 => value,
        SAVE_VERSION => value
            .get("state")
            .cloned()
            .ok_or_else(|| CodequestError::StorageError("save envelope missing state".into()))?,
        other => return Err(CodequestError::UnsupportedSaveVersion(other)),
    };

    Ok(serde_json::from_value(state)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_version_roundtrip() {
        let mut aggregate = PlayerAggregate::fresh();
        aggregate.player.username = "rustacean".into();
        aggregate.player.total_xp = 512;

        let blob = encode(&aggregate).unwrap();
        let back = migrate(&blob).unwrap();
        assert_eq!(back.player.username, "rustacean");
        assert_eq!(back.player.total_xp, 512);
    }

    #[test]
    fn test_version_zero_bare_aggregate_loads() {
        let aggregate = PlayerAggregate::fresh();
        let bare = serde_json::to_string(&aggregate).unwrap();

        let back = migrate(&bare).unwrap();
        assert_eq!(back.player.level, 1);
    }

    #[test]
    fn test_version_zero_with_missing_sections_backfills() {
        // Old save written before the achievement log existed
        let raw = r#"{"player":{"id":"6b742c6b-94a3-4b30-a365-56c2a9d53af1","level":7,"xp":3000,"total_xp":3000,"class_id":"frontend_wizard"}}"#;
        let back = migrate(raw).unwrap();
        assert_eq!(back.player.level, 7);
        assert!(back.achievement_log.unlocked.is_empty());
        assert_eq!(back.inventory.themes, vec!["classic".to_string()]);
    }

    #[test]
    fn test_future_version_rejected() {
        let raw = r#"{"version": 99, "state": {}}"#;
        assert!(matches!(
            migrate(raw),
            Err(CodequestError::UnsupportedSaveVersion(99))
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(migrate("not json at all").is_err());
    }
}
