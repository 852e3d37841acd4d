//! Session-file backed identity lookup
//!
//! The sign-in flow itself lives outside this repository; it leaves the
//! current identity in `<data_dir>/session.json`. This module only reads
//! that file and removes it on sign-out. With the demo flag enabled, a
//! stand-in identity is seeded at startup so the signed-in surfaces can be
//! exercised locally.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::domain::models::{AuthProvider, Identity};
use crate::shared::errors::{AppError, Result};

fn session_file(data_dir: &Path) -> PathBuf {
    data_dir.join("session.json")
}

/// The identity of the current session, absent when signed out. An
/// unreadable session file is treated as signed out rather than a hard
/// failure, so a corrupt file never locks the UI.
pub fn current_identity(config: &AppConfig) -> Option<Identity> {
    match read_session(&config.data_dir) {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!("Unreadable session file, treating as signed out: {e}");
            None
        }
    }
}

fn read_session(data_dir: &Path) -> Result<Option<Identity>> {
    let path = session_file(data_dir);
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Remove the session file. Absence already means signed out, so a missing
/// file succeeds.
pub fn clear_session(config: &AppConfig) -> Result<()> {
    let path = session_file(&config.data_dir);
    if !path.exists() {
        return Ok(());
    }
    fs::remove_file(&path).map_err(|e| AppError::SignOutFailed(e.to_string()))
}

/// Seed the demo identity unless a session already exists. Called once at
/// startup when the demo flag is set; sign-out still works normally until
/// the next restart.
pub fn seed_demo_session(config: &AppConfig) -> Result<()> {
    let path = session_file(&config.data_dir);
    if path.exists() {
        return Ok(());
    }
    fs::create_dir_all(&config.data_dir)?;
    fs::write(&path, serde_json::to_string_pretty(&demo_identity())?)?;
    tracing::info!("Seeded demo session at {}", path.display());
    Ok(())
}

pub fn demo_identity() -> Identity {
    Identity {
        id: "demo-user".to_string(),
        email: "demo@cryptohub.dev".to_string(),
        display_name: Some("Demo Trader".to_string()),
        photo_url: None,
        provider: AuthProvider::Password,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config() -> AppConfig {
        AppConfig {
            data_dir: std::env::temp_dir()
                .join(format!("cryptohub-session-test-{}", uuid::Uuid::new_v4())),
            demo_user: false,
        }
    }

    #[test]
    fn test_absent_session_means_signed_out() {
        let config = temp_config();
        assert_eq!(current_identity(&config), None);
    }

    #[test]
    fn test_seed_read_clear_round_trip() {
        let config = temp_config();

        seed_demo_session(&config).unwrap();
        let identity = current_identity(&config).expect("demo identity present");
        assert_eq!(identity.id, "demo-user");
        assert!(identity.is_password_provider());

        clear_session(&config).unwrap();
        assert_eq!(current_identity(&config), None);

        fs::remove_dir_all(&config.data_dir).ok();
    }

    #[test]
    fn test_clear_session_succeeds_when_already_signed_out() {
        let config = temp_config();
        assert!(clear_session(&config).is_ok());
    }

    #[test]
    fn test_seed_does_not_clobber_existing_session() {
        let config = temp_config();
        fs::create_dir_all(&config.data_dir).unwrap();

        let existing = Identity {
            id: "real-user".to_string(),
            email: "real@cryptohub.dev".to_string(),
            display_name: None,
            photo_url: None,
            provider: AuthProvider::Google,
        };
        fs::write(
            config.data_dir.join("session.json"),
            serde_json::to_string(&existing).unwrap(),
        )
        .unwrap();

        seed_demo_session(&config).unwrap();
        assert_eq!(current_identity(&config).unwrap().id, "real-user");

        fs::remove_dir_all(&config.data_dir).ok();
    }

    #[test]
    fn test_corrupt_session_file_reads_as_signed_out() {
        let config = temp_config();
        fs::create_dir_all(&config.data_dir).unwrap();
        fs::write(config.data_dir.join("session.json"), "not json").unwrap();

        assert_eq!(current_identity(&config), None);

        fs::remove_dir_all(&config.data_dir).ok();
    }
}
