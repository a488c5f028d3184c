//! Persisted session credentials
//!
//! The signed-in user's access token, refresh token and registration
//! number live in a small JSON file. It is re-read on every access so a
//! token written by a refresh is picked up immediately.

use super::error::SessionError;
use super::traits::SessionStore;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Contents of the session file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_no: Option<String>,
}

/// File-backed session store
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default session file location in the user data directory
    pub fn default_path() -> Result<PathBuf, SessionError> {
        ProjectDirs::from("io", "grievance", "grievance-tui")
            .map(|dirs| dirs.data_dir().join("session.json"))
            .ok_or(SessionError::NoDataDir)
    }

    /// Load credentials; a missing file is an empty session
    pub fn load(&self) -> Result<Credentials, SessionError> {
        if !self.path.exists() {
            return Ok(Credentials::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, credentials: &Credentials) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(credentials)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Replace the stored access token, keeping everything else
    pub fn set_access_token(&self, token: &str) -> Result<(), SessionError> {
        let mut credentials = self.load()?;
        credentials.access_token = Some(token.to_string());
        self.save(&credentials)
    }

    fn load_or_log(&self) -> Credentials {
        self.load().unwrap_or_else(|err| {
            tracing::warn!("Could not read session {}: {err}", self.path.display());
            Credentials::default()
        })
    }
}

impl SessionStore for FileSession {
    fn access_token(&self) -> Option<String> {
        self.load_or_log().access_token
    }

    fn registration_number(&self) -> Option<String> {
        self.load_or_log().reg_no
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    /// Session file inside a fresh temp dir; keep the guard alive for the test
    fn temp_session() -> (TempDir, FileSession) {
        let dir = tempdir().expect("failed to create temp dir");
        let session = FileSession::new(dir.path().join("session.json"));
        (dir, session)
    }

    fn session_file(dir: &TempDir) -> std::path::PathBuf {
        dir.path().join("session.json")
    }

    #[test]
    fn test_missing_file_is_empty_session() {
        let (_dir, session) = temp_session();
        assert_eq!(session.load().unwrap(), Credentials::default());
        assert!(session.access_token().is_none());
        assert!(session.registration_number().is_none());
    }

    #[test]
    fn test_reads_wire_field_names() {
        let (dir, session) = temp_session();
        fs::write(
            session_file(&dir),
            r#"{"accessToken":"a1","refreshToken":"r1","regNo":"21BCE1001"}"#,
        )
        .unwrap();

        assert_eq!(session.access_token().as_deref(), Some("a1"));
        assert_eq!(session.registration_number().as_deref(), Some("21BCE1001"));
        assert_eq!(session.load().unwrap().refresh_token.as_deref(), Some("r1"));
    }

    #[test]
    fn test_save_creates_missing_parent_dirs() {
        let dir = tempdir().expect("failed to create temp dir");
        let nested = dir.path().join("grievance-tui").join("session.json");
        let session = FileSession::new(&nested);

        session
            .save(&Credentials {
                reg_no: Some("21BCE1001".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(nested.exists());
        assert_eq!(session.registration_number().as_deref(), Some("21BCE1001"));
    }

    #[test]
    fn test_set_access_token_keeps_other_fields() {
        let (_dir, session) = temp_session();
        session
            .save(&Credentials {
                access_token: Some("old".to_string()),
                refresh_token: Some("r1".to_string()),
                reg_no: Some("21BCE1001".to_string()),
            })
            .unwrap();

        session.set_access_token("new").unwrap();

        let credentials = session.load().unwrap();
        assert_eq!(credentials.access_token.as_deref(), Some("new"));
        assert_eq!(credentials.refresh_token.as_deref(), Some("r1"));
        assert_eq!(credentials.reg_no.as_deref(), Some("21BCE1001"));
    }

    #[test]
    fn test_malformed_file_reads_as_empty() {
        let (dir, session) = temp_session();
        fs::write(session_file(&dir), "not json").unwrap();

        assert!(matches!(session.load(), Err(SessionError::Json(_))));
        assert!(session.access_token().is_none());
    }
}
