//! Answers and selections carried between CLI invocations
//!
//! The session is a small JSON file. The estimator never reads it; commands
//! load it and pass the values in explicitly.

use crate::core::error::SessionError;
use crate::core::models::QuestionnaireAnswers;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Country used when none has been selected
pub const DEFAULT_COUNTRY: &str = "Germany";

/// Persisted user state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    /// Country picked by the user, as displayed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_country: Option<String>,
    /// Latest completed questionnaire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questionnaire_answers: Option<QuestionnaireAnswers>,
    /// Package ids from the last package quote
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selected_packages: Vec<String>,
}

impl Session {
    /// Selected country, or [`DEFAULT_COUNTRY`]
    #[must_use]
    pub fn country(&self) -> &str {
        self.selected_country
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_COUNTRY)
    }

    /// Stored answers, or an empty questionnaire
    #[must_use]
    pub fn answers(&self) -> QuestionnaireAnswers {
        self.questionnaire_answers.unwrap_or_default()
    }
}

/// File-backed session storage
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by `path`
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Location of the session file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the session. A missing file is an empty session.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Session, SessionError> {
        if !self.path.exists() {
            return Ok(Session::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the session, creating parent directories as needed
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    /// Delete the session file if present
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_defaults_to_germany() {
        assert_eq!(Session::default().country(), DEFAULT_COUNTRY);

        let blank = Session {
            selected_country: Some("  ".to_string()),
            ..Session::default()
        };
        assert_eq!(blank.country(), DEFAULT_COUNTRY);
    }

    #[test]
    fn test_reads_browser_style_keys() {
        let session: Session = serde_json::from_str(
            r#"{"selectedCountry": "Spain", "questionnaireAnswers": {"intake": "winter"}}"#,
        )
        .unwrap();
        assert_eq!(session.country(), "Spain");
        assert_eq!(
            session.answers().intake,
            crate::core::models::Intake::Winter
        );
    }
}
