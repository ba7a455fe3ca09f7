//! Error types for `study_cost`

use thiserror::Error;

/// Failures of the cost data source.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The cost data could not be read or parsed, or lacks even the fallback country.
    #[error("cost data unavailable: {reason}")]
    DataUnavailable {
        /// Human-readable cause
        reason: String,
    },
}

impl EstimateError {
    /// Shorthand for building a `DataUnavailable` error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            reason: reason.into(),
        }
    }
}

/// User input that fails a client-side check.
///
/// The display strings are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name left blank
    #[error("Name is required")]
    NameRequired,
    /// Name shorter than four characters
    #[error("Name must be greater than 3 characters")]
    NameTooShort,
    /// Name contains digits or punctuation
    #[error("Name can only contain letters and spaces")]
    NameInvalidCharacters,
    /// Email left blank
    #[error("Email is required")]
    EmailRequired,
    /// Email is not `local@domain.tld`
    #[error("Please enter a valid email address")]
    EmailInvalid,
    /// Phone left blank
    #[error("Phone number is required")]
    PhoneRequired,
    /// Phone contains something other than digits
    #[error("Phone number can only contain digits")]
    PhoneNotDigits,
    /// Phone is not ten digits long
    #[error("Phone number must be 10 digits")]
    PhoneLength,
    /// Phone does not start with a mobile prefix
    #[error("Phone number must start with 6, 7, 8, or 9")]
    PhoneStartDigit,
    /// One digit appears five or more times in a row
    #[error("Digit {0} cannot repeat 5 or more times")]
    PhoneRepeatedDigit(char),
    /// A grade field is empty or not a finite number
    #[error("Please fill in all grade fields with valid numbers.")]
    GradeNotNumeric,
    /// Grades mix the CGPA and percentage scales
    #[error(
        "Please enter all grades either in percentage (values >= 10 and <= 100) or CGPA scale (values <= 10). Do not mix formats."
    )]
    GradeMixedScale,
    /// No known package in the selection
    #[error("Please select at least one package")]
    NoPackageSelected,
}

/// Failures talking to the backend API.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The configured base URL or an endpoint path could not be parsed
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
    /// Connection, TLS, or body decoding failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status
    #[error("API call failed: {status} {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error text returned by the server, if any
        message: String,
    },
}

/// Failures reading or writing the persisted session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session file could not be read or written
    #[error("session io error: {0}")]
    Io(#[from] std::io::Error),
    /// The session file is not valid session JSON
    #[error("session json error: {0}")]
    Json(#[from] serde_json::Error),
}
