//! Client-side checks for lead forms and grade inputs
//!
//! All checks run before any network call. Each field is checked on its own so
//! one bad field never hides the state of another.

use crate::core::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Country calling code prepended to phone numbers
pub const PHONE_PREFIX: &str = "+91";

/// Number of digits in a phone number without the prefix
const PHONE_DIGITS: usize = 10;

/// A digit appearing this many times makes a number look fake
const MAX_DIGIT_REPEATS: usize = 5;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Check a contact name.
///
/// # Errors
/// Returns the first rule the name breaks.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if name.chars().count() <= 3 {
        return Err(ValidationError::NameTooShort);
    }
    if !NAME_RE.is_match(name) {
        return Err(ValidationError::NameInvalidCharacters);
    }
    Ok(())
}

/// Check an email address has a `local@domain.tld` shape.
///
/// # Errors
/// Returns the first rule the address breaks.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Check an Indian mobile number, with or without the `+91` prefix.
///
/// # Errors
/// Returns the first rule the number breaks.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Err(ValidationError::PhoneRequired);
    }

    let digits = phone.strip_prefix(PHONE_PREFIX).unwrap_or(phone);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::PhoneNotDigits);
    }
    if digits.len() != PHONE_DIGITS {
        return Err(ValidationError::PhoneLength);
    }
    if !matches!(digits.as_bytes()[0], b'6'..=b'9') {
        return Err(ValidationError::PhoneStartDigit);
    }

    for digit in '0'..='9' {
        if digits.chars().filter(|&c| c == digit).count() >= MAX_DIGIT_REPEATS {
            return Err(ValidationError::PhoneRepeatedDigit(digit));
        }
    }

    Ok(())
}

/// Ensure a phone number carries the `+91` prefix
#[must_use]
pub fn format_phone_number(phone: &str) -> String {
    if phone.starts_with(PHONE_PREFIX) {
        phone.to_string()
    } else {
        format!("{PHONE_PREFIX}{phone}")
    }
}

/// Contact details entered in a lead form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number, with or without `+91`
    pub phone: String,
}

/// Per-field validation outcome of a [`LeadForm`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFormErrors {
    /// Problem with the name, if any
    pub name: Option<ValidationError>,
    /// Problem with the email, if any
    pub email: Option<ValidationError>,
    /// Problem with the phone number, if any
    pub phone: Option<ValidationError>,
}

impl LeadFormErrors {
    /// Whether every field passed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// `(field, error)` pairs for the failing fields
    #[must_use]
    pub fn iter(&self) -> Vec<(&'static str, &ValidationError)> {
        [
            ("name", self.name.as_ref()),
            ("email", self.email.as_ref()),
            ("phone", self.phone.as_ref()),
        ]
        .into_iter()
        .filter_map(|(field, err)| err.map(|e| (field, e)))
        .collect()
    }
}

impl LeadForm {
    /// Validate every field independently.
    ///
    /// On success returns a copy with the phone number normalized to `+91…`.
    ///
    /// # Errors
    /// Returns the per-field errors when any field fails.
    pub fn validate(&self) -> Result<Self, LeadFormErrors> {
        let errors = LeadFormErrors {
            name: validate_name(&self.name).err(),
            email: validate_email(&self.email).err(),
            phone: validate_phone(&self.phone).err(),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: format_phone_number(&self.phone),
        })
    }
}

/// Scale all three grade inputs are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeScale {
    /// Grade point average, every value `<= 10`
    Cgpa,
    /// Percentage, every value in `10..=100`
    Percentage,
}

/// The three numbers needed to convert a grade to the German scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeInputs {
    /// Best achievable grade
    pub best_grade: f64,
    /// Minimum passing grade
    pub min_passing_grade: f64,
    /// The student's grade
    pub your_grade: f64,
}

impl GradeInputs {
    /// Parse raw text inputs.
    ///
    /// # Errors
    /// Returns `GradeNotNumeric` if any input is not a finite number.
    pub fn parse(best: &str, min_passing: &str, yours: &str) -> Result<Self, ValidationError> {
        let parse = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or(ValidationError::GradeNotNumeric)
        };
        Ok(Self {
            best_grade: parse(best)?,
            min_passing_grade: parse(min_passing)?,
            your_grade: parse(yours)?,
        })
    }

    /// Decide which scale the inputs use.
    ///
    /// # Errors
    /// Returns `GradeMixedScale` if the values do not all fit one scale.
    pub fn scale(&self) -> Result<GradeScale, ValidationError> {
        let values = [self.best_grade, self.min_passing_grade, self.your_grade];
        if values.iter().all(|&v| v <= 10.0) {
            Ok(GradeScale::Cgpa)
        } else if values.iter().all(|&v| (10.0..=100.0).contains(&v)) {
            Ok(GradeScale::Percentage)
        } else {
            Err(ValidationError::GradeMixedScale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name("   "), Err(ValidationError::NameRequired));
        assert_eq!(validate_name("Bob"), Err(ValidationError::NameTooShort));
        assert_eq!(
            validate_name("R2 D2 unit"),
            Err(ValidationError::NameInvalidCharacters)
        );
        assert_eq!(validate_name("Asha Rao"), Ok(()));
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("asha@"), Err(ValidationError::EmailInvalid));
        assert_eq!(
            validate_email("asha rao@mail.com"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(validate_email("asha@mail.com"), Ok(()));
    }

    #[test]
    fn test_phone_rules() {
        assert_eq!(validate_phone(""), Err(ValidationError::PhoneRequired));
        assert_eq!(
            validate_phone("98765-43210"),
            Err(ValidationError::PhoneNotDigits)
        );
        assert_eq!(validate_phone("987654321"), Err(ValidationError::PhoneLength));
        assert_eq!(
            validate_phone("5876543210"),
            Err(ValidationError::PhoneStartDigit)
        );
        assert_eq!(
            validate_phone("9999912345"),
            Err(ValidationError::PhoneRepeatedDigit('9'))
        );
        assert_eq!(validate_phone("9876543210"), Ok(()));
        assert_eq!(validate_phone("+919876543210"), Ok(()));
    }

    #[test]
    fn test_phone_prefix_only_is_not_digits() {
        assert_eq!(validate_phone("+91"), Err(ValidationError::PhoneNotDigits));
    }

    #[test]
    fn test_repeated_digit_message() {
        let err = validate_phone("9876000001").unwrap_err();
        assert_eq!(err.to_string(), "Digit 0 cannot repeat 5 or more times");
    }

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number("9876543210"), "+919876543210");
        assert_eq!(format_phone_number("+919876543210"), "+919876543210");
    }

    #[test]
    fn test_lead_form_reports_each_field() {
        let form = LeadForm {
            name: "Asha Rao".to_string(),
            email: "not-an-email".to_string(),
            phone: "123".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, Some(ValidationError::EmailInvalid));
        assert_eq!(errors.phone, Some(ValidationError::PhoneLength));
        assert_eq!(errors.iter().len(), 2);
    }

    #[test]
    fn test_lead_form_normalizes_phone() {
        let form = LeadForm {
            name: "Asha Rao".to_string(),
            email: "asha@mail.com".to_string(),
            phone: "9876543210".to_string(),
        };
        assert_eq!(form.validate().unwrap().phone, "+919876543210");
    }

    #[test]
    fn test_grade_scale_detection() {
        let cgpa = GradeInputs::parse("10", "4", "8.2").unwrap();
        assert_eq!(cgpa.scale(), Ok(GradeScale::Cgpa));

        let pct = GradeInputs::parse("100", "35", "78").unwrap();
        assert_eq!(pct.scale(), Ok(GradeScale::Percentage));

        let mixed = GradeInputs::parse("100", "4", "78").unwrap();
        assert_eq!(mixed.scale(), Err(ValidationError::GradeMixedScale));
    }

    #[test]
    fn test_grade_inputs_must_be_numbers() {
        assert_eq!(
            GradeInputs::parse("10", "", "8"),
            Err(ValidationError::GradeNotNumeric)
        );
        assert_eq!(
            GradeInputs::parse("ten", "4", "8"),
            Err(ValidationError::GradeNotNumeric)
        );
        assert_eq!(
            GradeInputs::parse("inf", "4", "8"),
            Err(ValidationError::GradeNotNumeric)
        );
        assert_eq!(
            GradeInputs::parse("10", "-Infinity", "8"),
            Err(ValidationError::GradeNotNumeric)
        );
        assert_eq!(
            GradeInputs::parse("10", "4", "NaN"),
            Err(ValidationError::GradeNotNumeric)
        );
    }
}
