//! Client for the calculator backend
//!
//! Every call is a single blocking request. Failures are returned to the caller
//! unchanged; nothing is retried.

use crate::core::error::NetworkError;
use crate::core::models::{ExpenseBreakdown, QuestionnaireAnswers};
use crate::core::packages::{PackageSelection, ServicePackage};
use crate::{debug, info};
use regex::Regex;
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.calculator.globalmindsindia.com/api";

/// Backend endpoints, relative to the API root
pub mod endpoints {
    /// Liveness probe
    pub const HEALTH: &str = "health";
    /// Price a selection of service buckets
    pub const COST_CALCULATE: &str = "cost-calculator/calculate";
    /// Store a cost-calculator lead
    pub const COST_USER_DETAILS: &str = "cost-calculator/user-details";
    /// Ask the team to call the user back
    pub const COST_REQUEST_CALLBACK: &str = "cost-calculator/request-callback";
    /// Cost estimate PDF
    pub const COST_DOWNLOAD_PDF: &str = "cost-calculator/download-pdf";
    /// Custom package PDF
    pub const COST_DOWNLOAD_CUSTOM_PACKAGE_PDF: &str =
        "cost-calculator/download-custom-package-pdf";
    /// Convert a grade to the German scale
    pub const GRADE_CALCULATE: &str = "grade-calculator/calculate";
    /// Store a grade-calculator lead
    pub const GRADE_USER_DETAILS: &str = "grade-calculator/user-details";
    /// Grade certificate PDF
    pub const GRADE_DOWNLOAD_PDF: &str = "grade-calculator/download-pdf";
}

/// Why a cost-calculator lead was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadIntent {
    /// Downloaded the cost estimate report
    CostCalculatorReport,
    /// Asked for a callback
    RequestedCallback,
    /// Downloaded custom package details
    ViewedPackageDetails,
}

/// Contact details sent to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetails {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number with `+91` prefix
    pub phone: String,
    /// Capture reason; absent for grade-calculator leads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<LeadIntent>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CallbackRequest<'a> {
    name: &'a str,
    mobile_number: &'a str,
}

/// Body of the cost report PDF request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReportRequest {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Quick-estimate figures shown to the user
    pub expenses: ExpenseBreakdown,
    /// Country display name
    pub selected_country: String,
    /// Questionnaire snapshot
    pub answers: QuestionnaireAnswers,
}

#[derive(Debug, Serialize)]
struct BucketQuoteRequest<'a> {
    selected_buckets: Vec<&'a str>,
}

/// Price returned for a package selection
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PackageQuote {
    /// Total price of the selected buckets
    #[serde(default)]
    pub total_cost: f64,
}

/// Body of the custom package PDF request
#[derive(Debug, Serialize)]
pub struct CustomPackageReportRequest<'a> {
    /// Full name
    pub name: &'a str,
    /// Email address
    pub email: &'a str,
    /// Phone number
    pub phone: &'a str,
    /// Package ids
    pub selected_packages: Vec<&'a str>,
    /// Bucket names
    pub selected_buckets: Vec<&'a str>,
    /// Package details printed in the PDF
    pub package_details: Vec<&'a ServicePackage>,
}

impl<'a> CustomPackageReportRequest<'a> {
    /// Build a request for a validated contact and a package selection
    #[must_use]
    pub fn new(contact: &'a UserDetails, selection: &'a PackageSelection) -> Self {
        Self {
            name: &contact.name,
            email: &contact.email,
            phone: &contact.phone,
            selected_packages: selection.ids(),
            selected_buckets: selection.buckets(),
            package_details: selection.packages().to_vec(),
        }
    }
}

/// Grade values in the backend's field names
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeRequest {
    /// Best achievable grade
    pub best_grade: f64,
    /// Minimum passing grade
    pub min_passing_grade: f64,
    /// The student's grade
    pub your_grade: f64,
}

#[derive(Debug, Deserialize)]
struct GradeResponse {
    german_grade: Option<serde_json::Value>,
    error: Option<String>,
}

/// Outcome of a grade conversion
#[derive(Debug, Clone, PartialEq)]
pub enum GradeConversion {
    /// Numeric German grade, formatted as the backend sent it
    Grade(String),
    /// Message from the backend instead of a grade
    Rejected(String),
}

/// Body of the grade certificate PDF request
#[derive(Debug, Serialize)]
pub struct GradeCertificateRequest<'a> {
    /// Full name
    pub name: &'a str,
    /// Email address
    pub email: &'a str,
    /// Phone number
    pub phone: &'a str,
    /// Best achievable grade
    pub best_grade: f64,
    /// Minimum passing grade
    pub min_passing_grade: f64,
    /// The student's grade
    pub your_grade: f64,
    /// Converted grade
    pub german_grade: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(alias = "message")]
    error: String,
}

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// File name for a downloaded PDF: every whitespace run in `name` becomes `_`,
/// including leading and trailing ones
#[must_use]
pub fn pdf_file_name(prefix: &str, name: &str) -> String {
    let slug = WHITESPACE_RUN.replace_all(name, "_");
    format!("{prefix}_{slug}.pdf")
}

/// Blocking client for the calculator backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: Url,
    http: Client,
}

impl BackendClient {
    /// Client for the API rooted at `base_url`
    ///
    /// # Errors
    /// Returns `InvalidUrl` if `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, NetworkError> {
        Self::with_http(base_url, Client::new())
    }

    /// Client using a preconfigured HTTP client
    ///
    /// # Errors
    /// Returns `InvalidUrl` if `base_url` does not parse.
    pub fn with_http(base_url: &str, http: Client) -> Result<Self, NetworkError> {
        // A trailing slash keeps the last path segment when joining endpoints
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|err| NetworkError::InvalidUrl(format!("{base_url}: {err}")))?;
        Ok(Self { base_url, http })
    }

    /// Absolute URL of an endpoint
    ///
    /// # Errors
    /// Returns `InvalidUrl` if the endpoint cannot be joined onto the base.
    pub fn endpoint(&self, path: &str) -> Result<Url, NetworkError> {
        self.base_url
            .join(path)
            .map_err(|err| NetworkError::InvalidUrl(format!("{path}: {err}")))
    }

    fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, NetworkError> {
        let url = self.endpoint(path)?;
        debug!("POST {url}");
        let res = self.http.post(url).json(body).send()?;
        check_status(res)
    }

    fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, NetworkError> {
        Ok(self.post(path, body)?.json::<T>()?)
    }

    fn post_bytes<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>, NetworkError> {
        let bytes = self.post(path, body)?.bytes()?;
        info!("Downloaded {} bytes from {path}", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Check the backend is reachable
    ///
    /// # Errors
    /// Returns a `NetworkError` if the request fails or is rejected.
    pub fn health(&self) -> Result<serde_json::Value, NetworkError> {
        let url = self.endpoint(endpoints::HEALTH)?;
        debug!("GET {url}");
        let res = check_status(self.http.get(url).send()?)?;
        Ok(res.json()?)
    }

    /// Store a cost-calculator lead
    ///
    /// # Errors
    /// Returns a `NetworkError` if the request fails or is rejected.
    pub fn save_user_details(&self, details: &UserDetails) -> Result<(), NetworkError> {
        self.post(endpoints::COST_USER_DETAILS, details).map(drop)
    }

    /// Store a grade-calculator lead
    ///
    /// # Errors
    /// Returns a `NetworkError` if the request fails or is rejected.
    pub fn save_grade_user_details(&self, details: &UserDetails) -> Result<(), NetworkError> {
        self.post(endpoints::GRADE_USER_DETAILS, details).map(drop)
    }

    /// Ask the team to call the user back
    ///
    /// # Errors
    /// Returns a `NetworkError` if the request fails or is rejected.
    pub fn request_callback(&self, name: &str, mobile_number: &str) -> Result<(), NetworkError> {
        let body = CallbackRequest {
            name,
            mobile_number,
        };
        self.post(endpoints::COST_REQUEST_CALLBACK, &body).map(drop)
    }

    /// Price a package selection
    ///
    /// # Errors
    /// Returns a `NetworkError` if the request fails, is rejected, or the
    /// response is not valid JSON.
    pub fn quote_packages(&self, selection: &PackageSelection) -> Result<PackageQuote, NetworkError> {
        let body = BucketQuoteRequest {
            selected_buckets: selection.buckets(),
        };
        self.post_json(endpoints::COST_CALCULATE, &body)
    }

    /// Generate the cost estimate PDF
    ///
    /// # Errors
    /// Returns a `NetworkError` if the request fails or is rejected.
    pub fn download_cost_report(&self, request: &CostReportRequest) -> Result<Vec<u8>, NetworkError> {
        self.post_bytes(endpoints::COST_DOWNLOAD_PDF, request)
    }

    /// Generate the custom package PDF
    ///
    /// # Errors
    /// Returns a `NetworkError` if the request fails or is rejected.
    pub fn download_custom_package_report(
        &self,
        request: &CustomPackageReportRequest<'_>,
    ) -> Result<Vec<u8>, NetworkError> {
        self.post_bytes(endpoints::COST_DOWNLOAD_CUSTOM_PACKAGE_PDF, request)
    }

    /// Convert a grade to the German scale
    ///
    /// # Errors
    /// Returns a `NetworkError` if the request fails, is rejected, or the
    /// response carries neither a grade nor a message.
    pub fn convert_grade(&self, grade: &GradeRequest) -> Result<GradeConversion, NetworkError> {
        let res: GradeResponse = self.post_json(endpoints::GRADE_CALCULATE, grade)?;
        if let Some(error) = res.error {
            return Ok(GradeConversion::Rejected(error));
        }
        match res.german_grade {
            Some(serde_json::Value::Number(n)) => Ok(GradeConversion::Grade(n.to_string())),
            // A text grade is a message for the user, not a result
            Some(serde_json::Value::String(message)) => Ok(GradeConversion::Rejected(message)),
            _ => Err(NetworkError::Status {
                status: 200,
                message: "response has no german_grade".to_string(),
            }),
        }
    }

    /// Generate the grade certificate PDF
    ///
    /// # Errors
    /// Returns a `NetworkError` if the request fails or is rejected.
    pub fn download_grade_certificate(
        &self,
        request: &GradeCertificateRequest<'_>,
    ) -> Result<Vec<u8>, NetworkError> {
        self.post_bytes(endpoints::GRADE_DOWNLOAD_PDF, request)
    }
}

/// Turn a non-success response into `NetworkError::Status`
fn check_status(res: Response) -> Result<Response, NetworkError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let text = res.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|e| e.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .map_or_else(|| text.clone(), str::to_string)
        });
    Err(NetworkError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_api_prefix() {
        let client = BackendClient::new("https://example.com/api").unwrap();
        assert_eq!(
            client.endpoint(endpoints::COST_USER_DETAILS).unwrap().as_str(),
            "https://example.com/api/cost-calculator/user-details"
        );

        let client = BackendClient::new("https://example.com/api/").unwrap();
        assert_eq!(
            client.endpoint(endpoints::HEALTH).unwrap().as_str(),
            "https://example.com/api/health"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = BackendClient::new("not a url").unwrap_err();
        assert!(matches!(err, NetworkError::InvalidUrl(_)));
    }

    #[test]
    fn test_user_details_payload() {
        let details = UserDetails {
            name: "Asha Rao".to_string(),
            email: "asha@mail.com".to_string(),
            phone: "+919876543210".to_string(),
            intent: Some(LeadIntent::RequestedCallback),
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["intent"], "requested_callback");

        let grade_lead = UserDetails {
            intent: None,
            ..details
        };
        let value = serde_json::to_value(&grade_lead).unwrap();
        assert!(value.get("intent").is_none());
    }

    #[test]
    fn test_callback_payload_uses_camel_case() {
        let value = serde_json::to_value(CallbackRequest {
            name: "Asha Rao",
            mobile_number: "+919876543210",
        })
        .unwrap();
        assert_eq!(value["mobileNumber"], "+919876543210");
    }

    #[test]
    fn test_custom_package_payload() {
        let contact = UserDetails {
            name: "Asha Rao".to_string(),
            email: "asha@mail.com".to_string(),
            phone: "+919876543210".to_string(),
            intent: Some(LeadIntent::ViewedPackageDetails),
        };
        let selection = PackageSelection::from_ids(&["aps"]).unwrap();
        let value = serde_json::to_value(CustomPackageReportRequest::new(&contact, &selection))
            .unwrap();
        assert_eq!(value["selected_buckets"][0], "Bucket-3");
        assert_eq!(value["package_details"][0]["id"], "aps");
        assert_eq!(
            value["package_details"][0]["features"][2],
            "Pay APS fee 18000 (included)"
        );
        assert_eq!(
            value["package_details"][0]["features"]
                .as_array()
                .map(Vec::len),
            Some(6)
        );
        assert!(value["package_details"][0].get("bucket").is_none());
    }

    #[test]
    fn test_pdf_file_name() {
        assert_eq!(
            pdf_file_name("Cost_Report", "Asha  Devi Rao"),
            "Cost_Report_Asha_Devi_Rao.pdf"
        );
        assert_eq!(
            pdf_file_name("Custom_Package", " Asha\tRao "),
            "Custom_Package__Asha_Rao_.pdf"
        );
    }
}
