//! Backend client against a mock HTTP server

use httpmock::prelude::*;
use serde_json::json;
use std::net::TcpListener;
use study_cost::api::{
    BackendClient, CostReportRequest, GradeConversion, GradeRequest, LeadIntent, UserDetails,
};
use study_cost::error::NetworkError;
use study_cost::models::{ExpenseBreakdown, QuestionnaireAnswers};
use study_cost::packages::PackageSelection;

fn client(server: &MockServer) -> BackendClient {
    client_for(&server.url("/api"))
}

fn client_for(base_url: &str) -> BackendClient {
    let http = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .expect("http client");
    BackendClient::with_http(base_url, http).expect("valid base url")
}

fn contact(intent: Option<LeadIntent>) -> UserDetails {
    UserDetails {
        name: "Asha Rao".to_string(),
        email: "asha@mail.com".to_string(),
        phone: "+919876543210".to_string(),
        intent,
    }
}

#[test]
fn test_health() {
    let server = MockServer::start();
    let health = server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200).json_body(json!({"status": "ok"}));
    });

    let body = client(&server).health().unwrap();
    assert_eq!(body["status"], "ok");
    health.assert();
}

#[test]
fn test_save_user_details_posts_intent() {
    let server = MockServer::start();
    let saved = server.mock(|when, then| {
        when.method(POST)
            .path("/api/cost-calculator/user-details")
            .json_body(json!({
                "name": "Asha Rao",
                "email": "asha@mail.com",
                "phone": "+919876543210",
                "intent": "cost_calculator_report"
            }));
        then.status(200).json_body(json!({"message": "saved"}));
    });

    client(&server)
        .save_user_details(&contact(Some(LeadIntent::CostCalculatorReport)))
        .unwrap();
    saved.assert();
}

#[test]
fn test_intent_is_omitted_when_absent() {
    let server = MockServer::start();
    let saved = server.mock(|when, then| {
        when.method(POST)
            .path("/api/grade-calculator/user-details")
            .json_body(json!({
                "name": "Asha Rao",
                "email": "asha@mail.com",
                "phone": "+919876543210"
            }));
        then.status(200);
    });

    client(&server)
        .save_grade_user_details(&contact(None))
        .unwrap();
    saved.assert();
}

#[test]
fn test_error_status_carries_server_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/cost-calculator/user-details");
        then.status(500).json_body(json!({"error": "database down"}));
    });

    let err = client(&server)
        .save_user_details(&contact(Some(LeadIntent::RequestedCallback)))
        .unwrap_err();

    match &err {
        NetworkError::Status { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "database down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "API call failed: 500 database down");
}

#[test]
fn test_error_status_without_json_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(404)
            .header("content-type", "text/plain")
            .body("nope");
    });

    let err = client(&server).health().unwrap_err();
    assert!(matches!(err, NetworkError::Status { status: 404, .. }));
}

#[test]
fn test_callback_request_body() {
    let server = MockServer::start();
    let callback = server.mock(|when, then| {
        when.method(POST)
            .path("/api/cost-calculator/request-callback")
            .json_body(json!({"name": "Asha Rao", "mobileNumber": "+919876543210"}));
        then.status(200).json_body(json!({}));
    });

    client(&server)
        .request_callback("Asha Rao", "+919876543210")
        .unwrap();
    callback.assert();
}

#[test]
fn test_quote_packages() {
    let server = MockServer::start();
    let quote = server.mock(|when, then| {
        when.method(POST)
            .path("/api/cost-calculator/calculate")
            .json_body(json!({"selected_buckets": ["Bucket-5", "Bucket-1"]}));
        then.status(200).json_body(json!({"total_cost": 45000}));
    });

    let selection = PackageSelection::from_ids(&["visa", "passport"]).unwrap();
    let result = client(&server).quote_packages(&selection).unwrap();
    assert!((result.total_cost - 45000.0).abs() < f64::EPSILON);
    quote.assert();
}

#[test]
fn test_download_cost_report_returns_bytes() {
    let request = CostReportRequest {
        name: "Asha Rao".to_string(),
        email: "asha@mail.com".to_string(),
        phone: "+919876543210".to_string(),
        expenses: ExpenseBreakdown {
            accommodation: 600.0,
            food: 150.0,
            transport: 70.0,
            leisure: 30.0,
            mobile: 20.0,
            miscellaneous: 100.0,
            total: 970.0,
        },
        selected_country: "Germany".to_string(),
        answers: QuestionnaireAnswers::default(),
    };
    let expected_body = serde_json::to_value(&request).unwrap();
    assert_eq!(expected_body["selectedCountry"], "Germany");
    assert_eq!(expected_body["expenses"]["total"], 970.0);
    assert_eq!(expected_body["answers"]["courseType"], "");

    let pdf = b"%PDF-1.4 fake".to_vec();
    let server = MockServer::start();
    let download = server.mock(|when, then| {
        when.method(POST)
            .path("/api/cost-calculator/download-pdf")
            .json_body(expected_body.clone());
        then.status(200)
            .header("content-type", "application/pdf")
            .body(&pdf);
    });

    let bytes = client(&server).download_cost_report(&request).unwrap();
    assert_eq!(bytes, pdf);
    download.assert();
}

#[test]
fn test_convert_grade() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/grade-calculator/calculate")
            .json_body(json!({"best_grade": 10.0, "min_passing_grade": 4.0, "your_grade": 8.5}));
        then.status(200).json_body(json!({"german_grade": 1.7}));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/grade-calculator/calculate")
            .json_body(json!({"best_grade": 10.0, "min_passing_grade": 4.0, "your_grade": 3.0}));
        then.status(200).json_body(json!({
            "error": "Your grade must be between the passing and best grades"
        }));
    });
    let client = client(&server);

    let passing = GradeRequest {
        best_grade: 10.0,
        min_passing_grade: 4.0,
        your_grade: 8.5,
    };
    assert_eq!(
        client.convert_grade(&passing).unwrap(),
        GradeConversion::Grade("1.7".to_string())
    );

    let failing = GradeRequest {
        your_grade: 3.0,
        ..passing
    };
    assert!(matches!(
        client.convert_grade(&failing).unwrap(),
        GradeConversion::Rejected(ref msg) if msg.starts_with("Your grade")
    ));
}

#[test]
fn test_text_grade_is_a_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/grade-calculator/calculate");
        then.status(200)
            .json_body(json!({"german_grade": "Grade is outside the supported range"}));
    });

    let request = GradeRequest {
        best_grade: 100.0,
        min_passing_grade: 40.0,
        your_grade: 75.0,
    };
    assert_eq!(
        client(&server).convert_grade(&request).unwrap(),
        GradeConversion::Rejected("Grade is outside the supported range".to_string())
    );
}

#[test]
fn test_unreachable_backend_is_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let err = client_for(&format!("http://127.0.0.1:{port}/api"))
        .health()
        .unwrap_err();
    assert!(matches!(err, NetworkError::Transport(_)));
}
