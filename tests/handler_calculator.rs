mod common;

use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use axum_test::multipart::MultipartForm;
use common::{ERR_BUSINESS, ERR_FORM, ERR_INDIVIDUAL, income_form};
use tower::ServiceExt;

#[tokio::test]
async fn test_get_renders_empty_form() {
    let server = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("name=\"individual_income\""));
    assert!(html.contains("name=\"business_income\""));
    assert!(!html.contains("id=\"result\""));
    assert!(!html.contains("class=\"error\""));
}

#[tokio::test]
async fn test_post_individual_income() {
    let server = common::create_test_server();

    let response = server.post("/").form(&income_form("100000", "")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("id=\"result\""));
    assert!(html.contains("4000.00"));
    assert!(html.contains("1000.00"));
    assert!(html.contains("9000.00"));
    assert!(html.contains("3000.00"));
    assert!(html.contains("value=\"100000.00\""));
}

#[tokio::test]
async fn test_post_relief_capped() {
    let server = common::create_test_server();

    let response = server.post("/").form(&income_form("2000000", "0")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("80000.00"));
    assert!(html.contains("10000.00"));
    assert!(html.contains("70000.00"));
}

#[tokio::test]
async fn test_post_business_income() {
    let server = common::create_test_server();

    let response = server.post("/").form(&income_form("", "50000")).await;

    let html = response.text();
    assert!(html.contains("3000.00"));
    assert!(html.contains("2000.00"));
}

#[tokio::test]
async fn test_post_empty_fields_shows_no_result() {
    let server = common::create_test_server();

    let response = server.post("/").form(&income_form("", "")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("id=\"result\""));
    assert!(!html.contains("class=\"error\""));
}

#[tokio::test]
async fn test_post_missing_fields_treated_as_empty() {
    let server = common::create_test_server();

    let response = server
        .post("/")
        .form(&[("business_income", "50000")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("2000.00"));
}

#[tokio::test]
async fn test_post_invalid_individual_income() {
    let server = common::create_test_server();

    let response = server.post("/").form(&income_form("abc", "100")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(ERR_INDIVIDUAL));
    assert!(!html.contains("id=\"result\""));
}

#[tokio::test]
async fn test_post_negative_business_income() {
    let server = common::create_test_server();

    let response = server.post("/").form(&income_form("100", "-5")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(ERR_BUSINESS));
    assert!(!html.contains("id=\"result\""));
}

#[tokio::test]
async fn test_post_both_invalid_reports_individual_first() {
    let server = common::create_test_server();

    let response = server.post("/").form(&income_form("-1", "xyz")).await;

    let html = response.text();
    assert!(html.contains(ERR_INDIVIDUAL));
    assert!(!html.contains(ERR_BUSINESS));
}

#[tokio::test]
async fn test_post_repeated_field_uses_first_value() {
    let server = common::create_test_server();

    let response = server
        .post("/")
        .form(&[
            ("individual_income", "100000"),
            ("individual_income", "5"),
            ("business_income", ""),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("class=\"error\""));
    assert!(html.contains("id=\"result\""));
    assert!(html.contains("value=\"100000.00\""));
    assert!(html.contains("3000.00"));
}

#[tokio::test]
async fn test_post_multipart_form() {
    let server = common::create_test_server();

    let form = MultipartForm::new()
        .add_text("individual_income", "100000")
        .add_text("business_income", "50000");

    let response = server.post("/").multipart(form).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("class=\"error\""));
    assert!(html.contains("id=\"result\""));
    // 4000 + 3000 - (1000 + 1000)
    assert!(html.contains("5000.00"));
}

#[tokio::test]
async fn test_post_multipart_invalid_amount() {
    let server = common::create_test_server();

    let form = MultipartForm::new().add_text("business_income", "-5");

    let response = server.post("/").multipart(form).await;

    response.assert_status_ok();
    assert!(response.text().contains(ERR_BUSINESS));
}

#[tokio::test]
async fn test_post_malformed_multipart_reports_form_error() {
    let server = common::create_test_server();

    let response = server
        .post("/")
        .bytes(Bytes::from_static(b"not a multipart body"))
        .content_type("multipart/form-data; boundary=XYZ")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(ERR_FORM));
    assert!(!html.contains("id=\"result\""));
}

#[tokio::test]
async fn test_post_non_form_content_type_is_empty_submission() {
    let server = common::create_test_server();

    let response = server.post("/").text("individual_income=100").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("class=\"error\""));
    assert!(!html.contains("id=\"result\""));
}

#[tokio::test]
async fn test_post_query_fields_follow_body_fields() {
    let server = common::create_test_server();

    let response = server
        .post("/")
        .add_query_param("business_income", "50000")
        .add_query_param("individual_income", "1")
        .form(&[("individual_income", "100000")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("value=\"100000.00\""));
    assert!(html.contains("5000.00"));
}

#[tokio::test]
async fn test_other_methods_not_allowed() {
    let app = common::create_test_app();

    for method in [Method::HEAD, Method::PUT, Method::DELETE, Method::PATCH] {
        let request = Request::builder()
            .method(method.clone())
            .uri("/")
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} should be rejected"
        );
    }
}
