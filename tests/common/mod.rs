#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use tax_form::api::handlers::health_handler;
use tax_form::prelude::*;
use tax_form::web;

pub const ERR_FORM: &str = "Не удалось обработать форму";
pub const ERR_INDIVIDUAL: &str = "Некорректный доход от физических лиц";
pub const ERR_BUSINESS: &str = "Некорректный доход от юрлиц и ИП";

pub fn create_test_state() -> AppState {
    AppState::new(TaxPolicy::STANDARD)
}

/// Page and health routes without the rate limiter, which needs connect info.
pub fn create_test_app() -> Router {
    web::routes::routes()
        .route("/health", get(health_handler))
        .with_state(create_test_state())
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app()).unwrap()
}

pub fn income_form<'a>(individual: &'a str, business: &'a str) -> [(&'static str, &'a str); 2] {
    [
        ("individual_income", individual),
        ("business_income", business),
    ]
}
