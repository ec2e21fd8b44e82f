//! Calculator page: empty form on `GET`, estimate on `POST`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::domain::calculation::CalculationResult;
use crate::error::FormError;
use crate::state::AppState;
use crate::web::dto::TaxForm;

/// Template for the calculator page.
///
/// Renders `templates/index.html` with:
/// - Income input form
/// - Breakdown table when `result.has_result` is set
/// - Error banner when the submission was rejected
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct CalculatorTemplate {
    pub result: ResultView,
    pub error: Option<&'static str>,
}

impl CalculatorTemplate {
    fn with_result(result: &CalculationResult) -> Self {
        Self {
            result: ResultView::from(result),
            error: None,
        }
    }

    fn with_error(err: &FormError) -> Self {
        Self {
            result: ResultView::from(&CalculationResult::default()),
            error: Some(err.user_message()),
        }
    }
}

/// [`CalculationResult`] with amounts formatted for display.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub income_individuals: String,
    pub income_businesses: String,
    pub tax_individuals: String,
    pub tax_businesses: String,
    pub relief_applied: String,
    pub remaining_relief: String,
    pub total_tax: String,
    pub has_result: bool,
}

impl From<&CalculationResult> for ResultView {
    fn from(result: &CalculationResult) -> Self {
        Self {
            income_individuals: money(result.income_individuals),
            income_businesses: money(result.income_businesses),
            tax_individuals: money(result.tax_individuals),
            tax_businesses: money(result.tax_businesses),
            relief_applied: money(result.relief_applied),
            remaining_relief: money(result.remaining_relief),
            total_tax: money(result.total_tax),
            has_result: result.has_result,
        }
    }
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

/// Renders the empty calculator.
///
/// # Endpoint
///
/// `GET /`
pub async fn calculator_page() -> impl IntoResponse {
    CalculatorTemplate::with_result(&CalculationResult::default())
}

/// Computes the estimate for a submitted form.
///
/// # Endpoint
///
/// `POST /` with fields `individual_income` and `business_income`, sent as
/// `application/x-www-form-urlencoded` or `multipart/form-data`
/// (see [`TaxForm::decode`]).
///
/// # Response
///
/// Always `200 OK` with the page. A rejected submission renders the
/// localized error and an empty result instead of the breakdown.
pub async fn calculate_handler(
    State(state): State<AppState>,
    req: Request,
) -> impl IntoResponse {
    let amounts = TaxForm::decode(req)
        .await
        .and_then(|form| form.amounts());

    match amounts {
        Ok((individual, business)) => {
            let result = state.policy.calculate(individual, business);
            tracing::debug!(
                individual,
                business,
                total_tax = result.total_tax,
                relief_applied = result.relief_applied,
                "Calculated tax estimate"
            );
            CalculatorTemplate::with_result(&result)
        }
        Err(e) => {
            tracing::warn!("Rejected form submission: {}", e);
            CalculatorTemplate::with_error(&e)
        }
    }
}

/// Rejects methods the page does not serve.
///
/// Registered for `HEAD /`, which axum would otherwise answer with the
/// `GET` handler.
pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::ParseError;
    use crate::domain::calculation::calculate_tax;
    use crate::error::IncomeField;

    #[test]
    fn test_view_formats_two_decimals() {
        let view = ResultView::from(&calculate_tax(100_000.0, 0.0));

        assert_eq!(view.tax_individuals, "4000.00");
        assert_eq!(view.relief_applied, "1000.00");
        assert_eq!(view.total_tax, "3000.00");
        assert_eq!(view.remaining_relief, "9000.00");
        assert!(view.has_result);
    }

    #[test]
    fn test_error_page_has_no_result() {
        let err = FormError::InvalidAmount {
            field: IncomeField::Businesses,
            source: ParseError::InvalidFormat,
        };

        let page = CalculatorTemplate::with_error(&err);

        assert!(!page.result.has_result);
        assert_eq!(page.result.income_individuals, "0.00");
        assert_eq!(page.error, Some("Некорректный доход от юрлиц и ИП"));
    }

    #[test]
    fn test_rendered_page_contains_breakdown() {
        let html = CalculatorTemplate::with_result(&calculate_tax(0.0, 50_000.0))
            .render()
            .unwrap();

        assert!(html.contains("3000.00"));
        assert!(html.contains("2000.00"));
        assert!(!html.contains("class=\"error\""));
    }
}
