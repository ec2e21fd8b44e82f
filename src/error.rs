//! Errors raised while handling a submitted form.
//!
//! Every variant is scoped to one request. Handlers render
//! [`FormError::user_message`] into the page instead of failing the response.

use crate::domain::amount::ParseError;
use std::fmt;

/// Income field of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeField {
    Individuals,
    Businesses,
}

impl IncomeField {
    /// Name of the form input carrying this field.
    pub fn form_name(self) -> &'static str {
        match self {
            IncomeField::Individuals => "individual_income",
            IncomeField::Businesses => "business_income",
        }
    }
}

impl fmt::Display for IncomeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

/// Errors that can occur while turning a submission into amounts.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Failed to decode form: {0}")]
    Decoding(String),

    #[error("Invalid value for {field}: {source}")]
    InvalidAmount {
        field: IncomeField,
        #[source]
        source: ParseError,
    },
}

impl FormError {
    /// Localized message shown on the page.
    ///
    /// Amount errors are reported per field; the parse failure kind is only
    /// logged.
    pub fn user_message(&self) -> &'static str {
        match self {
            FormError::Decoding(_) => "Не удалось обработать форму",
            FormError::InvalidAmount {
                field: IncomeField::Individuals,
                ..
            } => "Некорректный доход от физических лиц",
            FormError::InvalidAmount {
                field: IncomeField::Businesses,
                ..
            } => "Некорректный доход от юрлиц и ИП",
        }
    }
}
