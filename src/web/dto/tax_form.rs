//! Calculator form submission.

use crate::domain::amount::parse_amount;
use crate::error::{FormError, IncomeField};
use axum::extract::{FromRequest, Multipart, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;

const URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";

/// Submitted income fields of `POST /`.
///
/// Both fields are optional; an absent field behaves like an empty one.
#[derive(Debug, Default)]
pub struct TaxForm {
    pub individual_income: String,
    pub business_income: String,
}

impl TaxForm {
    /// Decodes the form from a request.
    ///
    /// # Sources
    ///
    /// 1. **Body**: `application/x-www-form-urlencoded` or `multipart/form-data`;
    ///    any other content type contributes no fields
    /// 2. **Query string**: appended after the body fields
    ///
    /// When a field is repeated, the first value wins. Multipart file parts
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Decoding`] if the body cannot be read, a multipart
    /// body is malformed, or the query string cannot be parsed.
    pub async fn decode(req: Request) -> Result<Self, FormError> {
        let query = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
            .map_err(|rejection| FormError::Decoding(rejection.body_text()))?;

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| {
                value
                    .to_str()
                    .map(media_type)
                    .map_err(|_| FormError::Decoding("Content-Type is not valid text".to_string()))
            })
            .transpose()?
            .unwrap_or_default();

        let mut pairs = match content_type.as_str() {
            URLENCODED => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, &())
                    .await
                    .map_err(|rejection| FormError::Decoding(rejection.body_text()))?;
                pairs
            }
            MULTIPART => {
                let multipart = Multipart::from_request(req, &())
                    .await
                    .map_err(|rejection| FormError::Decoding(rejection.body_text()))?;
                read_multipart(multipart).await?
            }
            _ => Vec::new(),
        };
        pairs.extend(query.0);

        Ok(Self::from_pairs(pairs))
    }

    /// Builds the form from key/value pairs, keeping the first value of each field.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut individual = None;
        let mut business = None;

        for (name, value) in pairs {
            match name.as_str() {
                "individual_income" => {
                    individual.get_or_insert(value);
                }
                "business_income" => {
                    business.get_or_insert(value);
                }
                _ => {}
            }
        }

        Self {
            individual_income: individual.unwrap_or_default(),
            business_income: business.unwrap_or_default(),
        }
    }

    /// Parses both fields into amounts.
    ///
    /// The individual field is checked first, so when both are invalid the
    /// error names [`IncomeField::Individuals`].
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidAmount`] for the first field that fails
    /// [`parse_amount`].
    pub fn amounts(&self) -> Result<(f64, f64), FormError> {
        let individual = parse_field(IncomeField::Individuals, &self.individual_income)?;
        let business = parse_field(IncomeField::Businesses, &self.business_income)?;

        Ok((individual, business))
    }
}

/// Lowercased media type without parameters, e.g. `multipart/form-data`.
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

async fn read_multipart(mut multipart: Multipart) -> Result<Vec<(String, String)>, FormError> {
    let mut pairs = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| FormError::Decoding(e.body_text()))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| FormError::Decoding(e.body_text()))?;
        pairs.push((name, value));
    }

    Ok(pairs)
}

fn parse_field(field: IncomeField, raw: &str) -> Result<f64, FormError> {
    parse_amount(raw).map_err(|source| FormError::InvalidAmount { field, source })
}
