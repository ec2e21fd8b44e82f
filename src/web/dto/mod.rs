//! Form payloads submitted by the calculator page.

pub mod tax_form;

pub use tax_form::TaxForm;
