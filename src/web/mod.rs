//! Web layer for the browser-facing calculator.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`dto`] - Submitted form payloads
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod dto;
pub mod handlers;
pub mod routes;
