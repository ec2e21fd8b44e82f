//! Shared application state injected into handlers.

use crate::domain::calculation::TaxPolicy;

/// Immutable state built once at startup and cloned into every request.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub policy: TaxPolicy,
}

impl AppState {
    /// Creates state serving the given policy.
    pub fn new(policy: TaxPolicy) -> Self {
        Self { policy }
    }
}
