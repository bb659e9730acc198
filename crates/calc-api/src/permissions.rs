//! Boundary-side implementation of the core's permission collaborator.

use calc_core::{Number, PermissionChecker};
use tracing::warn;

/// Permission decision driven by static service configuration.
///
/// Only `multiply` is gated; any other operation name is always granted.
#[derive(Debug)]
pub struct StaticPermissionChecker {
    allow_multiply: bool,
}

impl StaticPermissionChecker {
    pub fn new(allow_multiply: bool) -> Self {
        Self { allow_multiply }
    }
}

impl PermissionChecker for StaticPermissionChecker {
    fn validate(&self, operation: &str, operands: &[Number]) -> bool {
        let allowed = match operation {
            "multiply" => self.allow_multiply,
            _ => true,
        };
        if !allowed {
            warn!(operation, ?operands, "permission check denied the operation");
        }
        allowed
    }
}
